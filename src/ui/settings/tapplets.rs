use eframe::egui::{Button, Grid, RichText, Ui};

use crate::app::App;
use crate::ui::settings::{poll_unit, poll_value};
use crate::ui::styles::{UiStyleExt, colored_subsection_heading};
use crate::ui::UI_TEXT;

impl App {
    pub(super) fn render_settings_tapplets(&mut self, ui: &mut Ui) {
        if let Some(addr) = poll_value(
            &mut self.settings_ui.tapplet_launch,
            &mut self.settings_ui.error,
        ) {
            self.settings_ui.tapplet_addr = Some(addr);
        }
        // Upload completion needs no action; the daemon announces the new
        // tapplet list itself.
        poll_unit(
            &mut self.settings_ui.wasm_upload,
            &mut self.settings_ui.error,
        );

        ui.label(colored_subsection_heading(&UI_TEXT.st_tapplets_heading));
        ui.add_space(5.0);

        let tapplets = self.stores.tapplets.list();
        if tapplets.is_empty() {
            ui.label_subdued(&UI_TEXT.st_tapplets_empty);
        } else {
            let busy = self.settings_ui.tapplet_launch.is_some();
            Grid::new("tapplet_list")
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for tapplet in &tapplets {
                        ui.label(RichText::new(&tapplet.display_name).strong());
                        ui.label_subdued(format!("v{}", tapplet.version));
                        ui.add_enabled_ui(!busy, |ui| {
                            if ui.small_button(&UI_TEXT.st_tapplet_launch).clicked() {
                                if let Some(api) = self.daemon_api() {
                                    let id = tapplet.tapplet_id;
                                    self.settings_ui.tapplet_launch = self
                                        .settings_invoke(async move {
                                            api.launch_tapplet(id).await
                                        });
                                }
                            }
                        });
                        ui.end_row();
                    }
                });
            if busy {
                ui.spinner();
            }
        }
        if let Some(addr) = &self.settings_ui.tapplet_addr {
            ui.add_space(8.0);
            ui.hyperlink(addr);
        }

        ui.add_space(12.0);
        let uploading = self.settings_ui.wasm_upload.is_some();
        if uploading {
            ui.spinner();
        }
        if ui
            .add_enabled(!uploading, Button::new(&UI_TEXT.st_tapplet_upload))
            .clicked()
        {
            let picked = rfd::FileDialog::new()
                .set_title(&UI_TEXT.st_tapplet_pick_wasm)
                .add_filter("wasm", &["wasm"])
                .pick_file();
            if let (Some(path), Some(api)) = (picked, self.daemon_api()) {
                let file_path = path.display().to_string();
                self.settings_ui.wasm_upload =
                    self.settings_invoke(async move { api.upload_wasm_file(&file_path).await });
            }
        }
    }
}
