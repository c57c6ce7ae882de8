use eframe::egui::{Button, TextEdit, Ui};

use crate::app::App;
use crate::ui::settings::poll_unit;
use crate::ui::styles::colored_subsection_heading;
use crate::ui::{UI_CONFIG, UI_TEXT};

impl App {
    pub(super) fn render_settings_security(&mut self, ui: &mut Ui) {
        if poll_unit(&mut self.settings_ui.pin_save, &mut self.settings_ui.error) {
            self.stores.security.set_pin_locked(true);
            self.settings_ui.pin_entry.clear();
            self.settings_ui.pin_confirm.clear();
        }

        ui.label(colored_subsection_heading(&UI_TEXT.st_security_heading));
        ui.add_space(5.0);

        if self.stores.security.is_pin_locked() {
            ui.colored_label(UI_CONFIG.colors.success, &UI_TEXT.st_pin_locked);
            return;
        }
        ui.colored_label(UI_CONFIG.colors.warning, &UI_TEXT.st_pin_unlocked);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.st_pin_new);
            ui.add(
                TextEdit::singleline(&mut self.settings_ui.pin_entry)
                    .password(true)
                    .desired_width(100.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.st_pin_confirm);
            ui.add(
                TextEdit::singleline(&mut self.settings_ui.pin_confirm)
                    .password(true)
                    .desired_width(100.0),
            );
        });

        let busy = self.settings_ui.pin_save.is_some();
        if busy {
            ui.spinner();
        }
        let ready = !self.settings_ui.pin_entry.is_empty() && !busy;
        if ui
            .add_enabled(ready, Button::new(&UI_TEXT.st_pin_create))
            .clicked()
        {
            if self.settings_ui.pin_entry != self.settings_ui.pin_confirm {
                self.settings_ui.error = Some(UI_TEXT.st_pin_mismatch.clone());
            } else if let Some(api) = self.daemon_api() {
                let pin = self.settings_ui.pin_entry.clone();
                self.settings_ui.pin_save =
                    self.settings_invoke(async move { api.create_pin(&pin).await });
            }
        }
    }
}
