use eframe::egui::{ComboBox, RichText, Slider, Ui};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::models::MiningMode;
use crate::ui::settings::poll_unit;
use crate::ui::styles::colored_subsection_heading;
use crate::ui::{UI_CONFIG, UI_TEXT};

impl App {
    pub(super) fn render_settings_mining(&mut self, ui: &mut Ui) {
        poll_unit(&mut self.settings_ui.apply, &mut self.settings_ui.error);

        ui.label(colored_subsection_heading(&UI_TEXT.st_mining_heading));
        ui.add_space(5.0);

        let changing = self.session.changing_mode();
        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.st_mode);
            ui.add_enabled_ui(!changing, |ui| {
                let mut picked = self.selected_mode;
                ComboBox::from_id_salt("settings_mode")
                    .selected_text(picked.to_string())
                    .show_ui(ui, |ui| {
                        for mode in MiningMode::iter() {
                            ui.selectable_value(&mut picked, mode, mode.to_string());
                        }
                    });
                if picked != self.selected_mode {
                    self.dispatch_mode_change(picked);
                }
            });
            if changing {
                ui.label(RichText::new(&UI_TEXT.st_mode_locked).color(UI_CONFIG.colors.warning));
            }
        });

        // Slider ceilings come from the daemon's consumption report.
        let levels = self.stores.devices.max_levels();
        let max_cpu = levels.as_ref().map_or(8, |l| l.max_cpu_threads.max(1));
        let max_gpu = levels.as_ref().map_or(8, |l| l.max_gpu_threads().max(1));

        ui.add_enabled_ui(self.selected_mode == MiningMode::Custom && !changing, |ui| {
            let cpu = ui.add(
                Slider::new(&mut self.custom_cpu_usage, 1..=max_cpu).text(&UI_TEXT.st_custom_cpu),
            );
            let gpu = ui.add(
                Slider::new(&mut self.custom_gpu_usage, 1..=max_gpu).text(&UI_TEXT.st_custom_gpu),
            );
            if cpu.drag_stopped() || gpu.drag_stopped() {
                self.dispatch_mode_change(MiningMode::Custom);
            }
        });

        ui.add_space(10.0);
        if ui
            .checkbox(&mut self.cpu_enabled_pref, &UI_TEXT.st_cpu_enabled)
            .changed()
        {
            if let Some(api) = self.daemon_api() {
                let enabled = self.cpu_enabled_pref;
                self.settings_ui.apply =
                    self.settings_invoke(async move { api.set_cpu_mining_enabled(enabled).await });
            }
        }
        if ui
            .checkbox(&mut self.gpu_enabled_pref, &UI_TEXT.st_gpu_enabled)
            .changed()
        {
            if let Some(api) = self.daemon_api() {
                let enabled = self.gpu_enabled_pref;
                self.settings_ui.apply =
                    self.settings_invoke(async move { api.set_gpu_mining_enabled(enabled).await });
            }
        }
        if ui
            .checkbox(&mut self.mine_on_app_start, &UI_TEXT.st_mine_on_start)
            .changed()
        {
            if let Some(api) = self.daemon_api() {
                let enabled = self.mine_on_app_start;
                self.settings_ui.apply =
                    self.settings_invoke(async move { api.set_mine_on_app_start(enabled).await });
            }
        }

        let devices = self.stores.devices.detected();
        if !devices.is_empty() {
            ui.add_space(10.0);
            ui.label(colored_subsection_heading(&UI_TEXT.st_gpu_devices));
            for device in &devices {
                let mut active = !self.stores.devices.is_excluded(device.device_index);
                if ui.checkbox(&mut active, &device.device_name).changed() {
                    let excluded = self.stores.devices.toggle_excluded(device.device_index);
                    if let Some(api) = self.daemon_api() {
                        self.settings_ui.apply = self.settings_invoke(async move {
                            api.set_excluded_gpu_devices(&excluded).await
                        });
                    }
                }
            }
        }

        if self.settings_ui.apply.is_some() {
            ui.spinner();
        }
    }
}
