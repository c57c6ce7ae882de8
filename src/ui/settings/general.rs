use eframe::egui::{Button, TextEdit, Ui};

use crate::app::App;
use crate::ui::settings::poll_unit;
use crate::ui::styles::colored_subsection_heading;
use crate::ui::{UI_CONFIG, UI_TEXT};

impl App {
    pub(super) fn render_settings_general(&mut self, ui: &mut Ui) {
        poll_unit(&mut self.settings_ui.log_open, &mut self.settings_ui.error);
        if poll_unit(
            &mut self.settings_ui.feedback_send,
            &mut self.settings_ui.error,
        ) {
            self.settings_ui.feedback_sent = true;
            self.settings_ui.feedback_text.clear();
        }

        ui.label(colored_subsection_heading(&UI_TEXT.st_general_heading));
        ui.add_space(5.0);

        if ui.button(&UI_TEXT.st_open_logs).clicked() {
            if let Some(api) = self.daemon_api() {
                self.settings_ui.log_open =
                    self.settings_invoke(async move { api.open_log_dir().await });
            }
        }

        ui.add_space(12.0);
        ui.label(colored_subsection_heading(&UI_TEXT.st_feedback_heading));
        let edited = ui.add(
            TextEdit::multiline(&mut self.settings_ui.feedback_text)
                .hint_text(&UI_TEXT.st_feedback_hint)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        if edited.changed() {
            self.settings_ui.feedback_sent = false;
        }
        ui.checkbox(
            &mut self.settings_ui.feedback_include_logs,
            &UI_TEXT.st_feedback_include_logs,
        );

        ui.horizontal(|ui| {
            let busy = self.settings_ui.feedback_send.is_some();
            if busy {
                ui.spinner();
            }
            let ready = !self.settings_ui.feedback_text.trim().is_empty() && !busy;
            if ui
                .add_enabled(ready, Button::new(&UI_TEXT.st_feedback_send))
                .clicked()
            {
                if let Some(api) = self.daemon_api() {
                    let feedback = self.settings_ui.feedback_text.clone();
                    let include_logs = self.settings_ui.feedback_include_logs;
                    self.settings_ui.feedback_send = self.settings_invoke(async move {
                        api.send_feedback(&feedback, include_logs).await
                    });
                }
            }
            if self.settings_ui.feedback_sent {
                ui.colored_label(UI_CONFIG.colors.success, &UI_TEXT.st_feedback_sent);
            }
        });
    }
}
