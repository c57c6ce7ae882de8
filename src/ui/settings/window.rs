use std::future::Future;

use eframe::egui::{Context, ScrollArea, Window};
use poll_promise::Promise;
use strum::IntoEnumIterator;

use crate::app::App;
use crate::bridge::{BridgeError, BridgeHandle};
use crate::ui::settings::SettingsSection;
use crate::ui::{UI_CONFIG, UI_TEXT};

impl App {
    pub(crate) fn render_settings_window(&mut self, ctx: &Context) {
        if !self.settings_ui.open {
            return;
        }
        let mut open = true;
        Window::new(&UI_TEXT.ctrl_settings)
            .open(&mut open)
            .resizable(true)
            .collapsible(false)
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for section in SettingsSection::iter() {
                        let selected = self.settings_section == section;
                        if ui.selectable_label(selected, section.to_string()).clicked() {
                            self.settings_section = section;
                            self.settings_ui.error = None;
                        }
                    }
                });
                ui.separator();
                ScrollArea::vertical().show(ui, |ui| match self.settings_section {
                    SettingsSection::Mining => self.render_settings_mining(ui),
                    SettingsSection::Pools => self.render_settings_pools(ui),
                    SettingsSection::Connections => self.render_settings_connections(ui),
                    SettingsSection::Security => self.render_settings_security(ui),
                    SettingsSection::General => self.render_settings_general(ui),
                    SettingsSection::Tapplets => self.render_settings_tapplets(ui),
                });
                if let Some(err) = &self.settings_ui.error {
                    ui.separator();
                    ui.colored_label(
                        UI_CONFIG.colors.danger,
                        format!("{}: {}", UI_TEXT.label_error_prefix, err),
                    );
                }
            });
        self.settings_ui.open = open;
    }

    /// Run one daemon call off the UI thread. The result lands in a
    /// [`Promise`] polled on later frames.
    pub(super) fn settings_invoke<T, Fut>(
        &self,
        fut: Fut,
    ) -> Option<Promise<Result<T, BridgeError>>>
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T, BridgeError>> + Send + 'static,
    {
        let bridge = self.bridge.as_ref()?;
        let rt = bridge.rt().clone();
        Some(Promise::spawn_thread("settings_invoke", move || {
            rt.block_on(fut)
        }))
    }

    pub(super) fn daemon_api(&self) -> Option<BridgeHandle> {
        self.bridge.as_ref().map(|b| b.handle.clone())
    }
}
