use eframe::egui::{RichText, ScrollArea, TextEdit, Ui};

use crate::app::App;
use crate::models::TorConfig;
use crate::ui::settings::poll_value;
use crate::ui::styles::{UiStyleExt, colored_subsection_heading};
use crate::ui::UI_TEXT;

impl App {
    pub(super) fn render_settings_connections(&mut self, ui: &mut Ui) {
        if let Some(config) =
            poll_value(&mut self.settings_ui.tor_fetch, &mut self.settings_ui.error)
        {
            self.settings_ui.set_tor_fields(&config);
        }
        if let Some(bridges) = poll_value(
            &mut self.settings_ui.tor_bridges_fetch,
            &mut self.settings_ui.error,
        ) {
            if !self.settings_ui.tor_bridges_text.is_empty() {
                self.settings_ui.tor_bridges_text.push('\n');
            }
            self.settings_ui.tor_bridges_text.push_str(&bridges.join("\n"));
            self.settings_ui.tor_use_bridges = true;
        }
        if let Some(peers) = poll_value(
            &mut self.settings_ui.peers_refresh,
            &mut self.settings_ui.error,
        ) {
            self.stores.node.replace_peers(peers);
        }

        // First visit pulls the live config into the edit buffers.
        if !self.settings_ui.tor_loaded && self.settings_ui.tor_fetch.is_none() {
            self.settings_ui.tor_loaded = true;
            if let Some(api) = self.daemon_api() {
                self.settings_ui.tor_fetch =
                    self.settings_invoke(async move { api.get_tor_config().await });
            }
        }

        ui.label(colored_subsection_heading(&UI_TEXT.st_conn_heading));
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.st_tor_control_port);
            ui.add(TextEdit::singleline(&mut self.settings_ui.tor_port_text).desired_width(80.0));
        });
        ui.checkbox(
            &mut self.settings_ui.tor_use_bridges,
            &UI_TEXT.st_tor_use_bridges,
        );
        ui.label(&UI_TEXT.st_tor_bridges);
        ui.add(
            TextEdit::multiline(&mut self.settings_ui.tor_bridges_text)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            let busy = self.settings_ui.tor_fetch.is_some()
                || self.settings_ui.tor_bridges_fetch.is_some();
            if busy {
                ui.spinner();
            }
            ui.add_enabled_ui(!busy, |ui| {
                if ui.button(&UI_TEXT.st_tor_load).clicked() {
                    if let Some(api) = self.daemon_api() {
                        self.settings_ui.tor_fetch =
                            self.settings_invoke(async move { api.get_tor_config().await });
                    }
                }
                if ui.button(&UI_TEXT.st_tor_fetch_bridges).clicked() {
                    if let Some(api) = self.daemon_api() {
                        self.settings_ui.tor_bridges_fetch =
                            self.settings_invoke(async move { api.fetch_tor_bridges().await });
                    }
                }
                if ui.button(&UI_TEXT.st_tor_save).clicked() {
                    self.apply_tor_config();
                }
            });
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(colored_subsection_heading(&UI_TEXT.st_peers_heading));
            if self.settings_ui.peers_refresh.is_some() {
                ui.spinner();
            } else if ui.small_button(&UI_TEXT.st_peers_refresh).clicked() {
                if let Some(api) = self.daemon_api() {
                    self.settings_ui.peers_refresh =
                        self.settings_invoke(async move { api.list_connected_peers().await });
                }
            }
        });
        let peers = self.stores.node.peers();
        if peers.is_empty() {
            ui.label_subdued(&UI_TEXT.st_peers_empty);
        } else {
            ScrollArea::vertical()
                .max_height(120.0)
                .id_salt("peer_list")
                .show(ui, |ui| {
                    for peer in &peers {
                        ui.label(RichText::new(peer).monospace().size(11.0));
                    }
                });
        }
    }

    fn apply_tor_config(&mut self) {
        let Ok(control_port) = self.settings_ui.tor_port_text.trim().parse::<u16>() else {
            self.settings_ui.error =
                Some(format!("Bad port: {}", self.settings_ui.tor_port_text));
            return;
        };
        let config = TorConfig {
            control_port,
            use_bridges: self.settings_ui.tor_use_bridges,
            bridges: self
                .settings_ui
                .tor_bridges_text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        };
        if let Some(api) = self.daemon_api() {
            // The daemon echoes back whatever it applied; the editor resyncs
            // to that.
            self.settings_ui.tor_fetch =
                self.settings_invoke(async move { api.set_tor_config(&config).await });
        }
    }
}
