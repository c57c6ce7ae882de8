use eframe::egui::{Align, Layout, RichText, Ui};

use crate::bridge::LinkStatus;
use crate::models::{AirdropStatus, BaseNodeStatus, NetworkStatus};
use crate::ui::styles::{UiStyleExt, link_status_color};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Top strip: daemon link, chain tip, peers and network health at a glance.
pub struct StatusStrip {
    link: LinkStatus,
    node: BaseNodeStatus,
    network: NetworkStatus,
    peer_count: usize,
    display_height: u64,
    airdrop: AirdropStatus,
}

impl StatusStrip {
    pub fn new(
        link: LinkStatus,
        node: BaseNodeStatus,
        network: NetworkStatus,
        peer_count: usize,
        display_height: u64,
        airdrop: AirdropStatus,
    ) -> Self {
        Self {
            link,
            node,
            network,
            peer_count,
            display_height,
            airdrop,
        }
    }

    fn link_label(&self) -> &'static str {
        match self.link {
            LinkStatus::Connected => UI_TEXT.ss_link_connected.as_str(),
            LinkStatus::Connecting => UI_TEXT.ss_link_connecting.as_str(),
            LinkStatus::Disconnected => UI_TEXT.ss_link_disconnected.as_str(),
        }
    }

    pub fn render(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.link_label())
                    .strong()
                    .small()
                    .color(link_status_color(self.link)),
            );
            ui.separator();

            ui.metric(
                &UI_TEXT.ss_height,
                &self.display_height.to_string(),
                UI_CONFIG.colors.heading,
            );
            ui.metric(
                &UI_TEXT.ss_peers,
                &self.peer_count.to_string(),
                UI_CONFIG.colors.label,
            );

            if self.node.is_synced {
                ui.label_subdued(&UI_TEXT.ss_synced);
            } else {
                ui.label(
                    RichText::new(&UI_TEXT.ss_syncing)
                        .small()
                        .color(UI_CONFIG.colors.warning),
                );
            }

            let latency_color = if self.network.is_too_low {
                UI_CONFIG.colors.danger
            } else {
                UI_CONFIG.colors.label
            };
            ui.metric(
                &UI_TEXT.ss_latency,
                &format!("{:.0} ms", self.network.latency),
                latency_color,
            );
            if self.network.is_too_low {
                ui.label(
                    RichText::new(&UI_TEXT.ss_network_slow)
                        .small()
                        .color(UI_CONFIG.colors.warning),
                );
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if self.airdrop.logged_in {
                    ui.metric(
                        &UI_TEXT.ss_gems,
                        &format!("{:.0}", self.airdrop.gems),
                        UI_CONFIG.colors.success,
                    );
                }
            });
        });
    }
}
