use eframe::egui::{CentralPanel, Context, SidePanel, TopBottomPanel};

use crate::app::App;
use crate::models::ControlAction;
use crate::ui::UI_CONFIG;
use crate::ui::controls_panel::{ControlsAction, ControlsPanel};
use crate::ui::dashboard::{Dashboard, DashboardAction};
use crate::ui::status_strip::StatusStrip;
use crate::ui::wallet_panel::WalletPanel;

impl App {
    pub(crate) fn render_status_strip(&mut self, ctx: &Context) {
        let base_node = self.stores.node.base_node();
        // Until the first settled block, fall back to the node's own tip.
        let height = match self.blocks.display_height() {
            0 => base_node.block_height,
            h => h,
        };
        TopBottomPanel::top("status_strip")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                StatusStrip::new(
                    self.link_status(),
                    base_node,
                    self.stores.node.network(),
                    self.stores.node.peer_count(),
                    height,
                    self.stores.airdrop.get(),
                )
                .render(ui);
            });
    }

    pub(crate) fn render_controls_panel(&mut self, ctx: &Context) {
        let action = SidePanel::left("controls_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(220.0)
            .show(ctx, |ui| {
                ControlsPanel::new(
                    self.session.snapshot(),
                    self.stores.metrics.any_mining(),
                    self.link_status(),
                    self.selected_mode,
                    self.last_control_error.as_deref(),
                )
                .render(ui)
            })
            .inner;

        if let Some(action) = action {
            self.handle_controls_action(action);
        }
    }

    fn handle_controls_action(&mut self, action: ControlsAction) {
        match action {
            ControlsAction::Start => self.dispatch_control(ControlAction::Start),
            ControlsAction::Stop => self.dispatch_control(ControlAction::Stop),
            ControlsAction::Cancel => self.dispatch_control(ControlAction::Cancel),
            ControlsAction::ChangeMode(mode) => self.dispatch_mode_change(mode),
            ControlsAction::ToggleAutoMining(active) => {
                self.auto_mining_pref = active;
                self.session.set_auto_mining_active(active);
            }
            ControlsAction::OpenSettings => self.settings_ui.open = true,
        }
    }

    pub(crate) fn render_wallet_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("wallet_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                let history = self.stores.wallet.history();
                WalletPanel::new(
                    self.stores.wallet.balance(),
                    &history,
                    self.stores.pools.total_unpaid(),
                )
                .render(ui);
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let action = CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                Dashboard::new(
                    &self.scene,
                    &self.stores.metrics,
                    self.session.snapshot(),
                    self.session.session_duration_ms(),
                    self.session_tally,
                    self.lifetime_totals,
                    self.recap_banner,
                )
                .render(ui)
            })
            .inner;

        if let Some(DashboardAction::DismissRecap) = action {
            self.recap_banner = None;
        }
    }
}
