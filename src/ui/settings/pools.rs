use eframe::egui::{Grid, RichText, Ui};

use crate::app::App;
use crate::models::PoolStatus;
use crate::ui::settings::poll_value;
use crate::ui::styles::{UiStyleExt, colored_subsection_heading};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::format_micro;

impl App {
    pub(super) fn render_settings_pools(&mut self, ui: &mut Ui) {
        if let Some(port) =
            poll_value(&mut self.settings_ui.stats_port, &mut self.settings_ui.error)
        {
            self.settings_ui.stats_port_value = Some(port);
        }

        ui.label(colored_subsection_heading(&UI_TEXT.st_pools_heading));
        ui.add_space(5.0);

        pool_stats_grid(ui, &UI_TEXT.st_pool_cpu, self.stores.pools.cpu_pool().as_ref());
        ui.add_space(8.0);
        pool_stats_grid(ui, &UI_TEXT.st_pool_gpu, self.stores.pools.gpu_pool().as_ref());

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(&UI_TEXT.st_pool_port);
            if let Some(port) = self.settings_ui.stats_port_value {
                ui.label(
                    RichText::new(port.to_string())
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            }
            if self.settings_ui.stats_port.is_some() {
                ui.spinner();
            } else if ui.small_button(&UI_TEXT.st_pool_port_fetch).clicked() {
                if let Some(api) = self.daemon_api() {
                    self.settings_ui.stats_port = self.settings_invoke(async move {
                        api.get_used_p2pool_stats_server_port().await
                    });
                }
            }
        });
    }
}

fn pool_stats_grid(ui: &mut Ui, name: &str, status: Option<&PoolStatus>) {
    ui.label(RichText::new(name).strong());
    let Some(status) = status else {
        ui.label_subdued(&UI_TEXT.st_pool_no_stats);
        return;
    };
    Grid::new(name).spacing([20.0, 4.0]).show(ui, |ui| {
        ui.label_subdued(&UI_TEXT.st_pool_accepted);
        ui.label(status.accepted_shares.to_string());
        ui.end_row();
        ui.label_subdued(&UI_TEXT.st_pool_unpaid);
        ui.label(format_micro(status.unpaid));
        ui.end_row();
        ui.label_subdued(&UI_TEXT.st_pool_min_payout);
        ui.label(format_micro(status.min_payout));
        ui.end_row();
    });
}
