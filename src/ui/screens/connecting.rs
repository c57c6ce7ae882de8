use {
    crate::{
        bridge::LinkStatus,
        stores::Stores,
        ui::{styles::link_status_color, UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Align, CentralPanel, Context, Grid, Layout, ProgressBar, RichText, ScrollArea, Ui,
    },
};

/// Full-window startup screen, shown until the daemon link is up and its
/// setup phases all report done.
pub(crate) fn render_connecting(ctx: &Context, stores: &Stores, link: LinkStatus) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(
                    RichText::new(&UI_TEXT.cs_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                let subtitle = match link {
                    LinkStatus::Disconnected => &UI_TEXT.cs_link_down,
                    _ => &UI_TEXT.cs_waiting,
                };
                ui.label(
                    RichText::new(subtitle)
                        .italics()
                        .color(link_status_color(link)),
                );
                ui.add_space(20.0);
                ui.add(
                    ProgressBar::new(stores.setup.overall_progress() as f32)
                        .show_percentage()
                        .animate(true),
                );
                ui.add_space(20.0);
            });

            render_setup_grid(ui, stores);
        });
}

fn render_setup_grid(ui: &mut Ui, stores: &Stores) {
    let phases = stores.setup.phases();
    if phases.is_empty() {
        return;
    }
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&UI_TEXT.cs_setup_heading)
                .strong()
                .color(UI_CONFIG.colors.label),
        );
    });
    ui.add_space(10.0);
    ScrollArea::vertical().show(ui, |ui| {
        Grid::new("setup_phase_grid")
            .striped(true)
            .spacing([20.0, 10.0])
            .min_col_width(250.0)
            .show(ui, |ui| {
                for phase in &phases {
                    let done = phase.progress >= 1.0;
                    let color = if done {
                        UI_CONFIG.colors.mining_active
                    } else {
                        UI_CONFIG.colors.label
                    };
                    ui.horizontal(|ui| {
                        ui.set_min_width(240.0);
                        ui.label(RichText::new(&phase.phase).strong().color(color));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if done {
                                ui.label(RichText::new("100%").color(color));
                            } else {
                                ui.spinner();
                                ui.label(
                                    RichText::new(format!("{:.0}%", phase.progress * 100.0))
                                        .color(color),
                                );
                            }
                        });
                    });
                    ui.end_row();
                }
            });
    });
}
