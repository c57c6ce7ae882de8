use eframe::egui::{RichText, Sense, Stroke, Ui, vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::session::{RecapTally, SessionFlags, is_waiting_for_hash_rate};
use crate::stores::MetricsStore;
use crate::ui::styles::{UiStyleExt, apply_opacity, scene_color};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{TimeUtils, format_hashrate, format_micro};
use crate::visuals::{AnimationState, SceneHandle};

pub enum DashboardAction {
    DismissRecap,
}

/// Central panel: the mining scene, headline numbers and the hash-rate chart.
pub struct Dashboard<'a> {
    scene: &'a SceneHandle,
    metrics: &'a MetricsStore,
    flags: SessionFlags,
    session_ms: Option<i64>,
    session_tally: RecapTally,
    lifetime: Option<(i64, i64)>,
    recap_banner: Option<RecapTally>,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        scene: &'a SceneHandle,
        metrics: &'a MetricsStore,
        flags: SessionFlags,
        session_ms: Option<i64>,
        session_tally: RecapTally,
        lifetime: Option<(i64, i64)>,
        recap_banner: Option<RecapTally>,
    ) -> Self {
        Self {
            scene,
            metrics,
            flags,
            session_ms,
            session_tally,
            lifetime,
            recap_banner,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<DashboardAction> {
        let mut action = None;

        self.paint_scene(ui);
        self.headline(ui);

        if let Some(recap) = self.recap_banner {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{}: {} {}, {}",
                        UI_TEXT.dash_recap_prefix,
                        recap.wins,
                        UI_TEXT.label_blocks,
                        format_micro(recap.total_earned),
                    ))
                    .color(UI_CONFIG.colors.success),
                );
                if ui.small_button(&UI_TEXT.label_close).clicked() {
                    action = Some(DashboardAction::DismissRecap);
                }
            });
        }

        ui.add_space(8.0);
        self.stats_row(ui);
        ui.add_space(8.0);
        self.hash_chart(ui);

        action
    }

    fn paint_scene(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 150.0), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let state = self.scene.current();
        let color = scene_color(state);
        let center = rect.center();
        let t = ui.input(|i| i.time) as f32;

        let active = matches!(
            state,
            AnimationState::Start
                | AnimationState::Resume
                | AnimationState::Restart
                | AnimationState::RestartAnimation
        );
        let pulse = if active {
            1.0 + 0.15 * ((t * 2.4).sin() * 0.5 + 0.5)
        } else {
            1.0
        };
        let radius = 44.0 * pulse;

        let painter = ui.painter_at(rect);
        painter.circle_filled(center, radius, apply_opacity(color, 0.20));
        painter.circle_stroke(center, radius, Stroke::new(2.0, color));
        painter.circle_filled(center, radius * 0.45, apply_opacity(color, 0.55));

        // Win celebrations get one ring per payout tier, rippling outward
        // for as long as the state holds.
        let rings = match state {
            AnimationState::Success => 1,
            AnimationState::Success2 => 2,
            AnimationState::Success3 => 3,
            _ => 0,
        };
        if rings > 0 {
            let spread = (self.scene.ms_in_state() as f32 / 1000.0).min(1.0);
            for i in 0..rings {
                let r = radius + (10.0 + i as f32 * 9.0) * (0.4 + 0.6 * spread);
                painter.circle_stroke(center, r, Stroke::new(1.0, apply_opacity(color, 0.6)));
            }
        }
    }

    fn headline(&self, ui: &mut Ui) {
        let mining = self.metrics.any_mining();
        let rate = self.metrics.total_hash_rate();

        ui.vertical_centered(|ui| {
            if !mining && !self.flags.mining_enabled {
                ui.label_subdued(&UI_TEXT.dash_idle);
            } else if is_waiting_for_hash_rate(mining, rate) {
                ui.label(
                    RichText::new(&UI_TEXT.dash_waiting_hash_rate)
                        .color(UI_CONFIG.colors.warning),
                );
            } else {
                ui.heading(
                    RichText::new(format_hashrate(rate)).color(UI_CONFIG.colors.mining_active),
                );
            }
        });
    }

    fn stats_row(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if let Some(ms) = self.session_ms {
                ui.metric(
                    &UI_TEXT.dash_session,
                    &TimeUtils::format_duration(ms),
                    UI_CONFIG.colors.label,
                );
            }
            ui.metric(
                &UI_TEXT.dash_est_earnings,
                &format_micro(self.metrics.total_estimated_earnings()),
                UI_CONFIG.colors.label,
            );
            if self.session_tally.wins > 0 {
                ui.metric(
                    &UI_TEXT.label_blocks,
                    &format!(
                        "{} ({})",
                        self.session_tally.wins,
                        format_micro(self.session_tally.total_earned)
                    ),
                    UI_CONFIG.colors.success,
                );
            }
            if let Some((wins, earned)) = self.lifetime {
                ui.metric(
                    &UI_TEXT.dash_lifetime_wins,
                    &format!("{} ({})", wins, format_micro(earned.max(0) as u64)),
                    UI_CONFIG.colors.label,
                );
            }
        });
    }

    fn hash_chart(&self, ui: &mut Ui) {
        let samples = self.metrics.samples();
        if samples.len() < 2 {
            return;
        }

        let last_ms = samples[samples.len() - 1].at_ms;
        let age = |at_ms: i64| (at_ms - last_ms) as f64 / 1000.0;
        let cpu: Vec<[f64; 2]> = samples.iter().map(|s| [age(s.at_ms), s.cpu]).collect();
        let gpu: Vec<[f64; 2]> = samples.iter().map(|s| [age(s.at_ms), s.gpu]).collect();

        ui.label_subheader(&UI_TEXT.dash_hash_rate);
        Plot::new("hash_history")
            .height(140.0)
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_axes([false, true])
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("CPU", PlotPoints::new(cpu)).color(UI_CONFIG.colors.mining_active),
                );
                plot_ui.line(
                    Line::new("GPU", PlotPoints::new(gpu)).color(UI_CONFIG.colors.warning),
                );
            });
    }
}
