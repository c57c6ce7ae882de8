use eframe::egui::{Button, ComboBox, RichText, Ui, vec2};
use strum::IntoEnumIterator;

use crate::bridge::LinkStatus;
use crate::models::MiningMode;
use crate::session::{SessionFlags, auto_controls_enabled, is_loading};
use crate::ui::styles::UiStyleExt;
use crate::ui::{UI_CONFIG, UI_TEXT};

pub enum ControlsAction {
    Start,
    Stop,
    Cancel,
    ChangeMode(MiningMode),
    ToggleAutoMining(bool),
    OpenSettings,
}

/// Side panel with the start/stop button, power mode selector and the
/// auto-mining toggle. Click handling stays with the caller.
pub struct ControlsPanel<'a> {
    flags: SessionFlags,
    any_mining: bool,
    link: LinkStatus,
    selected_mode: MiningMode,
    last_error: Option<&'a str>,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(
        flags: SessionFlags,
        any_mining: bool,
        link: LinkStatus,
        selected_mode: MiningMode,
        last_error: Option<&'a str>,
    ) -> Self {
        Self {
            flags,
            any_mining,
            link,
            selected_mode,
            last_error,
        }
    }

    pub fn render(&mut self, ui: &mut Ui) -> Option<ControlsAction> {
        let mut action = None;

        let connected = self.link == LinkStatus::Connected;
        let loading = is_loading(&self.flags, self.any_mining);
        let unlocked = !self.flags.controls_locked && !self.flags.changing_mode;

        ui.add_space(10.0);
        ui.heading(&UI_TEXT.ctrl_heading);
        ui.separator();

        if loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(if self.flags.mining_enabled {
                    &UI_TEXT.ctrl_starting
                } else {
                    &UI_TEXT.ctrl_stopping
                });
            });
            // A start that refuses to confirm can still be abandoned.
            if self.flags.mining_enabled
                && ui
                    .button(ui.button_text_secondary(&UI_TEXT.ctrl_cancel))
                    .clicked()
            {
                action = Some(ControlsAction::Cancel);
            }
        } else {
            let label = if self.flags.mining_enabled {
                &UI_TEXT.ctrl_stop
            } else {
                &UI_TEXT.ctrl_start
            };
            let button = Button::new(ui.button_text_primary(label)).min_size(vec2(130.0, 30.0));
            if ui.add_enabled(connected && unlocked, button).clicked() {
                action = Some(if self.flags.mining_enabled {
                    ControlsAction::Stop
                } else {
                    ControlsAction::Start
                });
            }
        }

        if self.flags.connection_lost {
            ui.add_space(4.0);
            ui.label(
                RichText::new(&UI_TEXT.ctrl_connection_lost)
                    .small()
                    .color(UI_CONFIG.colors.warning),
            );
            if ui
                .button(ui.button_text_secondary(&UI_TEXT.ctrl_cancel))
                .clicked()
            {
                action = Some(ControlsAction::Cancel);
            }
        }

        if self.flags.changing_mode {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label_subdued(&UI_TEXT.ctrl_changing_mode);
            });
        }

        ui.add_space(10.0);
        ui.label_subheader(&UI_TEXT.ctrl_mode_heading);
        ui.add_enabled_ui(connected && unlocked, |ui| {
            let mut mode = self.selected_mode;
            ComboBox::from_id_salt("power_mode")
                .selected_text(mode.to_string())
                .show_ui(ui, |ui| {
                    for m in MiningMode::iter() {
                        ui.selectable_value(&mut mode, m, m.to_string());
                    }
                });
            if mode != self.selected_mode {
                action = Some(ControlsAction::ChangeMode(mode));
            }
        });

        ui.add_space(10.0);
        let auto_enabled = connected && auto_controls_enabled(&self.flags, self.any_mining);
        ui.add_enabled_ui(auto_enabled, |ui| {
            let mut auto = self.flags.auto_mining_active;
            if ui.checkbox(&mut auto, &UI_TEXT.ctrl_auto_mining).changed() {
                action = Some(ControlsAction::ToggleAutoMining(auto));
            }
        });

        if let Some(err) = self.last_error {
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}: {}", UI_TEXT.label_error_prefix, err))
                    .small()
                    .color(UI_CONFIG.colors.danger),
            );
        }

        ui.add_space(10.0);
        ui.separator();
        if ui.button(&UI_TEXT.ctrl_settings).clicked() {
            action = Some(ControlsAction::OpenSettings);
        }

        action
    }
}
