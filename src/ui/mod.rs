mod controls_panel;
mod dashboard;
mod screens;
mod settings;
mod status_strip;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;
mod wallet_panel;

pub(crate) use screens::render_connecting;

pub(crate) use settings::{SettingsSection, SettingsUi};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};

pub(crate) use utils::setup_custom_visuals;
