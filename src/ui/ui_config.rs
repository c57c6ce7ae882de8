use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub mining_active: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub success: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(0, 200, 180),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(16, 22, 26),
        side_panel: Color32::from_rgb(25, 25, 25),
        mining_active: Color32::from_rgb(0, 200, 180),
        warning: Color32::from_rgb(240, 180, 40),
        danger: Color32::from_rgb(220, 70, 70),
        success: Color32::from_rgb(250, 210, 90),
    },
};

impl UiConfig {
    /// Frame for Left/Right panels (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the scene + chart area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}
