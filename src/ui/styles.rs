use {
    crate::{
        bridge::LinkStatus,
        models::TxDirection,
        ui::UI_CONFIG,
        visuals::AnimationState,
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TxDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Inbound => UI_CONFIG.colors.mining_active,
            Self::Outbound => UI_CONFIG.colors.warning,
        }
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}

pub fn link_status_color(status: LinkStatus) -> Color32 {
    match status {
        LinkStatus::Connected => UI_CONFIG.colors.mining_active,
        LinkStatus::Connecting => UI_CONFIG.colors.warning,
        LinkStatus::Disconnected => UI_CONFIG.colors.danger,
    }
}

pub fn scene_color(state: AnimationState) -> Color32 {
    match state {
        AnimationState::Free | AnimationState::Complete => Color32::GRAY,
        AnimationState::Start
        | AnimationState::Resume
        | AnimationState::Restart
        | AnimationState::RestartAnimation => UI_CONFIG.colors.mining_active,
        AnimationState::Pause => UI_CONFIG.colors.warning,
        AnimationState::Stop => Color32::DARK_GRAY,
        AnimationState::Success | AnimationState::Success2 | AnimationState::Success3 => {
            UI_CONFIG.colors.success
        }
        AnimationState::Fail => UI_CONFIG.colors.danger,
        AnimationState::ResultAnimation => UI_CONFIG.colors.heading,
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
    fn button_text_secondary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::GREEN).small()
    }

    fn button_text_secondary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE).small()
    }
}
