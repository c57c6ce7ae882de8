use crate::visuals::AnimationState;

#[derive(Debug, thiserror::Error)]
pub enum VisualError {
    #[error("animation backend unavailable")]
    Unavailable,
}

/// Sink for animation state changes. The production implementation feeds the
/// egui scene; tests inject recording or failing fakes. Constructed once at
/// startup and handed around, never reached through a global.
pub trait AnimationController: Send + Sync {
    fn set_state(&self, state: AnimationState) -> Result<(), VisualError>;
}
