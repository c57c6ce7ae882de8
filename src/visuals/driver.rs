use std::sync::Arc;

use crate::visuals::{
    AnimationController, AnimationState, SceneController, SceneHandle, VisualError,
};

/// Thin wrapper every caller goes through instead of talking to the
/// controller directly. Its one piece of logic: a `Start` requested while the
/// last delivered state was `Pause` is turned into `Resume`, so an
/// interrupted session continues instead of replaying the intro. Everything
/// else is forwarded verbatim, last write wins.
pub struct VisualsDriver {
    controller: Arc<dyn AnimationController>,
    last_delivered: Option<AnimationState>,
}

/// Wired to a throwaway scene; the shell swaps in the live one at startup.
impl Default for VisualsDriver {
    fn default() -> Self {
        Self::new(Arc::new(SceneController::new(SceneHandle::default())))
    }
}

impl VisualsDriver {
    pub fn new(controller: Arc<dyn AnimationController>) -> Self {
        Self {
            controller,
            last_delivered: None,
        }
    }

    pub fn last_delivered(&self) -> Option<AnimationState> {
        self.last_delivered
    }

    pub fn set(&mut self, requested: AnimationState) -> Result<(), VisualError> {
        let effective = if requested == AnimationState::Start
            && self.last_delivered == Some(AnimationState::Pause)
        {
            AnimationState::Resume
        } else {
            requested
        };

        #[cfg(debug_assertions)]
        if crate::config::DF.log_visuals && effective != requested {
            log::info!("visuals: {} substituted for {}", effective, requested);
        }

        self.last_delivered = Some(effective);
        self.controller.set_state(effective)
    }
}
