use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::utils::TimeUtils;
use crate::visuals::{AnimationController, AnimationState, VisualError};

const HISTORY_CAP: usize = 8;

/// What the dashboard actually paints. Updated through [`SceneController`],
/// read every frame by the render code.
#[derive(Debug, Clone)]
pub struct SceneModel {
    pub current: AnimationState,
    pub entered_at_ms: i64,
    pub history: VecDeque<AnimationState>,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self {
            current: AnimationState::Free,
            entered_at_ms: TimeUtils::local_now_as_timestamp_ms(),
            history: VecDeque::with_capacity(HISTORY_CAP),
        }
    }
}

impl SceneModel {
    fn apply(&mut self, state: AnimationState) {
        if self.history.len() == HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(self.current);
        self.current = state;
        self.entered_at_ms = TimeUtils::local_now_as_timestamp_ms();
    }
}

/// Shared handle over the scene model. One clone lives in the controller,
/// one in the app for rendering.
#[derive(Clone, Default)]
pub struct SceneHandle {
    inner: Arc<Mutex<SceneModel>>,
}

impl SceneHandle {
    pub fn snapshot(&self) -> SceneModel {
        self.inner.lock().unwrap().clone()
    }

    pub fn current(&self) -> AnimationState {
        self.inner.lock().unwrap().current
    }

    pub fn ms_in_state(&self) -> i64 {
        let model = self.inner.lock().unwrap();
        TimeUtils::local_now_as_timestamp_ms() - model.entered_at_ms
    }

    fn apply(&self, state: AnimationState) {
        self.inner.lock().unwrap().apply(state);
    }
}

/// The in-process animation backend: state changes land in the scene model
/// and the next frame paints them. Never fails on its own, the Result is
/// part of the controller contract.
pub struct SceneController {
    handle: SceneHandle,
}

impl SceneController {
    pub fn new(handle: SceneHandle) -> Self {
        Self { handle }
    }
}

impl AnimationController for SceneController {
    fn set_state(&self, state: AnimationState) -> Result<(), VisualError> {
        #[cfg(debug_assertions)]
        if crate::config::DF.log_visuals {
            log::info!("scene -> {}", state);
        }
        self.handle.apply(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_updates_shared_model() {
        let handle = SceneHandle::default();
        let controller = SceneController::new(handle.clone());

        controller.set_state(AnimationState::Start).unwrap();
        controller.set_state(AnimationState::Pause).unwrap();

        let model = handle.snapshot();
        assert_eq!(model.current, AnimationState::Pause);
        assert_eq!(model.history.back(), Some(&AnimationState::Start));
    }

    #[test]
    fn history_is_capped() {
        let handle = SceneHandle::default();
        let controller = SceneController::new(handle.clone());

        for _ in 0..20 {
            controller.set_state(AnimationState::Free).unwrap();
        }

        assert_eq!(handle.snapshot().history.len(), HISTORY_CAP);
    }
}
