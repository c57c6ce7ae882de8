// src/app/state.rs

/// Waiting for the daemon link and its initial setup to finish.
#[derive(Clone, Default)]
pub(crate) struct ConnectingState;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Connecting(ConnectingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Connecting(ConnectingState)
    }
}
