use strum_macros::Display;

/// Discrete states the visual scene can be driven into. These are the full
/// vocabulary the daemon-facing session logic speaks; the scene decides how
/// each one looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AnimationState {
    Start,
    Free,
    Pause,
    Resume,
    Stop,
    Complete,
    Success,
    Success2,
    Success3,
    Fail,
    ResultAnimation,
    RestartAnimation,
    Restart,
}
