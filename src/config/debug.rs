//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit every raw frame the daemon socket sends or receives.
    pub log_bridge_frames: bool,

    /// Log each invoke round-trip (method, id, outcome).
    pub log_invokes: bool,

    /// Log parsed status events as they are applied to the stores.
    pub log_events: bool,

    /// Log link status changes (connecting / connected / dropped).
    pub log_link_status: bool,

    /// Log every reconciler rule that fires, with the input tuple.
    pub log_reconciler: bool,

    /// Log control actions (start/stop/cancel/mode) and their outcomes.
    pub log_controls: bool,

    /// Log restart scheduling, replacement and cancellation.
    pub log_scheduler: bool,

    /// Block win / fail / recap handling.
    pub log_blocks: bool,

    pub log_earnings_repo: bool,

    pub log_setup_progress: bool,

    /// Every state handed to the animation controller.
    pub log_visuals: bool,
}

pub const DF: LogFlags = LogFlags {
    log_link_status: true,
    log_controls: true,

    log_bridge_frames: false,
    log_invokes: false,
    log_events: false,
    log_reconciler: false,
    log_scheduler: false,
    log_blocks: false,
    log_earnings_repo: false,
    log_setup_progress: false,
    log_visuals: false,
};
