//! Typed results for the mining control actions. Callers match on these
//! instead of inferring success from a flag that may have been rolled back.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Stop,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
    Started,
    Stopped,
    /// The intent flag already matched the request; nothing was sent.
    AlreadyInState,
    /// The daemon refused. The optimistic flag has been rolled back.
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChangeOutcome {
    Applied {
        /// True when mining was stopped for the switch and a delayed
        /// restart should be scheduled.
        restart_wanted: bool,
    },
    Rejected(String),
}
