use crate::bridge::BackendEvent;
use crate::models::{
    ControlAction, ControlOutcome, MiningMode, ModeChangeOutcome, TransactionInfo,
};

/// Everything the background side sends to the UI thread. Drained once per
/// frame, in arrival order.
#[derive(Debug)]
pub enum UiMessage {
    /// Decoded daemon push.
    Event(BackendEvent),
    /// The user-intent flag flipped, optimistically or as a rollback.
    Intent { enabled: bool },
    /// A mode change began; state checks are suspended until it settles.
    ModeChangeStarted,
    /// A mode change ran to completion or was refused.
    ModeChange {
        mode: MiningMode,
        outcome: ModeChangeOutcome,
    },
    /// A start/stop/cancel request finished.
    Control {
        action: ControlAction,
        outcome: ControlOutcome,
    },
    /// A block at `height` was checked against wallet history.
    BlockSettled {
        height: u64,
        coinbase: Option<TransactionInfo>,
    },
    /// Lifetime win totals reloaded from the earnings archive.
    LifetimeTotals { wins: i64, earned: i64 },
}
