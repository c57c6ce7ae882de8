use std::time::Duration;

// Top Level Constants
pub const COIN_SYMBOL: &str = "XTM";
pub const MICRO_PER_COIN: u64 = 1_000_000;

/// Delay between a mode change settling and the scheduled mining restart.
pub const MODE_RESTART_DELAY: Duration = Duration::from_millis(2000);

/// How long mining controls stay locked while a block win plays out.
pub const WIN_CELEBRATION: Duration = Duration::from_millis(2000);
/// Shorter settle window for a block that went to someone else.
pub const FAIL_SETTLE: Duration = Duration::from_millis(1000);

/// Hash rate samples retained for the dashboard chart (one per status push).
pub const HASH_SAMPLE_CAP: usize = 360;

pub mod tiers {
    //! Win celebration tiers, thresholds in whole coins.

    pub const SINGLE_MAX: u64 = 100;
    pub const DOUBLE_MAX: u64 = 1000;
}
