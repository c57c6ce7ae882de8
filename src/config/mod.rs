//! Configuration module for the hashdeck application.

// Can all be private now because we have a public re-export.
mod debug;
mod endpoint;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::{
    COIN_SYMBOL, FAIL_SETTLE, HASH_SAMPLE_CAP, MICRO_PER_COIN, MODE_RESTART_DELAY, WIN_CELEBRATION,
};
pub use debug::DF;
pub use endpoint::{DAEMON, daemon_url};
pub use persistence::{PERSISTENCE, earnings_db_path};
