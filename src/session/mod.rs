mod blocks;
mod controls;
mod reconciler;
mod scheduler;
mod state;

pub use blocks::{BlockWatcher, RecapTally, success_tier};
pub use controls::MiningControls;
pub use reconciler::{MiningReconciler, SessionEvent};
pub use scheduler::RestartScheduler;
pub use state::{
    SessionFlags, SessionStore, auto_controls_enabled, is_loading, is_waiting_for_hash_rate,
};
