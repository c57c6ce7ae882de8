use std::sync::{Arc, RwLock};

use crate::utils::TimeUtils;

/// The intent half of mining state. Hardware truth lives in the metrics
/// store; these flags say what the user asked for and where the visible
/// transition currently stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFlags {
    pub mining_enabled: bool,
    pub mining_in_progress: bool,
    pub changing_mode: bool,
    pub connection_lost: bool,
    pub controls_locked: bool,
    pub auto_mining_active: bool,
    pub session_started_ms: Option<i64>,
    pub session_stopped_ms: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionFlags>>,
}

impl SessionStore {
    pub fn snapshot(&self) -> SessionFlags {
        *self.inner.read().unwrap()
    }

    pub fn mining_enabled(&self) -> bool {
        self.inner.read().unwrap().mining_enabled
    }

    pub fn set_mining_enabled(&self, enabled: bool) {
        self.inner.write().unwrap().mining_enabled = enabled;
    }

    pub fn mining_in_progress(&self) -> bool {
        self.inner.read().unwrap().mining_in_progress
    }

    pub fn set_mining_in_progress(&self, in_progress: bool) {
        self.inner.write().unwrap().mining_in_progress = in_progress;
    }

    pub fn changing_mode(&self) -> bool {
        self.inner.read().unwrap().changing_mode
    }

    pub fn set_changing_mode(&self, changing: bool) {
        self.inner.write().unwrap().changing_mode = changing;
    }

    pub fn connection_lost(&self) -> bool {
        self.inner.read().unwrap().connection_lost
    }

    pub fn set_connection_lost(&self, lost: bool) {
        self.inner.write().unwrap().connection_lost = lost;
    }

    pub fn controls_locked(&self) -> bool {
        self.inner.read().unwrap().controls_locked
    }

    pub fn set_controls_locked(&self, locked: bool) {
        self.inner.write().unwrap().controls_locked = locked;
    }

    pub fn auto_mining_active(&self) -> bool {
        self.inner.read().unwrap().auto_mining_active
    }

    pub fn set_auto_mining_active(&self, active: bool) {
        self.inner.write().unwrap().auto_mining_active = active;
    }

    pub fn mark_session_started(&self) {
        let mut flags = self.inner.write().unwrap();
        flags.session_started_ms = Some(TimeUtils::local_now_as_timestamp_ms());
        flags.session_stopped_ms = None;
    }

    pub fn mark_session_stopped(&self) {
        let mut flags = self.inner.write().unwrap();
        if flags.session_started_ms.is_some() {
            flags.session_stopped_ms = Some(TimeUtils::local_now_as_timestamp_ms());
        }
    }

    /// Milliseconds mined in the current or most recent session.
    pub fn session_duration_ms(&self) -> Option<i64> {
        let flags = self.inner.read().unwrap();
        let started = flags.session_started_ms?;
        let end = flags
            .session_stopped_ms
            .unwrap_or_else(TimeUtils::local_now_as_timestamp_ms);
        Some((end - started).max(0))
    }

    /// Manual start/stop is gated off while a celebration window or a mode
    /// change holds the controls.
    pub fn controls_enabled(&self) -> bool {
        let flags = self.inner.read().unwrap();
        !flags.controls_locked && !flags.changing_mode
    }
}

/// Intent is ahead of hardware truth, in either direction.
pub fn is_loading(flags: &SessionFlags, any_mining: bool) -> bool {
    flags.mining_enabled != any_mining
}

/// Miner confirmed up but no hash rate reported yet.
pub fn is_waiting_for_hash_rate(any_mining: bool, total_hash_rate: f64) -> bool {
    any_mining && total_hash_rate == 0.0
}

/// The auto-mining toggle stays off-limits while a transition is in flight.
pub fn auto_controls_enabled(flags: &SessionFlags, any_mining: bool) -> bool {
    !flags.changing_mode && !is_loading(flags, any_mining)
}
