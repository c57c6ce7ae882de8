use std::sync::{Arc, RwLock};

use crate::models::SetupProgress;

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Default)]
struct SetupInner {
    phases: Vec<SetupProgress>,
    finished: bool,
}

/// Daemon startup progress, one row per setup phase.
#[derive(Debug, Clone, Default)]
pub struct SetupStore {
    inner: Arc<RwLock<SetupInner>>,
}

impl SetupStore {
    pub fn apply(&self, progress: SetupProgress) {
        #[cfg(debug_assertions)]
        if DF.log_setup_progress {
            log::info!("setup: {} at {:.0}%", progress.phase, progress.progress * 100.0);
        }
        let mut inner = self.inner.write().unwrap();
        match inner.phases.iter_mut().find(|p| p.phase == progress.phase) {
            Some(existing) => *existing = progress,
            None => inner.phases.push(progress),
        }
    }

    pub fn mark_finished(&self) {
        self.inner.write().unwrap().finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.inner.read().unwrap().finished
    }

    pub fn phases(&self) -> Vec<SetupProgress> {
        self.inner.read().unwrap().phases.clone()
    }

    /// Mean progress across reported phases, 0.0 before any report.
    pub fn overall_progress(&self) -> f64 {
        let inner = self.inner.read().unwrap();
        if inner.finished {
            return 1.0;
        }
        if inner.phases.is_empty() {
            return 0.0;
        }
        inner.phases.iter().map(|p| p.progress).sum::<f64>() / inner.phases.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_updates_in_place_per_phase() {
        let store = SetupStore::default();
        store.apply(SetupProgress {
            phase: "node".to_string(),
            progress: 0.2,
        });
        store.apply(SetupProgress {
            phase: "node".to_string(),
            progress: 0.8,
        });
        store.apply(SetupProgress {
            phase: "wallet".to_string(),
            progress: 0.4,
        });

        assert_eq!(store.phases().len(), 2);
        assert!((store.overall_progress() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn finished_pins_progress_to_one() {
        let store = SetupStore::default();
        store.mark_finished();
        assert_eq!(store.overall_progress(), 1.0);
        assert!(store.is_finished());
    }
}
