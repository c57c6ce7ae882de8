use std::collections::VecDeque;

use crate::session::SessionStore;
use crate::visuals::{AnimationState, VisualsDriver};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Inputs the reconciler consumes, queued in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Hardware truth from a miner status update.
    Status { mining: bool },
    /// The user-intent flag flipped.
    Intent { enabled: bool },
    ModeChangeStarted,
    ModeChangeSettled,
}

/// State machine turning status/intent edges into animation transitions.
///
/// Rules are evaluated only when a `Status` or `Intent` input actually
/// changes value; duplicates collapse. `ModeChange*` events adjust the
/// changing-mode guard silently so that a change started while mining does
/// not evaluate rule one and instantly clear its own guard.
#[derive(Default)]
pub struct MiningReconciler {
    queue: VecDeque<SessionEvent>,
    is_mining: bool,
    mining_enabled: bool,
    changing_mode: bool,
}

impl MiningReconciler {
    pub fn push(&mut self, event: SessionEvent) {
        self.queue.push_back(event);
    }

    pub fn drain(&mut self, session: &SessionStore, driver: &mut VisualsDriver) {
        while let Some(event) = self.queue.pop_front() {
            let changed = match event {
                SessionEvent::Status { mining } => {
                    let changed = self.is_mining != mining;
                    self.is_mining = mining;
                    changed
                }
                SessionEvent::Intent { enabled } => {
                    let changed = self.mining_enabled != enabled;
                    self.mining_enabled = enabled;
                    changed
                }
                SessionEvent::ModeChangeStarted => {
                    self.changing_mode = true;
                    false
                }
                SessionEvent::ModeChangeSettled => {
                    self.changing_mode = false;
                    false
                }
            };
            if changed {
                self.evaluate(session, driver);
            }
        }
    }

    fn evaluate(&mut self, session: &SessionStore, driver: &mut VisualsDriver) {
        if self.is_mining && self.mining_enabled {
            session.set_connection_lost(false);
            if self.changing_mode {
                self.changing_mode = false;
                session.set_changing_mode(false);
            }
            if !session.mining_in_progress() {
                session.set_mining_in_progress(true);
                session.mark_session_started();
            }
            self.drive(driver, AnimationState::Start);
        } else if !self.is_mining && !self.mining_enabled && session.mining_in_progress() {
            session.set_connection_lost(false);
            session.set_mining_in_progress(false);
            session.mark_session_stopped();
            self.drive(driver, AnimationState::Stop);
        } else if !self.is_mining && session.mining_in_progress() && !self.changing_mode {
            // Intent still on but the miner went quiet: treat as lost,
            // keep the session alive so recovery resumes instead of
            // restarting.
            session.set_connection_lost(true);
            self.drive(driver, AnimationState::Pause);
        }
    }

    fn drive(&self, driver: &mut VisualsDriver, state: AnimationState) {
        #[cfg(debug_assertions)]
        if DF.log_reconciler {
            log::info!("reconciler drives {}", state);
        }
        if let Err(e) = driver.set(state) {
            log::warn!("animation backend refused {}: {}", state, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::{AnimationController, VisualError};
    use std::sync::{Arc, Mutex};

    struct Recording {
        seen: Mutex<Vec<AnimationState>>,
    }

    impl Recording {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }

        fn states(&self) -> Vec<AnimationState> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl AnimationController for Recording {
        fn set_state(&self, state: AnimationState) -> Result<(), VisualError> {
            self.seen.lock().unwrap().push(state);
            Ok(())
        }
    }

    fn rig() -> (MiningReconciler, SessionStore, VisualsDriver, Arc<Recording>) {
        let rec = Recording::new();
        (
            MiningReconciler::default(),
            SessionStore::default(),
            VisualsDriver::new(rec.clone()),
            rec,
        )
    }

    fn feed(
        reconciler: &mut MiningReconciler,
        session: &SessionStore,
        driver: &mut VisualsDriver,
        events: &[SessionEvent],
    ) {
        for e in events {
            reconciler.push(*e);
        }
        reconciler.drain(session, driver);
    }

    #[test]
    fn confirmed_start_drives_start_once_and_sets_flags() {
        let (mut r, session, mut driver, rec) = rig();
        session.set_connection_lost(true);

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
            ],
        );

        assert_eq!(rec.states(), vec![AnimationState::Start]);
        assert!(session.mining_in_progress());
        assert!(!session.connection_lost());
    }

    #[test]
    fn duplicate_status_produces_no_extra_driver_call() {
        let (mut r, session, mut driver, rec) = rig();

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
                SessionEvent::Status { mining: true },
                SessionEvent::Intent { enabled: true },
            ],
        );

        assert_eq!(rec.states(), vec![AnimationState::Start]);
    }

    #[test]
    fn confirmed_stop_drives_stop_once_and_clears_progress() {
        let (mut r, session, mut driver, rec) = rig();

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
                SessionEvent::Intent { enabled: false },
                SessionEvent::Status { mining: false },
            ],
        );

        let stops = rec
            .states()
            .iter()
            .filter(|&&s| s == AnimationState::Stop)
            .count();
        assert_eq!(stops, 1);
        assert!(!session.mining_in_progress());
        assert!(!session.connection_lost());
    }

    #[test]
    fn stalled_miner_pauses_and_marks_connection_lost() {
        let (mut r, session, mut driver, rec) = rig();

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
                SessionEvent::Status { mining: false },
            ],
        );

        assert_eq!(
            rec.states(),
            vec![AnimationState::Start, AnimationState::Pause]
        );
        assert!(session.connection_lost());
        assert!(session.mining_in_progress());
    }

    #[test]
    fn recovery_after_pause_is_observed_as_resume() {
        let (mut r, session, mut driver, rec) = rig();

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
                SessionEvent::Status { mining: false },
                SessionEvent::Status { mining: true },
            ],
        );

        assert_eq!(
            rec.states(),
            vec![
                AnimationState::Start,
                AnimationState::Pause,
                AnimationState::Resume
            ]
        );
        assert!(!session.connection_lost());
    }

    #[test]
    fn pause_is_suppressed_for_every_ordering_inside_a_mode_change() {
        let orderings: Vec<Vec<SessionEvent>> = vec![
            vec![
                SessionEvent::ModeChangeStarted,
                SessionEvent::Status { mining: false },
                SessionEvent::ModeChangeSettled,
            ],
            vec![
                SessionEvent::ModeChangeStarted,
                SessionEvent::Intent { enabled: false },
                SessionEvent::Status { mining: false },
                SessionEvent::ModeChangeSettled,
            ],
            vec![
                SessionEvent::Intent { enabled: false },
                SessionEvent::ModeChangeStarted,
                SessionEvent::Status { mining: false },
                SessionEvent::ModeChangeSettled,
            ],
        ];

        for events in orderings {
            let (mut r, session, mut driver, rec) = rig();
            feed(
                &mut r,
                &session,
                &mut driver,
                &[
                    SessionEvent::Intent { enabled: true },
                    SessionEvent::Status { mining: true },
                ],
            );
            feed(&mut r, &session, &mut driver, &events);

            assert!(
                !rec.states().contains(&AnimationState::Pause),
                "pause fired for {:?}",
                rec.states()
            );
            assert!(!session.connection_lost());
        }
    }

    #[test]
    fn mode_change_events_alone_drive_nothing() {
        let (mut r, session, mut driver, rec) = rig();

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::ModeChangeStarted,
                SessionEvent::ModeChangeSettled,
            ],
        );

        assert!(rec.states().is_empty());
    }

    #[test]
    fn pause_detection_returns_after_the_change_settles() {
        let (mut r, session, mut driver, rec) = rig();

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
                SessionEvent::ModeChangeStarted,
                SessionEvent::Status { mining: false },
                SessionEvent::ModeChangeSettled,
                SessionEvent::Status { mining: true },
                SessionEvent::Status { mining: false },
            ],
        );

        // The first drop is shielded by the change, the second is not.
        let pauses = rec
            .states()
            .iter()
            .filter(|&&s| s == AnimationState::Pause)
            .count();
        assert_eq!(pauses, 1);
    }

    #[test]
    fn running_confirmation_self_heals_a_stuck_changing_flag() {
        let (mut r, session, mut driver, _rec) = rig();
        session.set_changing_mode(true);

        feed(
            &mut r,
            &session,
            &mut driver,
            &[
                SessionEvent::ModeChangeStarted,
                SessionEvent::Intent { enabled: true },
                SessionEvent::Status { mining: true },
            ],
        );

        assert!(!session.changing_mode());
    }
}
