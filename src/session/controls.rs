use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::bridge::{MinerControlApi, UiMessage};
use crate::models::{ControlOutcome, ModeChangeOutcome, ModeChangeRequest};
use crate::session::SessionStore;

#[cfg(debug_assertions)]
use crate::config::DF;

/// User-facing mining commands. Each operation flips the intent flag
/// optimistically, invokes the daemon, and rolls the flag back on
/// rejection. Outcomes are returned to the caller, never retried.
pub struct MiningControls {
    api: Arc<dyn MinerControlApi>,
    session: SessionStore,
    events: Sender<UiMessage>,
}

impl MiningControls {
    pub fn new(api: Arc<dyn MinerControlApi>, session: SessionStore, events: Sender<UiMessage>) -> Self {
        Self { api, session, events }
    }

    fn set_intent(&self, enabled: bool) {
        self.session.set_mining_enabled(enabled);
        let _ = self.events.send(UiMessage::Intent { enabled });
    }

    pub async fn start(&self) -> ControlOutcome {
        if self.session.mining_enabled() {
            return ControlOutcome::AlreadyInState;
        }
        self.set_intent(true);
        match self.api.start_mining().await {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if DF.log_controls {
                    log::info!("start_mining accepted");
                }
                ControlOutcome::Started
            }
            Err(e) => {
                self.set_intent(false);
                log::warn!("start_mining rejected: {}", e);
                ControlOutcome::Rejected(e.to_string())
            }
        }
    }

    pub async fn stop(&self) -> ControlOutcome {
        if !self.session.mining_enabled() {
            return ControlOutcome::AlreadyInState;
        }
        self.set_intent(false);
        match self.api.stop_mining().await {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if DF.log_controls {
                    log::info!("stop_mining accepted");
                }
                ControlOutcome::Stopped
            }
            Err(e) => {
                self.set_intent(true);
                log::warn!("stop_mining rejected: {}", e);
                ControlOutcome::Rejected(e.to_string())
            }
        }
    }

    /// Force intent off and tell the daemon to stop, assuming success. Used
    /// to clear a stuck connection-lost state; the caller resets the visual.
    pub async fn cancel(&self) -> ControlOutcome {
        self.set_intent(false);
        if let Err(e) = self.api.stop_mining().await {
            log::warn!("cancel: stop_mining failed: {}", e);
        }
        ControlOutcome::Stopped
    }

    /// Stop if a session is in progress, apply the new mode, and report
    /// whether the caller should schedule a restart. The changing-mode flag
    /// is cleared on every exit path.
    pub async fn change_mode(&self, req: ModeChangeRequest) -> ModeChangeOutcome {
        if self.session.auto_mining_active() {
            return match self.api.set_mode(&req).await {
                Ok(()) => ModeChangeOutcome::Applied {
                    restart_wanted: false,
                },
                Err(e) => {
                    log::warn!("set_mode rejected: {}", e);
                    ModeChangeOutcome::Rejected(e.to_string())
                }
            };
        }

        self.session.set_changing_mode(true);
        let _ = self.events.send(UiMessage::ModeChangeStarted);

        let was_mining = self.session.mining_in_progress();
        if was_mining {
            let prev = self.session.mining_enabled();
            self.set_intent(false);
            if let Err(e) = self.api.stop_mining().await {
                self.set_intent(prev);
                self.session.set_changing_mode(false);
                log::warn!("change_mode: stop_mining rejected: {}", e);
                return ModeChangeOutcome::Rejected(e.to_string());
            }
        }

        let outcome = match self.api.set_mode(&req).await {
            Ok(()) => {
                #[cfg(debug_assertions)]
                if DF.log_controls {
                    log::info!("set_mode applied, restart_wanted={}", was_mining);
                }
                ModeChangeOutcome::Applied {
                    restart_wanted: was_mining,
                }
            }
            Err(e) => {
                log::warn!("set_mode rejected: {}", e);
                ModeChangeOutcome::Rejected(e.to_string())
            }
        };

        self.session.set_changing_mode(false);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeError;
    use crate::models::MiningMode;
    use std::sync::Mutex;
    use std::sync::mpsc::Receiver;

    struct FakeApi {
        calls: Mutex<Vec<&'static str>>,
        fail_start: bool,
        fail_stop: bool,
        fail_set_mode: bool,
    }

    impl FakeApi {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail_start: false,
                fail_stop: false,
                fail_set_mode: false,
            })
        }

        fn failing(fail_start: bool, fail_stop: bool, fail_set_mode: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail_start,
                fail_stop,
                fail_set_mode,
            })
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn reject(method: &'static str) -> BridgeError {
            BridgeError::Rejected {
                method,
                reason: "refused".to_string(),
            }
        }
    }

    #[async_trait::async_trait]
    impl MinerControlApi for FakeApi {
        async fn start_mining(&self) -> Result<(), BridgeError> {
            self.calls.lock().unwrap().push("start_mining");
            if self.fail_start {
                Err(Self::reject("start_mining"))
            } else {
                Ok(())
            }
        }

        async fn stop_mining(&self) -> Result<(), BridgeError> {
            self.calls.lock().unwrap().push("stop_mining");
            if self.fail_stop {
                Err(Self::reject("stop_mining"))
            } else {
                Ok(())
            }
        }

        async fn set_mode(&self, _req: &ModeChangeRequest) -> Result<(), BridgeError> {
            self.calls.lock().unwrap().push("set_mode");
            if self.fail_set_mode {
                Err(Self::reject("set_mode"))
            } else {
                Ok(())
            }
        }
    }

    fn rig(api: Arc<FakeApi>) -> (MiningControls, SessionStore, Receiver<UiMessage>) {
        let session = SessionStore::default();
        let (tx, rx) = std::sync::mpsc::channel();
        let controls = MiningControls::new(api, session.clone(), tx);
        (controls, session, rx)
    }

    fn intents(rx: &Receiver<UiMessage>) -> Vec<bool> {
        rx.try_iter()
            .filter_map(|m| match m {
                UiMessage::Intent { enabled } => Some(enabled),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn start_sets_intent_and_confirms() {
        let api = FakeApi::ok();
        let (controls, session, rx) = rig(api.clone());

        let outcome = controls.start().await;

        assert!(matches!(outcome, ControlOutcome::Started));
        assert!(session.mining_enabled());
        assert_eq!(api.calls(), vec!["start_mining"]);
        assert_eq!(intents(&rx), vec![true]);
    }

    #[tokio::test]
    async fn rejected_start_rolls_back() {
        let api = FakeApi::failing(true, false, false);
        let (controls, session, rx) = rig(api.clone());

        let outcome = controls.start().await;

        assert!(matches!(outcome, ControlOutcome::Rejected(_)));
        assert!(!session.mining_enabled());
        assert_eq!(intents(&rx), vec![true, false]);
    }

    #[tokio::test]
    async fn start_twice_reports_already_in_state() {
        let api = FakeApi::ok();
        let (controls, _session, _rx) = rig(api.clone());

        controls.start().await;
        let second = controls.start().await;

        assert!(matches!(second, ControlOutcome::AlreadyInState));
        assert_eq!(api.calls(), vec!["start_mining"]);
    }

    #[tokio::test]
    async fn rejected_stop_rolls_back_to_enabled() {
        let api = FakeApi::failing(false, true, false);
        let (controls, session, rx) = rig(api.clone());
        session.set_mining_enabled(true);

        let outcome = controls.stop().await;

        assert!(matches!(outcome, ControlOutcome::Rejected(_)));
        assert!(session.mining_enabled());
        assert_eq!(intents(&rx), vec![false, true]);
    }

    #[tokio::test]
    async fn cancel_forces_off_even_when_stop_fails() {
        let api = FakeApi::failing(false, true, false);
        let (controls, session, _rx) = rig(api.clone());
        session.set_mining_enabled(true);

        let outcome = controls.cancel().await;

        assert!(matches!(outcome, ControlOutcome::Stopped));
        assert!(!session.mining_enabled());
    }

    #[tokio::test]
    async fn change_mode_stops_before_applying() {
        let api = FakeApi::ok();
        let (controls, session, _rx) = rig(api.clone());
        session.set_mining_enabled(true);
        session.set_mining_in_progress(true);

        let outcome = controls
            .change_mode(ModeChangeRequest::preset(MiningMode::Ludicrous))
            .await;

        assert!(matches!(
            outcome,
            ModeChangeOutcome::Applied { restart_wanted: true }
        ));
        assert_eq!(api.calls(), vec!["stop_mining", "set_mode"]);
        assert!(!session.changing_mode());
    }

    #[tokio::test]
    async fn change_mode_while_idle_skips_the_stop() {
        let api = FakeApi::ok();
        let (controls, session, _rx) = rig(api.clone());

        let outcome = controls
            .change_mode(ModeChangeRequest::preset(MiningMode::Eco))
            .await;

        assert!(matches!(
            outcome,
            ModeChangeOutcome::Applied {
                restart_wanted: false
            }
        ));
        assert_eq!(api.calls(), vec!["set_mode"]);
        assert!(!session.changing_mode());
    }

    #[tokio::test]
    async fn change_mode_clears_changing_flag_on_rejection() {
        let api = FakeApi::failing(false, false, true);
        let (controls, session, _rx) = rig(api.clone());

        let outcome = controls
            .change_mode(ModeChangeRequest::preset(MiningMode::Ludicrous))
            .await;

        assert!(matches!(outcome, ModeChangeOutcome::Rejected(_)));
        assert!(!session.changing_mode());
    }

    #[tokio::test]
    async fn failed_stop_aborts_the_mode_change() {
        let api = FakeApi::failing(false, true, false);
        let (controls, session, _rx) = rig(api.clone());
        session.set_mining_enabled(true);
        session.set_mining_in_progress(true);

        let outcome = controls
            .change_mode(ModeChangeRequest::preset(MiningMode::Ludicrous))
            .await;

        assert!(matches!(outcome, ModeChangeOutcome::Rejected(_)));
        assert_eq!(api.calls(), vec!["stop_mining"]);
        assert!(session.mining_enabled());
        assert!(!session.changing_mode());
    }

    #[tokio::test]
    async fn auto_mining_applies_mode_directly() {
        let api = FakeApi::ok();
        let (controls, session, rx) = rig(api.clone());
        session.set_auto_mining_active(true);

        let outcome = controls
            .change_mode(ModeChangeRequest::preset(MiningMode::Custom))
            .await;

        assert!(matches!(
            outcome,
            ModeChangeOutcome::Applied {
                restart_wanted: false
            }
        ));
        assert_eq!(api.calls(), vec!["set_mode"]);
        let started: Vec<_> = rx
            .try_iter()
            .filter(|m| matches!(m, UiMessage::ModeChangeStarted))
            .collect();
        assert!(started.is_empty());
    }
}
