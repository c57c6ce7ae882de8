//! End-to-end session flows: controls feeding the reconciler over the
//! message channel, the restart scheduler, and the animation driver, wired
//! together the same way the app shell wires them each frame.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use hashdeck::bridge::{BridgeError, MinerControlApi, UiMessage};
use hashdeck::config::MODE_RESTART_DELAY;
use hashdeck::models::{ControlOutcome, MiningMode, ModeChangeOutcome, ModeChangeRequest};
use hashdeck::session::{
    MiningControls, MiningReconciler, RestartScheduler, SessionEvent, SessionStore,
};
use hashdeck::visuals::{AnimationController, AnimationState, VisualError, VisualsDriver};

#[derive(Default)]
struct FakeMiner {
    calls: Mutex<Vec<&'static str>>,
}

impl FakeMiner {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MinerControlApi for FakeMiner {
    async fn start_mining(&self) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push("start_mining");
        Ok(())
    }

    async fn stop_mining(&self) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push("stop_mining");
        Ok(())
    }

    async fn set_mode(&self, _req: &ModeChangeRequest) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push("set_mode");
        Ok(())
    }
}

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

struct Rig {
    controls: MiningControls,
    session: SessionStore,
    reconciler: MiningReconciler,
    scheduler: RestartScheduler,
    driver: VisualsDriver,
    rec: Arc<Recording>,
    api: Arc<FakeMiner>,
    rx: Receiver<UiMessage>,
}

fn rig() -> Rig {
    let api = Arc::new(FakeMiner::default());
    let rec = Recording::new();
    let session = SessionStore::default();
    let (tx, rx) = std::sync::mpsc::channel();
    Rig {
        controls: MiningControls::new(api.clone(), session.clone(), tx),
        session,
        reconciler: MiningReconciler::default(),
        scheduler: RestartScheduler::default(),
        driver: VisualsDriver::new(rec.clone()),
        rec,
        api,
        rx,
    }
}

/// Route queued control messages into the reconciler and process them,
/// mirroring one frame of the shell's message drain.
fn pump(rig: &mut Rig) {
    while let Ok(msg) = rig.rx.try_recv() {
        match msg {
            UiMessage::Intent { enabled } => {
                rig.reconciler.push(SessionEvent::Intent { enabled });
            }
            UiMessage::ModeChangeStarted => {
                rig.reconciler.push(SessionEvent::ModeChangeStarted);
            }
            _ => {}
        }
    }
    rig.reconciler.drain(&rig.session, &mut rig.driver);
}

/// A miner status push from the daemon.
fn status(rig: &mut Rig, mining: bool) {
    rig.reconciler.push(SessionEvent::Status { mining });
    rig.reconciler.drain(&rig.session, &mut rig.driver);
}

/// What the shell does when a mode-change outcome lands: settle the guard,
/// then arm the restart if one is owed.
fn settle(rig: &mut Rig, outcome: &ModeChangeOutcome, now: Instant) {
    rig.reconciler.push(SessionEvent::ModeChangeSettled);
    rig.reconciler.drain(&rig.session, &mut rig.driver);
    if let ModeChangeOutcome::Applied {
        restart_wanted: true,
    } = outcome
    {
        rig.scheduler.schedule(now);
    }
}

#[tokio::test]
async fn mode_change_stops_applies_then_restarts_after_the_delay() {
    let mut r = rig();
    let t0 = Instant::now();

    r.controls.start().await;
    pump(&mut r);
    status(&mut r, true);
    assert!(r.session.mining_in_progress());

    let outcome = r
        .controls
        .change_mode(ModeChangeRequest::preset(MiningMode::Ludicrous))
        .await;
    pump(&mut r);
    settle(&mut r, &outcome, t0);

    assert_eq!(r.api.calls(), vec!["start_mining", "stop_mining", "set_mode"]);
    assert!(r.scheduler.is_pending());

    // Daemon confirms the stop while the restart window is running.
    status(&mut r, false);
    assert!(!r.session.mining_in_progress());

    assert!(!r.scheduler.take_due(t0 + MODE_RESTART_DELAY - Duration::from_millis(1)));
    assert!(r.scheduler.take_due(t0 + MODE_RESTART_DELAY));
    r.controls.start().await;
    pump(&mut r);
    status(&mut r, true);

    assert_eq!(
        r.api.calls(),
        vec!["start_mining", "stop_mining", "set_mode", "start_mining"]
    );
    assert_eq!(
        r.rec.states(),
        vec![
            AnimationState::Start,
            AnimationState::Stop,
            AnimationState::Start
        ]
    );
    assert!(r.session.mining_in_progress());
    assert!(!r.scheduler.take_due(t0 + Duration::from_secs(60)));
}

#[tokio::test]
async fn second_mode_change_cancels_the_first_restart() {
    let mut r = rig();
    let t0 = Instant::now();
    let t1 = t0 + Duration::from_millis(500);

    r.controls.start().await;
    pump(&mut r);
    status(&mut r, true);

    // First change. No stop confirmation arrives before the second one;
    // the session still counts as in progress.
    r.scheduler.cancel();
    let first = r
        .controls
        .change_mode(ModeChangeRequest::preset(MiningMode::Ludicrous))
        .await;
    pump(&mut r);
    settle(&mut r, &first, t0);

    r.scheduler.cancel();
    let second = r
        .controls
        .change_mode(ModeChangeRequest::preset(MiningMode::Eco))
        .await;
    pump(&mut r);
    settle(&mut r, &second, t1);

    assert!(matches!(
        second,
        ModeChangeOutcome::Applied {
            restart_wanted: true
        }
    ));

    // Only the second deadline fires, and only once.
    assert!(!r.scheduler.take_due(t0 + MODE_RESTART_DELAY));
    assert!(r.scheduler.take_due(t1 + MODE_RESTART_DELAY));
    r.controls.start().await;
    assert!(!r.scheduler.take_due(t1 + Duration::from_secs(60)));

    let starts = r
        .api
        .calls()
        .iter()
        .filter(|&&c| c == "start_mining")
        .count();
    assert_eq!(starts, 2); // The session start plus one restart.
    assert_eq!(r.api.calls().last(), Some(&"start_mining"));
}

#[tokio::test]
async fn stall_pauses_then_recovery_resumes_without_a_new_start_call() {
    let mut r = rig();

    r.controls.start().await;
    pump(&mut r);
    status(&mut r, true);

    status(&mut r, false);
    assert!(r.session.connection_lost());
    assert!(r.session.mining_in_progress());

    status(&mut r, true);
    assert_eq!(
        r.rec.states(),
        vec![
            AnimationState::Start,
            AnimationState::Pause,
            AnimationState::Resume
        ]
    );
    assert!(!r.session.connection_lost());
    // Recovery is visual only; no second daemon start was issued.
    assert_eq!(r.api.calls(), vec!["start_mining"]);
}

#[tokio::test]
async fn cancel_rewinds_the_scene_and_clears_the_session() {
    let mut r = rig();

    r.controls.start().await;
    pump(&mut r);
    status(&mut r, true);
    status(&mut r, false);
    assert!(r.session.connection_lost());

    let outcome = r.controls.cancel().await;
    assert!(matches!(outcome, ControlOutcome::Stopped));

    // The shell applies the queued intent, plays the rewind, then drains.
    while let Ok(msg) = r.rx.try_recv() {
        if let UiMessage::Intent { enabled } = msg {
            r.reconciler.push(SessionEvent::Intent { enabled });
        }
    }
    r.driver.set(AnimationState::Start).unwrap();
    r.driver.set(AnimationState::Stop).unwrap();
    r.reconciler.drain(&r.session, &mut r.driver);

    assert!(!r.session.mining_enabled());
    assert!(!r.session.mining_in_progress());
    assert!(!r.session.connection_lost());

    // The rewind's start lands as a resume (the pause was still remembered),
    // and the follow-up stop wipes that memory for the next session.
    r.controls.start().await;
    pump(&mut r);
    status(&mut r, true);
    assert_eq!(
        r.rec.states(),
        vec![
            AnimationState::Start,
            AnimationState::Pause,
            AnimationState::Resume,
            AnimationState::Stop,
            AnimationState::Stop,
            AnimationState::Start
        ]
    );
}
