use std::time::Instant;

use crate::config::{FAIL_SETTLE, MICRO_PER_COIN, WIN_CELEBRATION, constants::tiers};
use crate::data::BlockWin;
use crate::models::{MiningMode, TransactionInfo};
use crate::session::SessionStore;
use crate::utils::TimeUtils;
use crate::visuals::{AnimationState, VisualsDriver};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Wins collected while the window was unfocused, replayed as one
/// celebration when focus returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecapTally {
    pub wins: u32,
    pub total_earned: u64,
}

/// Celebration tier by earned amount, in whole coins.
pub fn success_tier(amount_micro: u64) -> AnimationState {
    let coins = amount_micro / MICRO_PER_COIN;
    if coins < tiers::SINGLE_MAX {
        AnimationState::Success
    } else if coins <= tiers::DOUBLE_MAX {
        AnimationState::Success2
    } else {
        AnimationState::Success3
    }
}

/// Tracks settled blocks: drives win/fail celebrations, defers the
/// displayed height until a celebration window closes, and tallies wins
/// that land while the window is unfocused.
pub struct BlockWatcher {
    display_height: u64,
    pending_height: Option<u64>,
    window_until: Option<Instant>,
    recap: Option<RecapTally>,
    focused: bool,
}

impl Default for BlockWatcher {
    fn default() -> Self {
        Self {
            display_height: 0,
            pending_height: None,
            window_until: None,
            recap: None,
            focused: true,
        }
    }
}

impl BlockWatcher {
    pub fn display_height(&self) -> u64 {
        self.display_height
    }

    /// A block was checked against wallet history. Returns the win row to
    /// record if the coinbase was ours, focused or not.
    pub fn on_block_settled(
        &mut self,
        height: u64,
        coinbase: Option<&TransactionInfo>,
        mining: bool,
        mode: MiningMode,
        now: Instant,
        session: &SessionStore,
        driver: &mut VisualsDriver,
    ) -> Option<BlockWin> {
        if !mining {
            self.display_height = height;
            return None;
        }

        match coinbase {
            Some(tx) => {
                #[cfg(debug_assertions)]
                if DF.log_blocks {
                    log::info!("block {} won, amount {}", height, tx.amount);
                }
                if self.focused {
                    self.drive(driver, success_tier(tx.amount));
                    session.set_controls_locked(true);
                    self.window_until = Some(now + WIN_CELEBRATION);
                    self.pending_height = Some(height);
                } else {
                    let tally = self.recap.get_or_insert_with(RecapTally::default);
                    tally.wins += 1;
                    tally.total_earned += tx.amount;
                    self.display_height = height;
                }
                Some(BlockWin {
                    height: height as i64,
                    amount_micro: tx.amount as i64,
                    mode: mode.to_string(),
                    won_at_ms: TimeUtils::local_now_as_timestamp_ms(),
                })
            }
            None => {
                if self.focused {
                    self.drive(driver, AnimationState::Fail);
                    self.window_until = Some(now + FAIL_SETTLE);
                    self.pending_height = Some(height);
                } else {
                    self.display_height = height;
                }
                None
            }
        }
    }

    /// Close an expired celebration window: unlock controls, apply the
    /// deferred height, settle the visual back to its baseline.
    pub fn tick(
        &mut self,
        now: Instant,
        mining: bool,
        session: &SessionStore,
        driver: &mut VisualsDriver,
    ) {
        let Some(deadline) = self.window_until else {
            return;
        };
        if now < deadline {
            return;
        }
        self.window_until = None;
        session.set_controls_locked(false);
        if let Some(height) = self.pending_height.take() {
            self.display_height = height;
        }
        let baseline = if mining {
            AnimationState::Start
        } else {
            AnimationState::Stop
        };
        self.drive(driver, baseline);
    }

    /// Track focus; on regaining it, replay any recap as one celebration.
    pub fn on_focus_change(
        &mut self,
        focused: bool,
        now: Instant,
        session: &SessionStore,
        driver: &mut VisualsDriver,
    ) -> Option<RecapTally> {
        self.focused = focused;
        if !focused {
            return None;
        }
        let tally = self.recap.take()?;
        self.drive(driver, success_tier(tally.total_earned));
        session.set_controls_locked(true);
        self.window_until = Some(now + WIN_CELEBRATION);
        Some(tally)
    }

    fn drive(&self, driver: &mut VisualsDriver, state: AnimationState) {
        if let Err(e) = driver.set(state) {
            log::warn!("animation backend refused {}: {}", state, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxDirection;
    use crate::visuals::{AnimationController, VisualError};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

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

    fn coinbase(amount: u64, height: u64) -> TransactionInfo {
        TransactionInfo {
            tx_id: 1,
            amount,
            direction: TxDirection::Inbound,
            message: String::new(),
            timestamp: 0,
            mined_in_block_height: Some(height),
        }
    }

    fn rig() -> (BlockWatcher, SessionStore, VisualsDriver, Arc<Recording>) {
        let rec = Recording::new();
        (
            BlockWatcher::default(),
            SessionStore::default(),
            VisualsDriver::new(rec.clone()),
            rec,
        )
    }

    #[test]
    fn tier_thresholds_in_whole_coins() {
        assert_eq!(success_tier(99 * MICRO_PER_COIN), AnimationState::Success);
        assert_eq!(success_tier(100 * MICRO_PER_COIN), AnimationState::Success2);
        assert_eq!(success_tier(1000 * MICRO_PER_COIN), AnimationState::Success2);
        assert_eq!(success_tier(1001 * MICRO_PER_COIN), AnimationState::Success3);
    }

    #[test]
    fn height_passes_straight_through_while_not_mining() {
        let (mut watcher, session, mut driver, rec) = rig();
        let t0 = Instant::now();

        let win = watcher.on_block_settled(
            42,
            Some(&coinbase(MICRO_PER_COIN, 42)),
            false,
            MiningMode::Eco,
            t0,
            &session,
            &mut driver,
        );

        assert!(win.is_none());
        assert_eq!(watcher.display_height(), 42);
        assert!(rec.states().is_empty());
        assert!(!session.controls_locked());
    }

    #[test]
    fn focused_win_locks_controls_and_defers_the_height() {
        let (mut watcher, session, mut driver, rec) = rig();
        let t0 = Instant::now();

        let win = watcher.on_block_settled(
            100,
            Some(&coinbase(5 * MICRO_PER_COIN, 100)),
            true,
            MiningMode::Ludicrous,
            t0,
            &session,
            &mut driver,
        );

        assert!(win.is_some());
        assert_eq!(rec.states(), vec![AnimationState::Success]);
        assert!(session.controls_locked());
        assert_eq!(watcher.display_height(), 0);

        watcher.tick(t0 + Duration::from_millis(1999), true, &session, &mut driver);
        assert!(session.controls_locked());

        watcher.tick(t0 + WIN_CELEBRATION, true, &session, &mut driver);
        assert!(!session.controls_locked());
        assert_eq!(watcher.display_height(), 100);
        assert_eq!(rec.states().last(), Some(&AnimationState::Start));
    }

    #[test]
    fn fail_settles_back_after_its_window() {
        let (mut watcher, session, mut driver, rec) = rig();
        let t0 = Instant::now();

        let win =
            watcher.on_block_settled(7, None, true, MiningMode::Eco, t0, &session, &mut driver);

        assert!(win.is_none());
        assert_eq!(rec.states(), vec![AnimationState::Fail]);

        watcher.tick(t0 + FAIL_SETTLE, false, &session, &mut driver);
        assert_eq!(watcher.display_height(), 7);
        assert_eq!(rec.states().last(), Some(&AnimationState::Stop));
    }

    #[test]
    fn unfocused_wins_accumulate_and_replay_once() {
        let (mut watcher, session, mut driver, rec) = rig();
        let t0 = Instant::now();
        watcher.on_focus_change(false, t0, &session, &mut driver);

        let first = watcher.on_block_settled(
            10,
            Some(&coinbase(60 * MICRO_PER_COIN, 10)),
            true,
            MiningMode::Eco,
            t0,
            &session,
            &mut driver,
        );
        let second = watcher.on_block_settled(
            11,
            Some(&coinbase(70 * MICRO_PER_COIN, 11)),
            true,
            MiningMode::Eco,
            t0,
            &session,
            &mut driver,
        );

        assert!(first.is_some() && second.is_some());
        assert!(rec.states().is_empty());
        assert_eq!(watcher.display_height(), 11);

        let tally = watcher
            .on_focus_change(true, t0, &session, &mut driver)
            .unwrap();
        assert_eq!(tally.wins, 2);
        assert_eq!(tally.total_earned, 130 * MICRO_PER_COIN);
        // 130 coins lands in the middle tier.
        assert_eq!(rec.states(), vec![AnimationState::Success2]);
        assert!(session.controls_locked());

        assert!(
            watcher
                .on_focus_change(true, t0, &session, &mut driver)
                .is_none()
        );
    }
}
