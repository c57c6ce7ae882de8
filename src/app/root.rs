use {
    eframe::{Frame, Storage, egui::Context},
    serde::{Deserialize, Serialize},
    std::{fs, mem, sync::Arc, time::Instant},
};

use crate::{
    Cli,
    app::{AppState, ConnectingState, PhaseView, RunningState},
    bridge::{BridgeRuntime, LinkStatus, UiMessage, spawn_bridge},
    config::{DAEMON, DF, PERSISTENCE, daemon_url, earnings_db_path},
    data::{BlockWin, EarningsRepository, EarningsRepositoryTrait},
    models::{
        ControlAction, ControlOutcome, MiningMode, ModeChangeOutcome, ModeChangeRequest,
        TransactionInfo,
    },
    session::{
        BlockWatcher, MiningControls, MiningReconciler, RecapTally, RestartScheduler,
        SessionEvent, SessionStore,
    },
    stores::Stores,
    ui::{SettingsSection, SettingsUi, render_connecting, setup_custom_visuals},
    visuals::{AnimationState, SceneController, SceneHandle, VisualsDriver},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Persisted user intent (thin, serializable)
    pub(crate) selected_mode: MiningMode,
    pub(crate) custom_cpu_usage: u32,
    pub(crate) custom_gpu_usage: u32,
    pub(crate) cpu_enabled_pref: bool,
    pub(crate) gpu_enabled_pref: bool,
    pub(crate) mine_on_app_start: bool,
    pub(crate) auto_mining_pref: bool,
    pub(crate) settings_section: SettingsSection,

    #[serde(skip)]
    pub(crate) bridge: Option<BridgeRuntime>,
    #[serde(skip)]
    pub(crate) stores: Stores,
    #[serde(skip)]
    pub(crate) session: SessionStore,
    #[serde(skip)]
    pub(crate) controls: Option<Arc<MiningControls>>,
    #[serde(skip)]
    pub(crate) reconciler: MiningReconciler,
    #[serde(skip)]
    pub(crate) scene: SceneHandle,
    #[serde(skip)]
    pub(crate) driver: VisualsDriver,
    #[serde(skip)]
    pub(crate) scheduler: RestartScheduler,
    #[serde(skip)]
    pub(crate) blocks: BlockWatcher,
    #[serde(skip)]
    pub(crate) settings_ui: SettingsUi,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) earnings: Option<Arc<dyn EarningsRepositoryTrait>>,
    #[serde(skip)]
    pub(crate) session_tally: RecapTally,
    #[serde(skip)]
    pub(crate) lifetime_totals: Option<(i64, i64)>,
    #[serde(skip)]
    pub(crate) recap_banner: Option<RecapTally>,
    #[serde(skip)]
    pub(crate) pending_mode_revert: Option<MiningMode>,
    #[serde(skip)]
    pub(crate) did_autostart: bool,
    #[serde(skip)]
    pub(crate) was_focused: bool,
    #[serde(skip)]
    pub(crate) last_control_error: Option<String>,
    #[serde(skip)]
    pub(crate) last_link: LinkStatus,
}

impl Default for App {
    fn default() -> Self {
        let scene = SceneHandle::default();
        let driver = VisualsDriver::new(Arc::new(SceneController::new(scene.clone())));
        Self {
            selected_mode: MiningMode::default(),
            custom_cpu_usage: 1,
            custom_gpu_usage: 1,
            cpu_enabled_pref: true,
            gpu_enabled_pref: true,
            mine_on_app_start: false,
            auto_mining_pref: false,
            settings_section: SettingsSection::default(),
            bridge: None,
            stores: Stores::default(),
            session: SessionStore::default(),
            controls: None,
            reconciler: MiningReconciler::default(),
            scene,
            driver,
            scheduler: RestartScheduler::default(),
            blocks: BlockWatcher::default(),
            settings_ui: SettingsUi::default(),
            state: AppState::default(),
            earnings: None,
            session_tally: RecapTally::default(),
            lifetime_totals: None,
            recap_banner: None,
            pending_mode_revert: None,
            did_autostart: false,
            was_focused: true,
            last_control_error: None,
            last_link: LinkStatus::Disconnected,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if args.fresh {
            Self::default()
        } else if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Runtime fields are rebuilt fresh even after a restored session.
        app.scene = SceneHandle::default();
        app.driver = VisualsDriver::new(Arc::new(SceneController::new(app.scene.clone())));
        app.state = AppState::Connecting(ConnectingState);
        app.session.set_auto_mining_active(app.auto_mining_pref);

        let host = args
            .host
            .unwrap_or_else(|| DAEMON.ws.default_host.to_string());
        let port = args.port.unwrap_or(DAEMON.ws.default_port);
        let bridge = spawn_bridge(daemon_url(&host, port), app.stores.clone());

        app.controls = Some(Arc::new(MiningControls::new(
            Arc::new(bridge.handle.clone()),
            app.session.clone(),
            bridge.ui_tx.clone(),
        )));

        app.earnings = Self::open_earnings(&bridge);
        app.bridge = Some(bridge);
        app.refresh_lifetime_totals();

        app
    }

    fn open_earnings(bridge: &BridgeRuntime) -> Option<Arc<dyn EarningsRepositoryTrait>> {
        if let Err(e) = fs::create_dir_all(PERSISTENCE.earnings.directory) {
            log::error!("Could not create earnings directory: {}", e);
            return None;
        }
        match bridge.rt().block_on(EarningsRepository::new(&earnings_db_path())) {
            Ok(repo) => Some(Arc::new(repo)),
            Err(e) => {
                // Mining still works without the archive; lifetime stats stay blank.
                log::error!("Earnings archive unavailable: {:#}", e);
                None
            }
        }
    }

    pub(crate) fn link_status(&self) -> LinkStatus {
        self.bridge
            .as_ref()
            .map(|b| b.link.get())
            .unwrap_or(LinkStatus::Disconnected)
    }

    /// CONNECTING PHASE MAIN LOOP
    pub(crate) fn tick_connecting_state(
        &mut self,
        ctx: &Context,
        state: &mut ConnectingState,
    ) -> AppState {
        self.drain_ui_messages();
        ctx.request_repaint_after(std::time::Duration::from_millis(200));

        if self.link_status() == LinkStatus::Connected && self.stores.setup.is_finished() {
            self.last_link = LinkStatus::Connected;
            return AppState::Running(RunningState);
        }
        render_connecting(ctx, &self.stores, self.link_status());
        AppState::Connecting(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.drain_ui_messages();
        self.observe_link();
        self.reconciler.drain(&self.session, &mut self.driver);

        let now = Instant::now();
        if self.scheduler.take_due(now) {
            #[cfg(debug_assertions)]
            if DF.log_scheduler {
                log::info!("Restart window elapsed; starting mining again");
            }
            self.dispatch_control(ControlAction::Start);
        }
        self.blocks.tick(
            now,
            self.stores.metrics.any_mining(),
            &self.session,
            &mut self.driver,
        );

        let focused = ctx.input(|i| i.focused);
        if focused != self.was_focused {
            self.was_focused = focused;
            if let Some(recap) =
                self.blocks
                    .on_focus_change(focused, now, &self.session, &mut self.driver)
            {
                self.session_tally.wins += recap.wins;
                self.session_tally.total_earned += recap.total_earned;
                self.recap_banner = Some(recap);
            }
        }

        self.try_autostart();

        self.render_status_strip(ctx);
        self.render_controls_panel(ctx);
        self.render_wallet_panel(ctx);
        self.render_central_panel(ctx);
        self.render_settings_window(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn drain_ui_messages(&mut self) {
        let Some(bridge) = &self.bridge else { return };
        let mut batch = Vec::new();
        while let Ok(msg) = bridge.ui_rx.try_recv() {
            batch.push(msg);
        }
        for msg in batch {
            self.apply_message(msg);
        }
    }

    fn apply_message(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::Event(event) => self.apply_event(event),
            UiMessage::Intent { enabled } => {
                self.reconciler.push(SessionEvent::Intent { enabled });
            }
            UiMessage::ModeChangeStarted => {
                self.reconciler.push(SessionEvent::ModeChangeStarted);
            }
            UiMessage::ModeChange { mode, outcome } => {
                self.reconciler.push(SessionEvent::ModeChangeSettled);
                self.apply_mode_outcome(mode, outcome);
            }
            UiMessage::Control { action, outcome } => self.apply_control_outcome(action, outcome),
            UiMessage::BlockSettled { height, coinbase } => {
                self.apply_block_settled(height, coinbase);
            }
            UiMessage::LifetimeTotals { wins, earned } => {
                self.lifetime_totals = Some((wins, earned));
            }
        }
    }

    fn apply_event(&mut self, event: crate::bridge::BackendEvent) {
        use crate::bridge::BackendEvent;
        // Stores were already updated on the bridge thread; only frame-level
        // reactions happen here.
        match event {
            BackendEvent::CpuMining(_) | BackendEvent::GpuMining(_) => {
                self.reconciler.push(SessionEvent::Status {
                    mining: self.stores.metrics.any_mining(),
                });
            }
            BackendEvent::NewBlockHeight(height) => self.spawn_block_check(height),
            _ => {}
        }
    }

    fn apply_mode_outcome(&mut self, mode: MiningMode, outcome: ModeChangeOutcome) {
        match outcome {
            ModeChangeOutcome::Applied { restart_wanted } => {
                self.pending_mode_revert = None;
                if restart_wanted {
                    self.scheduler.schedule(Instant::now());
                    #[cfg(debug_assertions)]
                    if DF.log_scheduler {
                        log::info!("Mode {} applied; restart armed", mode);
                    }
                }
            }
            ModeChangeOutcome::Rejected(reason) => {
                if let Some(previous) = self.pending_mode_revert.take() {
                    self.selected_mode = previous;
                }
                log::warn!("Mode change to {} rejected: {}", mode, reason);
                self.last_control_error = Some(reason);
            }
        }
    }

    fn apply_control_outcome(&mut self, action: ControlAction, outcome: ControlOutcome) {
        #[cfg(debug_assertions)]
        if DF.log_controls {
            log::info!("{:?} finished as {:?}", action, outcome);
        }
        match (action, &outcome) {
            (ControlAction::Stop, ControlOutcome::Stopped) => self.drive(AnimationState::Stop),
            (ControlAction::Cancel, ControlOutcome::Stopped) => {
                // Rewind: back to the running look for one delivery, then
                // stopped. Clears any remembered pause on the way.
                self.drive(AnimationState::Start);
                self.drive(AnimationState::Stop);
            }
            (_, ControlOutcome::Rejected(reason)) => {
                self.last_control_error = Some(reason.clone());
            }
            _ => {}
        }
    }

    fn apply_block_settled(&mut self, height: u64, coinbase: Option<TransactionInfo>) {
        let mining = self.stores.metrics.any_mining();
        let win = self.blocks.on_block_settled(
            height,
            coinbase.as_ref(),
            mining,
            self.selected_mode,
            Instant::now(),
            &self.session,
            &mut self.driver,
        );
        if let Some(win) = win {
            if self.was_focused {
                self.session_tally.wins += 1;
                self.session_tally.total_earned += win.amount_micro.max(0) as u64;
            }
            self.record_win(win);
        }
    }

    fn spawn_block_check(&self, height: u64) {
        let Some(bridge) = &self.bridge else { return };
        #[cfg(debug_assertions)]
        if DF.log_blocks {
            log::info!("New tip {}; checking wallet history", height);
        }
        let handle = bridge.handle.clone();
        let stores = self.stores.clone();
        let ui_tx = bridge.ui_tx.clone();
        bridge.rt().spawn(async move {
            let coinbase = match handle.refresh_wallet_history().await {
                Ok(history) => {
                    stores.wallet.replace_history(history);
                    stores.wallet.coinbase_for(height)
                }
                Err(e) => {
                    log::warn!("History refresh failed at height {}: {}", height, e);
                    None
                }
            };
            let _ = ui_tx.send(UiMessage::BlockSettled { height, coinbase });
        });
    }

    fn record_win(&self, win: BlockWin) {
        let Some(repo) = self.earnings.clone() else { return };
        let Some(bridge) = &self.bridge else { return };
        let ui_tx = bridge.ui_tx.clone();
        bridge.rt().spawn(async move {
            if let Err(e) = repo.record_win(win).await {
                log::warn!("Failed to record block win: {:#}", e);
                return;
            }
            match repo.totals().await {
                Ok((wins, earned)) => {
                    let _ = ui_tx.send(UiMessage::LifetimeTotals { wins, earned });
                }
                Err(e) => log::warn!("Earnings totals query failed: {:#}", e),
            }
        });
    }

    fn refresh_lifetime_totals(&self) {
        let Some(repo) = self.earnings.clone() else { return };
        let Some(bridge) = &self.bridge else { return };
        let ui_tx = bridge.ui_tx.clone();
        bridge.rt().spawn(async move {
            match repo.totals().await {
                Ok((wins, earned)) => {
                    let _ = ui_tx.send(UiMessage::LifetimeTotals { wins, earned });
                }
                Err(e) => log::warn!("Earnings totals query failed: {:#}", e),
            }
        });
    }

    fn observe_link(&mut self) {
        let link = self.link_status();
        if self.last_link == LinkStatus::Connected
            && link != LinkStatus::Connected
            && self.session.mining_in_progress()
        {
            // The daemon went quiet mid-session. Synthesize a stopped status
            // so the reconciler pauses and waits for recovery.
            self.reconciler.push(SessionEvent::Status { mining: false });
        }
        self.last_link = link;
    }

    fn try_autostart(&mut self) {
        if self.did_autostart || !self.mine_on_app_start {
            return;
        }
        // Wait out any mode change or celebration lock before latching.
        if self.link_status() != LinkStatus::Connected || !self.session.controls_enabled() {
            return;
        }
        self.did_autostart = true;
        if !self.session.mining_enabled() && !self.stores.metrics.any_mining() {
            self.dispatch_control(ControlAction::Start);
        }
    }

    pub(crate) fn dispatch_control(&mut self, action: ControlAction) {
        let Some(controls) = self.controls.clone() else { return };
        let Some(bridge) = &self.bridge else { return };
        if matches!(action, ControlAction::Stop | ControlAction::Cancel) {
            self.scheduler.cancel();
        }
        self.last_control_error = None;
        let ui_tx = bridge.ui_tx.clone();
        bridge.rt().spawn(async move {
            let outcome = match action {
                ControlAction::Start => controls.start().await,
                ControlAction::Stop => controls.stop().await,
                ControlAction::Cancel => controls.cancel().await,
            };
            let _ = ui_tx.send(UiMessage::Control { action, outcome });
        });
    }

    pub(crate) fn dispatch_mode_change(&mut self, mode: MiningMode) {
        let Some(controls) = self.controls.clone() else { return };
        let Some(bridge) = &self.bridge else { return };

        // Picking a new mode voids any pending restart immediately.
        self.scheduler.cancel();
        self.last_control_error = None;
        self.pending_mode_revert = Some(self.selected_mode);
        self.selected_mode = mode;

        let request = self.mode_request(mode);
        let ui_tx = bridge.ui_tx.clone();
        bridge.rt().spawn(async move {
            let outcome = controls.change_mode(request).await;
            let _ = ui_tx.send(UiMessage::ModeChange { mode, outcome });
        });
    }

    pub(crate) fn mode_request(&self, mode: MiningMode) -> ModeChangeRequest {
        match mode {
            MiningMode::Custom => ModeChangeRequest {
                mode,
                custom_cpu_usage: Some(self.custom_cpu_usage),
                custom_gpu_usage: Some(self.custom_gpu_usage),
            },
            _ => ModeChangeRequest::preset(mode),
        }
    }

    pub(crate) fn drive(&mut self, state: AnimationState) {
        if let Err(e) = self.driver.set(state) {
            log::warn!("Animation controller rejected {}: {}", state, e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Connecting(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_controls {
            log::info!(
                "💾 SAVE [App]: mode {} cpu {} gpu {}",
                self.selected_mode,
                self.custom_cpu_usage,
                self.custom_gpu_usage
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
