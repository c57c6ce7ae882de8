use std::sync::LazyLock;

pub struct UiText {
    // --- Connecting screen ---
    pub cs_title: String,
    pub cs_waiting: String,
    pub cs_link_down: String,
    pub cs_setup_heading: String,

    // --- Status strip ---
    pub ss_height: String,
    pub ss_peers: String,
    pub ss_synced: String,
    pub ss_syncing: String,
    pub ss_latency: String,
    pub ss_network_slow: String,
    pub ss_gems: String,
    pub ss_link_connected: String,
    pub ss_link_connecting: String,
    pub ss_link_disconnected: String,

    // --- Controls panel ---
    pub ctrl_heading: String,
    pub ctrl_start: String,
    pub ctrl_stop: String,
    pub ctrl_starting: String,
    pub ctrl_stopping: String,
    pub ctrl_cancel: String,
    pub ctrl_connection_lost: String,
    pub ctrl_changing_mode: String,
    pub ctrl_mode_heading: String,
    pub ctrl_auto_mining: String,
    pub ctrl_settings: String,

    // --- Dashboard / scene ---
    pub dash_hash_rate: String,
    pub dash_waiting_hash_rate: String,
    pub dash_session: String,
    pub dash_est_earnings: String,
    pub dash_idle: String,
    pub dash_recap_prefix: String,
    pub dash_lifetime_wins: String,

    // --- Wallet panel ---
    pub wl_heading: String,
    pub wl_available: String,
    pub wl_timelocked: String,
    pub wl_pending_in: String,
    pub wl_pending_out: String,
    pub wl_pool_unpaid: String,
    pub wl_history_heading: String,
    pub wl_history_empty: String,
    pub wl_col_time: String,
    pub wl_col_direction: String,
    pub wl_col_amount: String,
    pub wl_col_message: String,
    pub wl_inbound: String,
    pub wl_outbound: String,

    // --- Settings: mining ---
    pub st_mining_heading: String,
    pub st_mode: String,
    pub st_custom_cpu: String,
    pub st_custom_gpu: String,
    pub st_cpu_enabled: String,
    pub st_gpu_enabled: String,
    pub st_gpu_devices: String,
    pub st_mine_on_start: String,
    pub st_mode_locked: String,

    // --- Settings: pools ---
    pub st_pools_heading: String,
    pub st_pool_cpu: String,
    pub st_pool_gpu: String,
    pub st_pool_no_stats: String,
    pub st_pool_accepted: String,
    pub st_pool_unpaid: String,
    pub st_pool_min_payout: String,
    pub st_pool_port: String,
    pub st_pool_port_fetch: String,

    // --- Settings: connections ---
    pub st_conn_heading: String,
    pub st_tor_control_port: String,
    pub st_tor_use_bridges: String,
    pub st_tor_bridges: String,
    pub st_tor_fetch_bridges: String,
    pub st_tor_load: String,
    pub st_tor_save: String,
    pub st_peers_heading: String,
    pub st_peers_refresh: String,
    pub st_peers_empty: String,

    // --- Settings: security ---
    pub st_security_heading: String,
    pub st_pin_locked: String,
    pub st_pin_unlocked: String,
    pub st_pin_new: String,
    pub st_pin_create: String,
    pub st_pin_mismatch: String,
    pub st_pin_confirm: String,

    // --- Settings: general ---
    pub st_general_heading: String,
    pub st_open_logs: String,
    pub st_feedback_heading: String,
    pub st_feedback_hint: String,
    pub st_feedback_include_logs: String,
    pub st_feedback_send: String,
    pub st_feedback_sent: String,

    // --- Settings: tapplets ---
    pub st_tapplets_heading: String,
    pub st_tapplets_empty: String,
    pub st_tapplet_launch: String,
    pub st_tapplet_upload: String,
    pub st_tapplet_pick_wasm: String,

    // --- Shared ---
    pub label_error_prefix: String,
    pub label_blocks: String,
    pub label_close: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| {
    UiText {
        // Connecting screen
        cs_title: "HASHDECK STARTUP".to_string(),
        cs_waiting: "Waiting for the mining daemon...".to_string(),
        cs_link_down: "Daemon not reachable yet. Retrying in the background.".to_string(),
        cs_setup_heading: "Daemon setup".to_string(),

        // Status strip
        ss_height: "Height".to_string(),
        ss_peers: "Peers".to_string(),
        ss_synced: "Synced".to_string(),
        ss_syncing: "Syncing".to_string(),
        ss_latency: "Latency".to_string(),
        ss_network_slow: "Network too slow".to_string(),
        ss_gems: "Gems".to_string(),
        ss_link_connected: "LIVE".to_string(),
        ss_link_connecting: "CONNECTING".to_string(),
        ss_link_disconnected: "OFFLINE".to_string(),

        // Controls panel
        ctrl_heading: "Mining".to_string(),
        ctrl_start: "Start Mining".to_string(),
        ctrl_stop: "Stop Mining".to_string(),
        ctrl_starting: "Starting...".to_string(),
        ctrl_stopping: "Stopping...".to_string(),
        ctrl_cancel: "Cancel".to_string(),
        ctrl_connection_lost: "Connection lost. Mining will resume automatically.".to_string(),
        ctrl_changing_mode: "Applying mode...".to_string(),
        ctrl_mode_heading: "Power Mode".to_string(),
        ctrl_auto_mining: "Auto mining".to_string(),
        ctrl_settings: "Settings".to_string(),

        // Dashboard
        dash_hash_rate: "Hash Rate".to_string(),
        dash_waiting_hash_rate: "Waiting for hash rate...".to_string(),
        dash_session: "Session".to_string(),
        dash_est_earnings: "Est. earnings".to_string(),
        dash_idle: "Not mining".to_string(),
        dash_recap_prefix: "While you were away".to_string(),
        dash_lifetime_wins: "Lifetime wins".to_string(),

        // Wallet panel
        wl_heading: "Wallet".to_string(),
        wl_available: "Available".to_string(),
        wl_timelocked: "Timelocked".to_string(),
        wl_pending_in: "Pending in".to_string(),
        wl_pending_out: "Pending out".to_string(),
        wl_pool_unpaid: "Pool unpaid".to_string(),
        wl_history_heading: "History".to_string(),
        wl_history_empty: "No transactions yet.".to_string(),
        wl_col_time: "Time".to_string(),
        wl_col_direction: "Dir".to_string(),
        wl_col_amount: "Amount".to_string(),
        wl_col_message: "Message".to_string(),
        wl_inbound: "IN".to_string(),
        wl_outbound: "OUT".to_string(),

        // Settings: mining
        st_mining_heading: "Mining".to_string(),
        st_mode: "Mode".to_string(),
        st_custom_cpu: "CPU threads".to_string(),
        st_custom_gpu: "GPU threads".to_string(),
        st_cpu_enabled: "CPU mining".to_string(),
        st_gpu_enabled: "GPU mining".to_string(),
        st_gpu_devices: "GPU devices".to_string(),
        st_mine_on_start: "Mine on app start".to_string(),
        st_mode_locked: "Mode change in progress".to_string(),

        // Settings: pools
        st_pools_heading: "Pools".to_string(),
        st_pool_cpu: "CPU pool".to_string(),
        st_pool_gpu: "GPU pool".to_string(),
        st_pool_no_stats: "No stats yet".to_string(),
        st_pool_accepted: "Accepted shares".to_string(),
        st_pool_unpaid: "Unpaid".to_string(),
        st_pool_min_payout: "Min payout".to_string(),
        st_pool_port: "p2pool stats port".to_string(),
        st_pool_port_fetch: "Fetch".to_string(),

        // Settings: connections
        st_conn_heading: "Connections".to_string(),
        st_tor_control_port: "Tor control port".to_string(),
        st_tor_use_bridges: "Use bridges".to_string(),
        st_tor_bridges: "Bridges (one per line)".to_string(),
        st_tor_fetch_bridges: "Fetch bridges".to_string(),
        st_tor_load: "Load".to_string(),
        st_tor_save: "Apply".to_string(),
        st_peers_heading: "Connected peers".to_string(),
        st_peers_refresh: "Refresh".to_string(),
        st_peers_empty: "No peers reported.".to_string(),

        // Settings: security
        st_security_heading: "Security".to_string(),
        st_pin_locked: "Wallet PIN is set".to_string(),
        st_pin_unlocked: "No wallet PIN".to_string(),
        st_pin_new: "New PIN".to_string(),
        st_pin_confirm: "Confirm PIN".to_string(),
        st_pin_create: "Create PIN".to_string(),
        st_pin_mismatch: "PINs do not match".to_string(),

        // Settings: general
        st_general_heading: "General".to_string(),
        st_open_logs: "Open log directory".to_string(),
        st_feedback_heading: "Feedback".to_string(),
        st_feedback_hint: "Tell us what broke or what you want".to_string(),
        st_feedback_include_logs: "Include logs".to_string(),
        st_feedback_send: "Send".to_string(),
        st_feedback_sent: "Feedback sent. Thank you!".to_string(),

        // Settings: tapplets
        st_tapplets_heading: "Tapplets".to_string(),
        st_tapplets_empty: "No tapplets installed.".to_string(),
        st_tapplet_launch: "Launch".to_string(),
        st_tapplet_upload: "Upload WASM".to_string(),
        st_tapplet_pick_wasm: "Pick a .wasm file".to_string(),

        // Shared
        label_error_prefix: "Error".to_string(),
        label_blocks: "blocks".to_string(),
        label_close: "Close".to_string(),
    }
});
