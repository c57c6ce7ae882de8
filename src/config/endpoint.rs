use std::time::Duration;

/// Socket reconnect behaviour for the daemon link.
pub struct WsConfig {
    pub default_host: &'static str,
    pub default_port: u16,
    pub initial_reconnect_delay_sec: u64,
    pub max_reconnect_delay_sec: u64,
}

/// Per-call limits for invoke round-trips.
pub struct InvokeConfig {
    /// One reply must land within this window or the call fails.
    pub timeout: Duration,
}

pub struct DaemonConfig {
    pub ws: WsConfig,
    pub invoke: InvokeConfig,
}

pub const DAEMON: DaemonConfig = DaemonConfig {
    ws: WsConfig {
        default_host: "127.0.0.1",
        default_port: 9925,
        initial_reconnect_delay_sec: 1,
        max_reconnect_delay_sec: 30,
    },
    invoke: InvokeConfig {
        timeout: Duration::from_secs(15),
    },
};

pub fn daemon_url(host: &str, port: u16) -> String {
    format!("ws://{}:{}", host, port)
}
