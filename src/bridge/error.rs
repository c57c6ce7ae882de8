use std::time::Duration;

/// Everything that can go wrong between the UI and the daemon.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("{method} rejected by daemon: {reason}")]
    Rejected {
        method: &'static str,
        reason: String,
    },

    #[error("daemon link is down")]
    Disconnected,

    #[error("no reply within {0:?}")]
    Timeout(Duration),

    #[error("malformed frame: {0}")]
    BadFrame(String),

    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}
