mod connections;
mod general;
mod mining;
mod pools;
mod security;
mod tapplets;
mod window;

use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::bridge::BridgeError;
use crate::models::TorConfig;

/// Which settings page is showing. Persisted so the window reopens where
/// the user left off.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum SettingsSection {
    #[default]
    Mining,
    Pools,
    Connections,
    Security,
    General,
    Tapplets,
}

/// Frame-to-frame state of the settings window: edit buffers plus any
/// one-shot daemon calls still in flight.
#[derive(Default)]
pub struct SettingsUi {
    pub open: bool,

    // In-flight calls, polled each frame while their section is visible.
    pub apply: Option<Promise<Result<(), BridgeError>>>,
    pub stats_port: Option<Promise<Result<u16, BridgeError>>>,
    pub tor_fetch: Option<Promise<Result<TorConfig, BridgeError>>>,
    pub tor_bridges_fetch: Option<Promise<Result<Vec<String>, BridgeError>>>,
    pub peers_refresh: Option<Promise<Result<Vec<String>, BridgeError>>>,
    pub pin_save: Option<Promise<Result<(), BridgeError>>>,
    pub feedback_send: Option<Promise<Result<(), BridgeError>>>,
    pub log_open: Option<Promise<Result<(), BridgeError>>>,
    pub tapplet_launch: Option<Promise<Result<String, BridgeError>>>,
    pub wasm_upload: Option<Promise<Result<(), BridgeError>>>,

    pub stats_port_value: Option<u16>,
    pub tor_loaded: bool,
    pub tor_port_text: String,
    pub tor_use_bridges: bool,
    pub tor_bridges_text: String,
    pub pin_entry: String,
    pub pin_confirm: String,
    pub feedback_text: String,
    pub feedback_include_logs: bool,
    pub feedback_sent: bool,
    pub tapplet_addr: Option<String>,
    pub error: Option<String>,
}

impl SettingsUi {
    fn set_tor_fields(&mut self, config: &TorConfig) {
        self.tor_port_text = config.control_port.to_string();
        self.tor_use_bridges = config.use_bridges;
        self.tor_bridges_text = config.bridges.join("\n");
    }
}

/// Move a finished call's value out of its slot. Pending calls stay put;
/// failures land in `error`.
fn poll_value<T: Send>(
    slot: &mut Option<Promise<Result<T, BridgeError>>>,
    error: &mut Option<String>,
) -> Option<T> {
    let promise = slot.take()?;
    match promise.try_take() {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            *error = Some(e.to_string());
            None
        }
        Err(pending) => {
            *slot = Some(pending);
            None
        }
    }
}

fn poll_unit(
    slot: &mut Option<Promise<Result<(), BridgeError>>>,
    error: &mut Option<String>,
) -> bool {
    poll_value(slot, error).is_some()
}
