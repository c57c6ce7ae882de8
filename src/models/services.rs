use serde::{Deserialize, Serialize};

/// Tor transport settings, round-tripped through `get_tor_config` /
/// `set_tor_config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TorConfig {
    pub control_port: u16,
    pub use_bridges: bool,
    pub bridges: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirdropStatus {
    pub logged_in: bool,
    pub gems: u64,
    pub referral_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TappletInfo {
    pub tapplet_id: u64,
    pub display_name: String,
    pub version: String,
}
