use serde::{Deserialize, Serialize};

/// Pool link state reported inside the CPU miner status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolConnection {
    pub is_connected: bool,
}

/// Status push for the CPU miner. Values are stored exactly as received;
/// the daemon owns validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuMinerStatus {
    pub is_mining: bool,
    pub hash_rate: f64,
    /// Projected earnings per day, in micro units.
    pub estimated_earnings: u64,
    pub connection: PoolConnection,
    #[serde(default)]
    pub pool_status: Option<PoolStatus>,
}

/// Status push for the GPU miner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuMinerStatus {
    pub is_mining: bool,
    pub hash_rate: f64,
    pub estimated_earnings: u64,
    pub is_available: bool,
}

/// Per-pool accounting snapshot, all amounts in micro units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolStatus {
    pub accepted_shares: u64,
    pub unpaid: u64,
    pub balance: u64,
    pub min_payout: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseNodeStatus {
    pub block_height: u64,
    pub block_time: u64,
    pub is_synced: bool,
    pub sha_network_hashrate: u64,
    pub randomx_network_hashrate: u64,
}

/// Result of the daemon's periodic connectivity probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatus {
    pub download_speed: f64,
    pub upload_speed: f64,
    pub latency: f64,
    pub is_too_low: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuDeviceInfo {
    pub device_index: u32,
    pub device_name: String,
}

/// One line of daemon-side setup progress, keyed by phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupProgress {
    pub phase: String,
    pub progress: f64,
}
