use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Mining power profile. `Custom` is driven by the per-resource usage levels
/// below; the daemon maps the other two to its own presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MiningMode {
    #[default]
    Eco,
    Ludicrous,
    Custom,
}

/// Argument object for the `set_mode` command. Field names are what the
/// daemon expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeChangeRequest {
    pub mode: MiningMode,
    #[serde(rename = "customCpuUsage", skip_serializing_if = "Option::is_none")]
    pub custom_cpu_usage: Option<u32>,
    #[serde(rename = "customGpuUsage", skip_serializing_if = "Option::is_none")]
    pub custom_gpu_usage: Option<u32>,
}

impl ModeChangeRequest {
    pub fn preset(mode: MiningMode) -> Self {
        Self {
            mode,
            custom_cpu_usage: None,
            custom_gpu_usage: None,
        }
    }
}

/// Upper bounds for the custom power sliders, reported by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaxConsumptionLevels {
    pub max_cpu_threads: u32,
    pub max_gpus_threads: Vec<GpuThreads>,
}

impl MaxConsumptionLevels {
    pub fn max_gpu_threads(&self) -> u32 {
        self.max_gpus_threads
            .iter()
            .map(|g| g.max_gpu_threads)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuThreads {
    pub gpu_name: String,
    pub max_gpu_threads: u32,
}
