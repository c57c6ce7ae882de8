mod control;
mod mode;
mod services;
mod status;
mod wallet;

pub use {
    control::{ControlAction, ControlOutcome, ModeChangeOutcome},
    mode::{GpuThreads, MaxConsumptionLevels, MiningMode, ModeChangeRequest},
    services::{AirdropStatus, TappletInfo, TorConfig},
    status::{
        BaseNodeStatus, CpuMinerStatus, GpuDeviceInfo, GpuMinerStatus, NetworkStatus,
        PoolConnection, PoolStatus, SetupProgress,
    },
    wallet::{TransactionInfo, TxDirection, WalletBalance},
};
