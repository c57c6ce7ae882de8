mod devices;
mod extras;
mod metrics;
mod node;
mod pools;
mod setup;
mod wallet;

pub use devices::DevicesStore;
pub use extras::{AirdropStore, SecurityStore, TappletsStore};
pub use metrics::{HashSample, MetricsStore};
pub use node::NodeStore;
pub use pools::PoolsStore;
pub use setup::SetupStore;
pub use wallet::WalletStore;

use crate::bridge::BackendEvent;

/// Every live-status store in one clone-friendly bundle. One clone lives on
/// the bridge thread, one in the app.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub metrics: MetricsStore,
    pub node: NodeStore,
    pub wallet: WalletStore,
    pub pools: PoolsStore,
    pub devices: DevicesStore,
    pub setup: SetupStore,
    pub airdrop: AirdropStore,
    pub tapplets: TappletsStore,
    pub security: SecurityStore,
}

impl Stores {
    /// Route one decoded event to its store. `NewBlockHeight` is handled by
    /// the block watcher on the UI side, not stored here.
    pub fn apply(&self, event: &BackendEvent) {
        match event {
            BackendEvent::CpuMining(status) => self.metrics.apply_cpu(status.clone()),
            BackendEvent::GpuMining(status) => self.metrics.apply_gpu(status.clone()),
            BackendEvent::BaseNode(status) => self.node.apply_base_node(status.clone()),
            BackendEvent::WalletBalance(balance) => self.wallet.apply_balance(balance.clone()),
            BackendEvent::WalletHistory(history) => self.wallet.replace_history(history.clone()),
            BackendEvent::CpuPoolStats(status) => self.pools.apply_cpu(status.clone()),
            BackendEvent::GpuPoolStats(status) => self.pools.apply_gpu(status.clone()),
            BackendEvent::NewBlockHeight(_) => {}
            BackendEvent::ConnectedPeers(peers) => self.node.replace_peers(peers.clone()),
            BackendEvent::Network(status) => self.node.apply_network(status.clone()),
            BackendEvent::DetectedDevices(devices) => {
                self.devices.replace_detected(devices.clone())
            }
            BackendEvent::SetupProgress(progress) => self.setup.apply(progress.clone()),
            BackendEvent::SetupFinished => self.setup.mark_finished(),
            BackendEvent::Airdrop(status) => self.airdrop.apply(status.clone()),
            BackendEvent::Tapplets(tapplets) => self.tapplets.replace(tapplets.clone()),
            BackendEvent::PinLocked(locked) => self.security.set_pin_locked(*locked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CpuMinerStatus;

    #[test]
    fn events_land_in_their_store() {
        let stores = Stores::default();

        stores.apply(&BackendEvent::CpuMining(CpuMinerStatus {
            is_mining: true,
            hash_rate: -3.5,
            ..Default::default()
        }));
        stores.apply(&BackendEvent::PinLocked(true));
        stores.apply(&BackendEvent::NewBlockHeight(10));

        assert!(stores.metrics.any_mining());
        assert_eq!(stores.metrics.cpu().hash_rate, -3.5);
        assert!(stores.security.is_pin_locked());
    }
}
