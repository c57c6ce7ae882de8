use std::sync::{Arc, RwLock};

use crate::models::{BaseNodeStatus, NetworkStatus};

#[derive(Debug, Default)]
struct NodeInner {
    base_node: BaseNodeStatus,
    network: NetworkStatus,
    peers: Vec<String>,
}

/// Base-node sync state, network health and connected peers.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    inner: Arc<RwLock<NodeInner>>,
}

impl NodeStore {
    pub fn apply_base_node(&self, status: BaseNodeStatus) {
        self.inner.write().unwrap().base_node = status;
    }

    pub fn apply_network(&self, status: NetworkStatus) {
        self.inner.write().unwrap().network = status;
    }

    pub fn replace_peers(&self, peers: Vec<String>) {
        self.inner.write().unwrap().peers = peers;
    }

    pub fn base_node(&self) -> BaseNodeStatus {
        self.inner.read().unwrap().base_node.clone()
    }

    pub fn network(&self) -> NetworkStatus {
        self.inner.read().unwrap().network.clone()
    }

    pub fn peers(&self) -> Vec<String> {
        self.inner.read().unwrap().peers.clone()
    }

    pub fn peer_count(&self) -> usize {
        self.inner.read().unwrap().peers.len()
    }
}
