use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::config::HASH_SAMPLE_CAP;
use crate::models::{CpuMinerStatus, GpuMinerStatus};
use crate::utils::TimeUtils;

/// One point on the dashboard hash-rate chart.
#[derive(Debug, Clone, Copy)]
pub struct HashSample {
    pub at_ms: i64,
    pub cpu: f64,
    pub gpu: f64,
}

#[derive(Debug, Default)]
struct MetricsInner {
    cpu: CpuMinerStatus,
    gpu: GpuMinerStatus,
    samples: VecDeque<HashSample>,
}

impl MetricsInner {
    // Incoming numbers are stored exactly as the daemon sent them,
    // negative hash rates included. Display code decides what to show.
    fn push_sample(&mut self) {
        if self.samples.len() == HASH_SAMPLE_CAP {
            self.samples.pop_front();
        }
        self.samples.push_back(HashSample {
            at_ms: TimeUtils::local_now_as_timestamp_ms(),
            cpu: self.cpu.hash_rate,
            gpu: self.gpu.hash_rate,
        });
    }
}

/// Live CPU/GPU miner readings plus a short ring of chart samples.
#[derive(Debug, Clone, Default)]
pub struct MetricsStore {
    inner: Arc<RwLock<MetricsInner>>,
}

impl MetricsStore {
    pub fn apply_cpu(&self, status: CpuMinerStatus) {
        let mut inner = self.inner.write().unwrap();
        inner.cpu = status;
        inner.push_sample();
    }

    pub fn apply_gpu(&self, status: GpuMinerStatus) {
        let mut inner = self.inner.write().unwrap();
        inner.gpu = status;
        inner.push_sample();
    }

    pub fn cpu(&self) -> CpuMinerStatus {
        self.inner.read().unwrap().cpu.clone()
    }

    pub fn gpu(&self) -> GpuMinerStatus {
        self.inner.read().unwrap().gpu.clone()
    }

    /// Confirmed hardware truth: either resource reporting as mining.
    pub fn any_mining(&self) -> bool {
        let inner = self.inner.read().unwrap();
        inner.cpu.is_mining || inner.gpu.is_mining
    }

    pub fn total_hash_rate(&self) -> f64 {
        let inner = self.inner.read().unwrap();
        inner.cpu.hash_rate + inner.gpu.hash_rate
    }

    pub fn total_estimated_earnings(&self) -> u64 {
        let inner = self.inner.read().unwrap();
        inner.cpu.estimated_earnings + inner.gpu.estimated_earnings
    }

    pub fn samples(&self) -> Vec<HashSample> {
        self.inner.read().unwrap().samples.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_hash_rate_is_stored_verbatim() {
        let store = MetricsStore::default();
        store.apply_cpu(CpuMinerStatus {
            is_mining: true,
            hash_rate: -5.0,
            ..Default::default()
        });
        assert_eq!(store.cpu().hash_rate, -5.0);
        assert_eq!(store.total_hash_rate(), -5.0);
    }

    #[test]
    fn any_mining_covers_both_resources() {
        let store = MetricsStore::default();
        assert!(!store.any_mining());

        store.apply_gpu(GpuMinerStatus {
            is_mining: true,
            ..Default::default()
        });
        assert!(store.any_mining());
    }

    #[test]
    fn sample_ring_is_capped() {
        let store = MetricsStore::default();
        for _ in 0..(HASH_SAMPLE_CAP + 50) {
            store.apply_cpu(CpuMinerStatus::default());
        }
        assert_eq!(store.samples().len(), HASH_SAMPLE_CAP);
    }
}
