use std::sync::{Arc, RwLock};

use crate::models::PoolStatus;

#[derive(Debug, Default)]
struct PoolsInner {
    cpu_pool: Option<PoolStatus>,
    gpu_pool: Option<PoolStatus>,
}

/// Per-pool share and payout stats. `None` until the first update lands.
#[derive(Debug, Clone, Default)]
pub struct PoolsStore {
    inner: Arc<RwLock<PoolsInner>>,
}

impl PoolsStore {
    pub fn apply_cpu(&self, status: PoolStatus) {
        self.inner.write().unwrap().cpu_pool = Some(status);
    }

    pub fn apply_gpu(&self, status: PoolStatus) {
        self.inner.write().unwrap().gpu_pool = Some(status);
    }

    pub fn cpu_pool(&self) -> Option<PoolStatus> {
        self.inner.read().unwrap().cpu_pool.clone()
    }

    pub fn gpu_pool(&self) -> Option<PoolStatus> {
        self.inner.read().unwrap().gpu_pool.clone()
    }

    /// Unpaid balance summed across whichever pools have reported.
    pub fn total_unpaid(&self) -> u64 {
        let inner = self.inner.read().unwrap();
        inner.cpu_pool.as_ref().map_or(0, |p| p.unpaid)
            + inner.gpu_pool.as_ref().map_or(0, |p| p.unpaid)
    }
}
