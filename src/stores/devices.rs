use std::sync::{Arc, RwLock};

use crate::models::{GpuDeviceInfo, MaxConsumptionLevels};

#[derive(Debug, Default)]
struct DevicesInner {
    detected: Vec<GpuDeviceInfo>,
    max_levels: Option<MaxConsumptionLevels>,
    excluded: Vec<u32>,
}

/// Detected GPUs, machine consumption ceilings and the user's exclusions.
#[derive(Debug, Clone, Default)]
pub struct DevicesStore {
    inner: Arc<RwLock<DevicesInner>>,
}

impl DevicesStore {
    pub fn replace_detected(&self, devices: Vec<GpuDeviceInfo>) {
        self.inner.write().unwrap().detected = devices;
    }

    pub fn set_max_levels(&self, levels: MaxConsumptionLevels) {
        self.inner.write().unwrap().max_levels = Some(levels);
    }

    pub fn toggle_excluded(&self, device_index: u32) -> Vec<u32> {
        let mut inner = self.inner.write().unwrap();
        if let Some(pos) = inner.excluded.iter().position(|&i| i == device_index) {
            inner.excluded.remove(pos);
        } else {
            inner.excluded.push(device_index);
        }
        inner.excluded.clone()
    }

    pub fn detected(&self) -> Vec<GpuDeviceInfo> {
        self.inner.read().unwrap().detected.clone()
    }

    pub fn max_levels(&self) -> Option<MaxConsumptionLevels> {
        self.inner.read().unwrap().max_levels.clone()
    }

    pub fn is_excluded(&self, device_index: u32) -> bool {
        self.inner.read().unwrap().excluded.contains(&device_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let store = DevicesStore::default();
        assert_eq!(store.toggle_excluded(1), vec![1]);
        assert!(store.is_excluded(1));
        assert!(store.toggle_excluded(1).is_empty());
        assert!(!store.is_excluded(1));
    }
}
