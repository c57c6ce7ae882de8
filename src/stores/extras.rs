use std::sync::{Arc, RwLock};

use crate::models::{AirdropStatus, TappletInfo};

/// Airdrop campaign state mirrored from the daemon.
#[derive(Debug, Clone, Default)]
pub struct AirdropStore {
    inner: Arc<RwLock<AirdropStatus>>,
}

impl AirdropStore {
    pub fn apply(&self, status: AirdropStatus) {
        *self.inner.write().unwrap() = status;
    }

    pub fn get(&self) -> AirdropStatus {
        self.inner.read().unwrap().clone()
    }
}

/// Installed tapplets as last reported.
#[derive(Debug, Clone, Default)]
pub struct TappletsStore {
    inner: Arc<RwLock<Vec<TappletInfo>>>,
}

impl TappletsStore {
    pub fn replace(&self, tapplets: Vec<TappletInfo>) {
        *self.inner.write().unwrap() = tapplets;
    }

    pub fn list(&self) -> Vec<TappletInfo> {
        self.inner.read().unwrap().clone()
    }
}

/// Whether the wallet PIN currently gates seed-phrase access.
#[derive(Debug, Clone, Default)]
pub struct SecurityStore {
    pin_locked: Arc<RwLock<bool>>,
}

impl SecurityStore {
    pub fn set_pin_locked(&self, locked: bool) {
        *self.pin_locked.write().unwrap() = locked;
    }

    pub fn is_pin_locked(&self) -> bool {
        *self.pin_locked.read().unwrap()
    }
}
