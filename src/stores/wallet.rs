use std::sync::{Arc, RwLock};

use crate::models::{TransactionInfo, WalletBalance};

#[derive(Debug, Default)]
struct WalletInner {
    balance: WalletBalance,
    history: Vec<TransactionInfo>,
}

/// Wallet balance plus the transaction history the daemon last sent.
#[derive(Debug, Clone, Default)]
pub struct WalletStore {
    inner: Arc<RwLock<WalletInner>>,
}

impl WalletStore {
    pub fn apply_balance(&self, balance: WalletBalance) {
        self.inner.write().unwrap().balance = balance;
    }

    pub fn replace_history(&self, history: Vec<TransactionInfo>) {
        self.inner.write().unwrap().history = history;
    }

    pub fn balance(&self) -> WalletBalance {
        self.inner.read().unwrap().balance.clone()
    }

    pub fn history(&self) -> Vec<TransactionInfo> {
        self.inner.read().unwrap().history.clone()
    }

    /// The coinbase credited for `height`, if the history has one.
    pub fn coinbase_for(&self, height: u64) -> Option<TransactionInfo> {
        self.inner
            .read()
            .unwrap()
            .history
            .iter()
            .find(|tx| tx.is_coinbase_for(height))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxDirection;

    fn tx(tx_id: u64, direction: TxDirection, mined_in: Option<u64>) -> TransactionInfo {
        TransactionInfo {
            tx_id,
            amount: 1_000_000,
            direction,
            message: String::new(),
            timestamp: 0,
            mined_in_block_height: mined_in,
        }
    }

    #[test]
    fn coinbase_lookup_matches_height_and_direction() {
        let store = WalletStore::default();
        store.replace_history(vec![
            tx(1, TxDirection::Outbound, Some(50)),
            tx(2, TxDirection::Inbound, Some(50)),
            tx(3, TxDirection::Inbound, None),
        ]);

        assert_eq!(store.coinbase_for(50).map(|t| t.tx_id), Some(2));
        assert!(store.coinbase_for(51).is_none());
    }
}
