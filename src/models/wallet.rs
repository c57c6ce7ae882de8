use serde::{Deserialize, Serialize};

/// Wallet balance breakdown, all amounts in micro units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub available_balance: u64,
    pub timelocked_balance: u64,
    pub pending_incoming_balance: u64,
    pub pending_outgoing_balance: u64,
}

impl WalletBalance {
    pub fn total(&self) -> u64 {
        self.available_balance + self.timelocked_balance + self.pending_incoming_balance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxDirection {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub tx_id: u64,
    pub amount: u64,
    pub direction: TxDirection,
    pub message: String,
    /// Seconds since the epoch.
    pub timestamp: u64,
    #[serde(default)]
    pub mined_in_block_height: Option<u64>,
}

impl TransactionInfo {
    /// A coinbase credit for the given height, i.e. a block we won.
    pub fn is_coinbase_for(&self, height: u64) -> bool {
        self.direction == TxDirection::Inbound && self.mined_in_block_height == Some(height)
    }
}
