use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bridge::BridgeError;
use crate::models::{
    AirdropStatus, BaseNodeStatus, CpuMinerStatus, GpuDeviceInfo, GpuMinerStatus, NetworkStatus,
    PoolStatus, SetupProgress, TappletInfo, TransactionInfo, WalletBalance,
};

/// Request half of the wire format. Every call carries a client-chosen id
/// the daemon echoes back on the matching reply.
#[derive(Debug, Serialize)]
pub struct InvokeFrame<'a> {
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

/// Reply half. Exactly one of `result` / `error` is set.
#[derive(Debug, Deserialize)]
pub struct ReplyFrame {
    pub id: u64,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Unsolicited push from the daemon.
#[derive(Debug, Deserialize)]
pub struct EventFrame {
    pub event_type: String,
    #[serde(default)]
    pub payload: Value,
}

/// Anything arriving on the socket is one of these two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InboundFrame {
    Reply(ReplyFrame),
    Event(EventFrame),
}

#[derive(Debug, Deserialize)]
struct HeightPayload {
    block_height: u64,
}

#[derive(Debug, Deserialize)]
struct DevicesPayload {
    devices: Vec<GpuDeviceInfo>,
}

#[derive(Debug, Deserialize)]
struct PinLockedPayload {
    is_locked: bool,
}

/// A decoded daemon event, one variant per `event_type` the daemon sends.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    CpuMining(CpuMinerStatus),
    GpuMining(GpuMinerStatus),
    BaseNode(BaseNodeStatus),
    WalletBalance(WalletBalance),
    WalletHistory(Vec<TransactionInfo>),
    CpuPoolStats(PoolStatus),
    GpuPoolStats(PoolStatus),
    NewBlockHeight(u64),
    ConnectedPeers(Vec<String>),
    Network(NetworkStatus),
    DetectedDevices(Vec<GpuDeviceInfo>),
    SetupProgress(SetupProgress),
    SetupFinished,
    Airdrop(AirdropStatus),
    Tapplets(Vec<TappletInfo>),
    PinLocked(bool),
}

impl BackendEvent {
    /// Decode a raw event frame. Unknown event types come back as
    /// [`BridgeError::BadFrame`] and the caller decides whether to drop or
    /// log them.
    pub fn parse(frame: EventFrame) -> Result<Self, BridgeError> {
        let EventFrame {
            event_type,
            payload,
        } = frame;

        let decoded = match event_type.as_str() {
            "CpuMiningUpdate" => Self::CpuMining(serde_json::from_value(payload)?),
            "GpuMiningUpdate" => Self::GpuMining(serde_json::from_value(payload)?),
            "BaseNodeUpdate" => Self::BaseNode(serde_json::from_value(payload)?),
            "WalletBalanceUpdate" => Self::WalletBalance(serde_json::from_value(payload)?),
            "WalletHistoryUpdate" => Self::WalletHistory(serde_json::from_value(payload)?),
            "CpuPoolStatsUpdate" => Self::CpuPoolStats(serde_json::from_value(payload)?),
            "GpuPoolStatsUpdate" => Self::GpuPoolStats(serde_json::from_value(payload)?),
            "NewBlockHeight" => {
                let p: HeightPayload = serde_json::from_value(payload)?;
                Self::NewBlockHeight(p.block_height)
            }
            "ConnectedPeersUpdate" => Self::ConnectedPeers(serde_json::from_value(payload)?),
            "NetworkStatus" => Self::Network(serde_json::from_value(payload)?),
            "DetectedDevices" => {
                let p: DevicesPayload = serde_json::from_value(payload)?;
                Self::DetectedDevices(p.devices)
            }
            "SetupProgressUpdate" => Self::SetupProgress(serde_json::from_value(payload)?),
            "InitialSetupFinished" => Self::SetupFinished,
            "AirdropUpdate" => Self::Airdrop(serde_json::from_value(payload)?),
            "TappletsUpdate" => Self::Tapplets(serde_json::from_value(payload)?),
            "PinLockedUpdate" => {
                let p: PinLockedPayload = serde_json::from_value(payload)?;
                Self::PinLocked(p.is_locked)
            }
            other => return Err(BridgeError::BadFrame(format!("unknown event_type {other}"))),
        };

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(event_type: &str, payload: Value) -> EventFrame {
        EventFrame {
            event_type: event_type.to_string(),
            payload,
        }
    }

    #[test]
    fn decodes_cpu_mining_update() {
        let frame = event(
            "CpuMiningUpdate",
            json!({
                "is_mining": true,
                "hash_rate": 1532.5,
                "estimated_earnings": 42_000_000u64,
                "connection": { "is_connected": true }
            }),
        );

        let BackendEvent::CpuMining(status) = BackendEvent::parse(frame).unwrap() else {
            panic!("wrong variant");
        };
        assert!(status.is_mining);
        assert_eq!(status.hash_rate, 1532.5);
        assert!(status.connection.is_connected);
    }

    #[test]
    fn negative_hash_rate_passes_through_untouched() {
        let frame = event(
            "GpuMiningUpdate",
            json!({
                "is_mining": true,
                "hash_rate": -1.0,
                "estimated_earnings": 0,
                "is_available": true
            }),
        );

        let BackendEvent::GpuMining(status) = BackendEvent::parse(frame).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(status.hash_rate, -1.0);
    }

    #[test]
    fn decodes_new_block_height() {
        let frame = event("NewBlockHeight", json!({ "block_height": 123456 }));
        let BackendEvent::NewBlockHeight(h) = BackendEvent::parse(frame).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(h, 123456);
    }

    #[test]
    fn decodes_pin_locked_update() {
        let frame = event("PinLockedUpdate", json!({ "is_locked": true }));
        let BackendEvent::PinLocked(locked) = BackendEvent::parse(frame).unwrap() else {
            panic!("wrong variant");
        };
        assert!(locked);
    }

    #[test]
    fn setup_finished_has_no_payload() {
        let frame = event("InitialSetupFinished", Value::Null);
        assert!(matches!(
            BackendEvent::parse(frame).unwrap(),
            BackendEvent::SetupFinished
        ));
    }

    #[test]
    fn unknown_event_type_is_a_bad_frame() {
        let frame = event("SomethingNew", json!({}));
        assert!(matches!(
            BackendEvent::parse(frame),
            Err(BridgeError::BadFrame(_))
        ));
    }

    #[test]
    fn inbound_frame_distinguishes_reply_from_event() {
        let reply: InboundFrame =
            serde_json::from_str(r#"{"id": 7, "result": {"ok": true}}"#).unwrap();
        assert!(matches!(reply, InboundFrame::Reply(_)));

        let ev: InboundFrame =
            serde_json::from_str(r#"{"event_type": "NewBlockHeight", "payload": {"block_height": 1}}"#)
                .unwrap();
        assert!(matches!(ev, InboundFrame::Event(_)));
    }
}
