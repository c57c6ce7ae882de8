mod client;
mod error;
mod handle;
mod messages;
mod protocol;

pub use client::{BridgeRuntime, LinkState, LinkStatus, spawn_bridge};
pub use error::BridgeError;
pub use handle::{BridgeHandle, MinerControlApi};
pub use messages::UiMessage;
pub use protocol::{BackendEvent, EventFrame, InboundFrame, InvokeFrame, ReplyFrame};
