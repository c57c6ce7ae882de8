use std::collections::HashMap;
use std::sync::mpsc::{Receiver as StdReceiver, Sender as StdSender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::sleep;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::bridge::handle::PendingInvoke;
use crate::bridge::{
    BackendEvent, BridgeError, BridgeHandle, InboundFrame, InvokeFrame, ReplyFrame, UiMessage,
};
use crate::config::DAEMON;
use crate::stores::Stores;

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    Connected,
    Connecting,
    #[default]
    Disconnected,
}

/// Shared connection indicator, written by the bridge thread and read by
/// the UI every frame.
#[derive(Clone)]
pub struct LinkState {
    inner: Arc<Mutex<LinkStatus>>,
}

impl Default for LinkState {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(LinkStatus::Disconnected)),
        }
    }
}

impl LinkState {
    pub fn get(&self) -> LinkStatus {
        *self.inner.lock().unwrap()
    }

    pub fn is_connected(&self) -> bool {
        self.get() == LinkStatus::Connected
    }

    fn set(&self, status: LinkStatus) {
        let mut current = self.inner.lock().unwrap();
        if *current != status {
            #[cfg(debug_assertions)]
            if DF.log_link_status {
                log::info!("daemon link: {:?} -> {:?}", *current, status);
            }
            *current = status;
        }
    }
}

struct PendingEntry {
    method: &'static str,
    reply: oneshot::Sender<Result<Value, BridgeError>>,
}

/// Calls on the wire waiting for their reply frame, keyed by id.
#[derive(Default)]
struct PendingInvokes {
    next_id: u64,
    in_flight: HashMap<u64, PendingEntry>,
}

impl PendingInvokes {
    fn register(
        &mut self,
        method: &'static str,
        reply: oneshot::Sender<Result<Value, BridgeError>>,
    ) -> u64 {
        self.next_id += 1;
        self.in_flight.insert(self.next_id, PendingEntry { method, reply });
        self.next_id
    }

    fn complete(&mut self, frame: ReplyFrame) {
        let Some(entry) = self.in_flight.remove(&frame.id) else {
            log::warn!("reply for unknown invoke id {}", frame.id);
            return;
        };
        let outcome = match frame.error {
            Some(reason) => Err(BridgeError::Rejected {
                method: entry.method,
                reason,
            }),
            None => Ok(frame.result.unwrap_or(Value::Null)),
        };
        let _ = entry.reply.send(outcome);
    }

    /// The link went down; every caller still waiting gets told.
    fn fail_all(&mut self) {
        for (_, entry) in self.in_flight.drain() {
            let _ = entry.reply.send(Err(BridgeError::Disconnected));
        }
    }
}

enum SessionEnd {
    Closed,
    Shutdown,
    HandleDropped,
}

/// Everything the UI thread keeps of the bridge. Dropping it signals the
/// background thread to wind down.
pub struct BridgeRuntime {
    pub handle: BridgeHandle,
    pub link: LinkState,
    pub ui_rx: StdReceiver<UiMessage>,
    pub ui_tx: StdSender<UiMessage>,
    rt: tokio::runtime::Handle,
    shutdown: watch::Sender<bool>,
}

impl BridgeRuntime {
    pub fn rt(&self) -> &tokio::runtime::Handle {
        &self.rt
    }
}

impl Drop for BridgeRuntime {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Stand up the daemon link on its own thread with its own runtime. The
/// returned [`BridgeRuntime`] is the UI side of it.
pub fn spawn_bridge(url: String, stores: Stores) -> BridgeRuntime {
    let (invoke_tx, invoke_rx) = mpsc::unbounded_channel();
    let (ui_tx, ui_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let handle = BridgeHandle::new(invoke_tx);
    let link = LinkState::default();

    let rt = Runtime::new().expect("Failed to create runtime");
    let rt_handle = rt.handle().clone();

    {
        let handle = handle.clone();
        let link = link.clone();
        let ui_tx = ui_tx.clone();
        thread::spawn(move || {
            rt.block_on(run_bridge(
                url,
                link,
                stores,
                handle,
                ui_tx,
                invoke_rx,
                shutdown_rx,
            ));
        });
    }

    BridgeRuntime {
        handle,
        link,
        ui_rx,
        ui_tx,
        rt: rt_handle,
        shutdown: shutdown_tx,
    }
}

async fn run_bridge(
    url: String,
    link: LinkState,
    stores: Stores,
    handle: BridgeHandle,
    ui_tx: StdSender<UiMessage>,
    mut invoke_rx: mpsc::UnboundedReceiver<PendingInvoke>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut pending = PendingInvokes::default();
    let mut reconnect_delay = DAEMON.ws.initial_reconnect_delay_sec;

    loop {
        link.set(LinkStatus::Connecting);

        #[cfg(debug_assertions)]
        if DF.log_link_status {
            log::info!("Attempting connection to {}...", url);
        }

        match run_session(
            &url,
            &link,
            &stores,
            &handle,
            &ui_tx,
            &mut invoke_rx,
            &mut pending,
            &mut shutdown,
        )
        .await
        {
            Ok(SessionEnd::Shutdown) | Ok(SessionEnd::HandleDropped) => {
                link.set(LinkStatus::Disconnected);
                pending.fail_all();
                return;
            }
            Ok(SessionEnd::Closed) => {
                log::warn!("Daemon link closed normally. Reconnecting...");
                reconnect_delay = DAEMON.ws.initial_reconnect_delay_sec;
            }
            Err(e) => {
                log::error!(
                    "Daemon link failed: {}. Retrying in {}s...",
                    e,
                    reconnect_delay
                );
            }
        }

        link.set(LinkStatus::Disconnected);
        pending.fail_all();

        tokio::select! {
            _ = sleep(Duration::from_secs(reconnect_delay)) => {}
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    return;
                }
            }
        }
        reconnect_delay = (reconnect_delay * 2).min(DAEMON.ws.max_reconnect_delay_sec);
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_session(
    url: &str,
    link: &LinkState,
    stores: &Stores,
    handle: &BridgeHandle,
    ui_tx: &StdSender<UiMessage>,
    invoke_rx: &mut mpsc::UnboundedReceiver<PendingInvoke>,
    pending: &mut PendingInvokes,
    shutdown: &mut watch::Receiver<bool>,
) -> Result<SessionEnd, BridgeError> {
    let (ws_stream, _) = connect_async(url).await?;
    link.set(LinkStatus::Connected);

    // Re-pull the slow-moving state every time the link comes back.
    tokio::spawn(warm_up(handle.clone(), stores.clone()));

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            msg = read.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => handle_text(&text, stores, ui_tx, pending),
                    Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => {}
                    Some(Ok(Message::Close(_))) | None => return Ok(SessionEnd::Closed),
                    Some(Err(e)) => {
                        log::error!("WebSocket error: {}", e);
                        return Err(e.into());
                    }
                    Some(Ok(_)) => {}
                }
            }
            queued = invoke_rx.recv() => {
                let Some(call) = queued else {
                    return Ok(SessionEnd::HandleDropped);
                };
                let id = pending.register(call.method, call.reply);
                let frame = InvokeFrame { id, method: call.method, params: call.params };
                let json = serde_json::to_string(&frame)?;
                #[cfg(debug_assertions)]
                if DF.log_bridge_frames {
                    log::info!("-> {}", json);
                }
                write.send(Message::Text(json.into())).await?;
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    return Ok(SessionEnd::Shutdown);
                }
            }
        }
    }
}

fn handle_text(
    text: &str,
    stores: &Stores,
    ui_tx: &StdSender<UiMessage>,
    pending: &mut PendingInvokes,
) {
    #[cfg(debug_assertions)]
    if DF.log_bridge_frames {
        log::info!("<- {}", text);
    }
    match serde_json::from_str::<InboundFrame>(text) {
        Ok(InboundFrame::Reply(reply)) => pending.complete(reply),
        Ok(InboundFrame::Event(frame)) => {
            #[cfg(debug_assertions)]
            if DF.log_events {
                log::info!("event {}", frame.event_type);
            }
            match BackendEvent::parse(frame) {
                Ok(event) => {
                    stores.apply(&event);
                    let _ = ui_tx.send(UiMessage::Event(event));
                }
                Err(e) => log::warn!("dropping daemon event: {}", e),
            }
        }
        Err(_) => log::warn!("⚠️ Failed to parse WebSocket JSON message"),
    }
}

/// One-shot pulls that events alone never deliver.
async fn warm_up(handle: BridgeHandle, stores: Stores) {
    match handle.get_max_consumption_levels().await {
        Ok(levels) => stores.devices.set_max_levels(levels),
        Err(e) => log::warn!("warm-up: consumption levels unavailable: {}", e),
    }
    match handle.is_pin_locked().await {
        Ok(locked) => stores.security.set_pin_locked(locked),
        Err(e) => log::warn!("warm-up: pin state unavailable: {}", e),
    }
    match handle.refresh_wallet_history().await {
        Ok(history) => stores.wallet.replace_history(history),
        Err(e) => log::warn!("warm-up: wallet history unavailable: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completing_a_reply_hands_back_the_result() {
        let mut pending = PendingInvokes::default();
        let (tx, mut rx) = oneshot::channel();
        let id = pending.register("is_pin_locked", tx);

        pending.complete(ReplyFrame {
            id,
            result: Some(json!(true)),
            error: None,
        });

        let outcome = rx.try_recv().unwrap();
        assert_eq!(outcome.unwrap(), json!(true));
    }

    #[test]
    fn error_reply_becomes_a_rejection_naming_the_method() {
        let mut pending = PendingInvokes::default();
        let (tx, mut rx) = oneshot::channel();
        let id = pending.register("start_mining", tx);

        pending.complete(ReplyFrame {
            id,
            result: None,
            error: Some("busy".to_string()),
        });

        match rx.try_recv().unwrap() {
            Err(BridgeError::Rejected { method, reason }) => {
                assert_eq!(method, "start_mining");
                assert_eq!(reason, "busy");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn fail_all_disconnects_every_waiter() {
        let mut pending = PendingInvokes::default();
        let (tx_a, mut rx_a) = oneshot::channel();
        let (tx_b, mut rx_b) = oneshot::channel();
        pending.register("stop_mining", tx_a);
        pending.register("set_mode", tx_b);

        pending.fail_all();

        assert!(matches!(
            rx_a.try_recv().unwrap(),
            Err(BridgeError::Disconnected)
        ));
        assert!(matches!(
            rx_b.try_recv().unwrap(),
            Err(BridgeError::Disconnected)
        ));
        assert!(pending.in_flight.is_empty());
    }

    #[test]
    fn unknown_reply_id_is_ignored() {
        let mut pending = PendingInvokes::default();
        pending.complete(ReplyFrame {
            id: 99,
            result: Some(json!(null)),
            error: None,
        });
        assert!(pending.in_flight.is_empty());
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut pending = PendingInvokes::default();
        let (tx_a, _rx_a) = oneshot::channel();
        let (tx_b, _rx_b) = oneshot::channel();
        let a = pending.register("a", tx_a);
        let b = pending.register("b", tx_b);
        assert!(b > a);
    }
}
