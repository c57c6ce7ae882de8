use serde_json::{Value, json};
use tokio::sync::{mpsc, oneshot};

use crate::bridge::BridgeError;
use crate::config::DAEMON;
use crate::models::{
    MaxConsumptionLevels, ModeChangeRequest, TorConfig, TransactionInfo,
};

/// One queued call waiting for the session loop to put it on the wire.
pub(crate) struct PendingInvoke {
    pub method: &'static str,
    pub params: Value,
    pub reply: oneshot::Sender<Result<Value, BridgeError>>,
}

/// Cheap-to-clone front door to the daemon. All typed commands funnel
/// through [`BridgeHandle::invoke`], which hands the call to whatever
/// session is currently live. Fire-once: no retry, one timeout per call.
#[derive(Clone)]
pub struct BridgeHandle {
    invoke_tx: mpsc::UnboundedSender<PendingInvoke>,
}

impl BridgeHandle {
    pub(crate) fn new(invoke_tx: mpsc::UnboundedSender<PendingInvoke>) -> Self {
        Self { invoke_tx }
    }

    pub async fn invoke(&self, method: &'static str, params: Value) -> Result<Value, BridgeError> {
        let (tx, rx) = oneshot::channel();
        #[cfg(debug_assertions)]
        if crate::config::DF.log_invokes {
            log::info!("invoke {} {}", method, params);
        }
        self.invoke_tx
            .send(PendingInvoke {
                method,
                params,
                reply: tx,
            })
            .map_err(|_| BridgeError::Disconnected)?;

        match tokio::time::timeout(DAEMON.invoke.timeout, rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(BridgeError::Disconnected),
            Err(_) => Err(BridgeError::Timeout(DAEMON.invoke.timeout)),
        }
    }

    async fn invoke_unit(&self, method: &'static str, params: Value) -> Result<(), BridgeError> {
        self.invoke(method, params).await.map(drop)
    }

    pub async fn set_mining_mode(&self, req: &ModeChangeRequest) -> Result<(), BridgeError> {
        self.invoke_unit("set_mode", serde_json::to_value(req)?)
            .await
    }

    pub async fn set_cpu_mining_enabled(&self, enabled: bool) -> Result<(), BridgeError> {
        self.invoke_unit("set_cpu_mining_enabled", json!({ "enabled": enabled }))
            .await
    }

    pub async fn set_gpu_mining_enabled(&self, enabled: bool) -> Result<(), BridgeError> {
        self.invoke_unit("set_gpu_mining_enabled", json!({ "enabled": enabled }))
            .await
    }

    pub async fn set_excluded_gpu_devices(&self, device_indices: &[u32]) -> Result<(), BridgeError> {
        self.invoke_unit(
            "set_excluded_gpu_devices",
            json!({ "excluded_gpu_devices": device_indices }),
        )
        .await
    }

    pub async fn set_mine_on_app_start(&self, enabled: bool) -> Result<(), BridgeError> {
        self.invoke_unit("set_mine_on_app_start", json!({ "mine_on_app_start": enabled }))
            .await
    }

    pub async fn get_max_consumption_levels(&self) -> Result<MaxConsumptionLevels, BridgeError> {
        let v = self.invoke("get_max_consumption_levels", Value::Null).await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn is_pin_locked(&self) -> Result<bool, BridgeError> {
        let v = self.invoke("is_pin_locked", Value::Null).await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn create_pin(&self, pin: &str) -> Result<(), BridgeError> {
        self.invoke_unit("create_pin", json!({ "pin": pin })).await
    }

    pub async fn open_log_dir(&self) -> Result<(), BridgeError> {
        self.invoke_unit("open_log_dir", Value::Null).await
    }

    pub async fn send_feedback(
        &self,
        feedback: &str,
        include_logs: bool,
    ) -> Result<(), BridgeError> {
        self.invoke_unit(
            "send_feedback",
            json!({ "feedback": feedback, "include_logs": include_logs }),
        )
        .await
    }

    pub async fn list_connected_peers(&self) -> Result<Vec<String>, BridgeError> {
        let v = self.invoke("list_connected_peers", Value::Null).await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn get_tor_config(&self) -> Result<TorConfig, BridgeError> {
        let v = self.invoke("get_tor_config", Value::Null).await?;
        Ok(serde_json::from_value(v)?)
    }

    /// Returns the config the daemon actually applied.
    pub async fn set_tor_config(&self, config: &TorConfig) -> Result<TorConfig, BridgeError> {
        let v = self
            .invoke("set_tor_config", serde_json::to_value(config)?)
            .await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn fetch_tor_bridges(&self) -> Result<Vec<String>, BridgeError> {
        let v = self.invoke("fetch_tor_bridges", Value::Null).await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn get_used_p2pool_stats_server_port(&self) -> Result<u16, BridgeError> {
        let v = self
            .invoke("get_used_p2pool_stats_server_port", Value::Null)
            .await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn refresh_wallet_history(&self) -> Result<Vec<TransactionInfo>, BridgeError> {
        let v = self.invoke("refresh_wallet_history", Value::Null).await?;
        Ok(serde_json::from_value(v)?)
    }

    /// Resolves to the local address the tapplet is served on.
    pub async fn launch_tapplet(&self, tapplet_id: u64) -> Result<String, BridgeError> {
        let v = self
            .invoke("launch_tapplet", json!({ "tapplet_id": tapplet_id }))
            .await?;
        Ok(serde_json::from_value(v)?)
    }

    pub async fn upload_wasm_file(&self, file_path: &str) -> Result<(), BridgeError> {
        self.invoke_unit("upload_wasm_file", json!({ "file_path": file_path }))
            .await
    }
}

/// The three calls the mining controls depend on, behind a trait so the
/// control flow can be driven by a fake in tests.
#[async_trait::async_trait]
pub trait MinerControlApi: Send + Sync {
    async fn start_mining(&self) -> Result<(), BridgeError>;
    async fn stop_mining(&self) -> Result<(), BridgeError>;
    async fn set_mode(&self, req: &ModeChangeRequest) -> Result<(), BridgeError>;
}

#[async_trait::async_trait]
impl MinerControlApi for BridgeHandle {
    async fn start_mining(&self) -> Result<(), BridgeError> {
        self.invoke_unit("start_mining", Value::Null).await
    }

    async fn stop_mining(&self) -> Result<(), BridgeError> {
        self.invoke_unit("stop_mining", Value::Null).await
    }

    async fn set_mode(&self, req: &ModeChangeRequest) -> Result<(), BridgeError> {
        self.set_mining_mode(req).await
    }
}
