// Background device poller (refreshes the dashboard feed).
// Polls only while /ws/device has subscribers; every poll is a full
// status + VPN refresh that either succeeds completely or reports one error.

use crate::error::TransportError;
use crate::models::{DeviceEvent, DeviceSnapshot};
use crate::status;
use crate::transport::{RouterDevice, fetch_system_resource};
use crate::vpn;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::broadcast;
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Device handle, channels, and shutdown for the worker.
pub struct WorkerDeps {
    pub device: Arc<dyn RouterDevice>,
    pub tx: broadcast::Sender<DeviceEvent>,
    pub ws_device_connections: Arc<AtomicUsize>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Worker timing and logging config.
pub struct WorkerConfig {
    pub poll_interval_ms: u64,
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

/// Read the system resource and every VPN collection; fail fast on the first
/// transport error.
pub async fn collect_snapshot(device: &dyn RouterDevice) -> Result<DeviceSnapshot, TransportError> {
    let resource = fetch_system_resource(device).await?;
    let status = status::normalize(&resource);
    let vpn = vpn::aggregate(device).await?;
    Ok(DeviceSnapshot {
        timestamp: now_millis(),
        status,
        vpn,
    })
}

/// One poll turned into a feed event. Transport errors become `Error` events
/// carrying the message verbatim.
pub async fn poll_once(device: &dyn RouterDevice) -> DeviceEvent {
    match collect_snapshot(device).await {
        Ok(snapshot) => DeviceEvent::Snapshot(snapshot),
        Err(e) => {
            tracing::warn!(error = %e, operation = "poll_device", "device poll failed");
            DeviceEvent::Error {
                message: e.to_string(),
            }
        }
    }
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_else(|e| {
        tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
        0
    })
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        device,
        tx,
        ws_device_connections,
        mut shutdown_rx,
    } = deps;
    let WorkerConfig {
        poll_interval_ms,
        stats_log_interval_secs,
    } = config;

    let worker_span = tracing::span!(tracing::Level::DEBUG, "worker", poll_interval_ms);

    tokio::spawn(
        async move {
            let mut tick = interval(Duration::from_millis(poll_interval_ms));
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
            stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            let mut polls_total: u64 = 0;
            let mut poll_errors_total: u64 = 0;

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if tx.receiver_count() == 0 {
                            tracing::trace!(operation = "poll_device", "no subscribers; skipping poll");
                            continue;
                        }
                        let event = poll_once(device.as_ref()).await;
                        polls_total += 1;
                        if matches!(event, DeviceEvent::Error { .. }) {
                            poll_errors_total += 1;
                        }
                        if tx.send(event).is_err() {
                            tracing::debug!(
                                operation = "broadcast_event",
                                "Subscribers left during poll; event dropped"
                            );
                        }
                    }
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Worker shutting down");
                        break;
                    }
                    _ = stats_log_tick.tick() => {
                        tracing::info!(
                            ws_device_clients = ws_device_connections.load(Ordering::Relaxed),
                            polls_total,
                            poll_errors_total,
                            "app stats"
                        );
                    }
                }
            }
        }
        .instrument(worker_span),
    )
}
