// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::models::DeviceEvent;
use crate::transport::RouterDevice;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) events_tx: broadcast::Sender<DeviceEvent>,
    pub(crate) device: Arc<dyn RouterDevice>,
    pub(crate) ws_device_connections: Arc<AtomicUsize>,
    pub(crate) config: AppConfig,
}

pub fn app(
    events_tx: broadcast::Sender<DeviceEvent>,
    device: Arc<dyn RouterDevice>,
    ws_device_connections: Arc<AtomicUsize>,
    config: AppConfig,
) -> Router {
    let state = AppState {
        events_tx,
        device,
        ws_device_connections,
        config,
    };
    Router::new()
        .route("/", get(|| async { crate::version::banner() })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/status", get(http::status_handler)) // GET /api/status
        .route("/api/vpn", get(http::vpn_handler)) // GET /api/vpn
        .route("/api/actions/{action}", post(http::action_handler)) // POST /api/actions/{action}
        .route("/ws/device", get(ws::ws_device)) // WS /ws/device
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
