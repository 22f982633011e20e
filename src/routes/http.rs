// HTTP handlers: version, status, VPN list, mode actions

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::TransportError;
use crate::models::{StatusEntry, VpnEntry};
use crate::modes::{self, ModeAction};
use crate::status;
use crate::transport::fetch_system_resource;
use crate::version::{NAME, VERSION};
use crate::vpn;

/// Transport failure as `502 {"error": "<message>"}`; the message is the
/// error's display text, unmodified.
pub(super) struct ApiError(TransportError);

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_GATEWAY,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/status: normalized system-resource rows, in device field order.
pub(super) async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusEntry>>, ApiError> {
    let resource = fetch_system_resource(state.device.as_ref()).await?;
    Ok(Json(status::normalize(&resource)))
}

/// GET /api/vpn: every VPN client interface, PPTP then L2TP, SSTP, OpenVPN.
pub(super) async fn vpn_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VpnEntry>>, ApiError> {
    Ok(Json(vpn::aggregate(state.device.as_ref()).await?))
}

/// POST /api/actions/{action}: run the device script bound to the action.
/// Actions that change the device identity also return the re-read status rows.
pub(super) async fn action_handler(
    State(state): State<AppState>,
    Path(action): Path<ModeAction>,
) -> Result<Json<serde_json::Value>, ApiError> {
    modes::switch_mode(state.device.as_ref(), &state.config.scripts, action).await?;
    let mut body = serde_json::json!({
        "action": action,
        "script": action.script_name(&state.config.scripts),
    });
    if action.refreshes_status() {
        let resource = fetch_system_resource(state.device.as_ref()).await?;
        body["status"] = serde_json::json!(status::normalize(&resource));
    }
    Ok(Json(body))
}
