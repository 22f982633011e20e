// Device snapshot pushed to dashboard subscribers

use serde::{Deserialize, Serialize};

use super::{StatusEntry, VpnEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    /// Unix millis when the poll finished.
    pub timestamp: u64,
    pub status: Vec<StatusEntry>,
    pub vpn: Vec<VpnEntry>,
}

/// One message on the device feed: either a full snapshot or the transport
/// error that prevented one (message verbatim).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeviceEvent {
    Snapshot(DeviceSnapshot),
    Error { message: String },
}
