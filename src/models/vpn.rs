// VPN client interface models

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RawRecord;

/// VPN tunnel type; serializes to the display name (e.g. "OpenVPN").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VpnProtocol {
    #[serde(rename = "PPTP")]
    Pptp,
    #[serde(rename = "L2TP")]
    L2tp,
    #[serde(rename = "SSTP")]
    Sstp,
    #[serde(rename = "OpenVPN")]
    OpenVpn,
}

impl VpnProtocol {
    /// Fetch and merge order.
    pub const ALL: [VpnProtocol; 4] = [
        VpnProtocol::Pptp,
        VpnProtocol::L2tp,
        VpnProtocol::Sstp,
        VpnProtocol::OpenVpn,
    ];

    /// Device collection holding this protocol's client interfaces.
    pub fn collection_path(self) -> &'static str {
        match self {
            VpnProtocol::Pptp => "/interface/pptp-client",
            VpnProtocol::L2tp => "/interface/l2tp-client",
            VpnProtocol::Sstp => "/interface/sstp-client",
            VpnProtocol::OpenVpn => "/interface/ovpn-client",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            VpnProtocol::Pptp => "PPTP",
            VpnProtocol::L2tp => "L2TP",
            VpnProtocol::Sstp => "SSTP",
            VpnProtocol::OpenVpn => "OpenVPN",
        }
    }
}

impl fmt::Display for VpnProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnEntry {
    pub protocol_type: VpnProtocol,
    pub name: String,
    pub remote_address: String,
    pub user: String,
    pub status: String,
    pub connected: bool,
}

impl VpnEntry {
    /// Build an entry from one client-interface record. Missing text fields
    /// become "", and `connected` holds only for the literal "true".
    pub fn from_record(protocol_type: VpnProtocol, record: &RawRecord) -> Self {
        Self {
            protocol_type,
            name: record.text_or_empty("name"),
            remote_address: record.text_or_empty("connect-to"),
            user: record.text_or_empty("user"),
            status: record.text_or_empty("status"),
            connected: record
                .get("connected")
                .is_some_and(|v| v.is_literal_true()),
        }
    }
}
