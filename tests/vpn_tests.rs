// VPN aggregation and mode-switch tests against a scripted device

mod common;

use common::{FakeDevice, record};
use routerdash::config::ScriptsConfig;
use routerdash::error::TransportError;
use routerdash::models::{VpnEntry, VpnProtocol};
use routerdash::modes::{ModeAction, switch_mode};
use routerdash::vpn::aggregate;

const PPTP: &str = "/interface/pptp-client";
const L2TP: &str = "/interface/l2tp-client";
const SSTP: &str = "/interface/sstp-client";
const OVPN: &str = "/interface/ovpn-client";

fn client(name: &str, connected: &str) -> routerdash::models::RawRecord {
    record(&[
        (".id", "*1"),
        ("name", name),
        ("connect-to", "203.0.113.7"),
        ("user", "dialer"),
        ("status", "connected"),
        ("connected", connected),
    ])
}

#[tokio::test]
async fn test_single_pptp_record() {
    let device = FakeDevice::new().with_records(PPTP, vec![client("pptp-out1", "true")]);
    let entries = aggregate(&device).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0],
        VpnEntry {
            protocol_type: VpnProtocol::Pptp,
            name: "pptp-out1".into(),
            remote_address: "203.0.113.7".into(),
            user: "dialer".into(),
            status: "connected".into(),
            connected: true,
        }
    );
}

#[tokio::test]
async fn test_merge_order_follows_protocol_then_collection_order() {
    let device = FakeDevice::new()
        .with_records(OVPN, vec![client("ovpn-a", "true")])
        .with_records(SSTP, vec![client("sstp-a", "true"), client("sstp-b", "false")])
        .with_records(PPTP, vec![client("pptp-a", "true")])
        .with_records(L2TP, vec![client("l2tp-b", "true"), client("l2tp-a", "true")]);
    let entries = aggregate(&device).await.unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["pptp-a", "l2tp-b", "l2tp-a", "sstp-a", "sstp-b", "ovpn-a"]);
    let protocols: Vec<VpnProtocol> = entries.iter().map(|e| e.protocol_type).collect();
    assert_eq!(
        protocols,
        vec![
            VpnProtocol::Pptp,
            VpnProtocol::L2tp,
            VpnProtocol::L2tp,
            VpnProtocol::Sstp,
            VpnProtocol::Sstp,
            VpnProtocol::OpenVpn,
        ]
    );
    assert_eq!(device.fetched_paths(), vec![PPTP, L2TP, SSTP, OVPN]);
}

#[tokio::test]
async fn test_connected_is_strict_literal_match() {
    let mut records = vec![
        client("a", "true"),
        client("b", "false"),
        client("c", "1"),
        client("d", ""),
        client("e", "True"),
        client("f", "yes"),
    ];
    records.push(record(&[("name", "g")]));
    let device = FakeDevice::new().with_records(L2TP, records);
    let entries = aggregate(&device).await.unwrap();
    let connected: Vec<bool> = entries.iter().map(|e| e.connected).collect();
    assert_eq!(connected, vec![true, false, false, false, false, false, false]);
}

#[tokio::test]
async fn test_boolean_connected_is_not_the_literal() {
    let mut json_client = record(&[("name", "json")]);
    json_client.insert("connected", true);
    let device = FakeDevice::new().with_records(PPTP, vec![json_client]);
    let entries = aggregate(&device).await.unwrap();
    assert!(!entries[0].connected);
}

#[tokio::test]
async fn test_missing_fields_default_to_empty_strings() {
    let device = FakeDevice::new().with_records(SSTP, vec![record(&[("name", "bare")])]);
    let entries = aggregate(&device).await.unwrap();
    let e = &entries[0];
    assert_eq!(e.protocol_type, VpnProtocol::Sstp);
    assert_eq!(e.name, "bare");
    assert_eq!(e.remote_address, "");
    assert_eq!(e.user, "");
    assert_eq!(e.status, "");
    assert!(!e.connected);
}

#[tokio::test]
async fn test_failure_on_sstp_is_fail_fast() {
    let device = FakeDevice::new()
        .with_records(PPTP, vec![client("pptp-a", "true")])
        .with_records(L2TP, vec![client("l2tp-a", "true")])
        .with_error(
            SSTP,
            TransportError::Trap {
                message: "no such command prefix".into(),
            },
        )
        .with_records(OVPN, vec![client("ovpn-a", "true")]);
    let err = aggregate(&device).await.unwrap_err();
    assert_eq!(
        err,
        TransportError::Trap {
            message: "no such command prefix".into()
        }
    );
    assert_eq!(err.to_string(), "no such command prefix");
    assert_eq!(device.fetched_paths(), vec![PPTP, L2TP, SSTP]);
}

#[tokio::test]
async fn test_empty_device_yields_empty_list() {
    let device = FakeDevice::new();
    assert!(aggregate(&device).await.unwrap().is_empty());
    assert_eq!(device.fetched_paths().len(), 4);
}

#[tokio::test]
async fn test_aggregate_is_deterministic() {
    let device = FakeDevice::new()
        .with_records(PPTP, vec![client("pptp-a", "true")])
        .with_records(OVPN, vec![client("ovpn-a", "false")]);
    let first = aggregate(&device).await.unwrap();
    let second = aggregate(&device).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_switch_mode_runs_configured_scripts() {
    let device = FakeDevice::new();
    let scripts = ScriptsConfig::default();
    for action in [
        ModeAction::LocalMode,
        ModeAction::VpnMode,
        ModeAction::RandomizeHardware,
    ] {
        switch_mode(&device, &scripts, action).await.unwrap();
    }
    assert_eq!(device.invoked_names(), vec!["qiebendi", "qievpn", "qiemac"]);
}

#[tokio::test]
async fn test_switch_mode_forwards_error_verbatim() {
    let device = FakeDevice::new().with_script_failure(
        "qievpn",
        TransportError::Trap {
            message: "no such item (4)".into(),
        },
    );
    let err = switch_mode(&device, &ScriptsConfig::default(), ModeAction::VpnMode)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no such item (4)");
}
