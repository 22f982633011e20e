// VPN client aggregation across the four per-protocol collections

use tracing::debug;

use crate::error::TransportError;
use crate::models::{VpnEntry, VpnProtocol};
use crate::transport::CollectionFetcher;

/// Fetch every VPN client collection in protocol order (PPTP, L2TP, SSTP,
/// OpenVPN) and merge them into one list. The first failed fetch aborts the
/// whole call; no partial list is returned.
pub async fn aggregate<F>(fetcher: &F) -> Result<Vec<VpnEntry>, TransportError>
where
    F: CollectionFetcher + ?Sized,
{
    let mut entries = Vec::new();
    for protocol in VpnProtocol::ALL {
        let records = fetcher.fetch(protocol.collection_path()).await?;
        debug!(
            operation = "aggregate_vpn",
            protocol = %protocol,
            count = records.len(),
            "VPN collection fetched"
        );
        entries.extend(
            records
                .iter()
                .map(|record| VpnEntry::from_record(protocol, record)),
        );
    }
    Ok(entries)
}
