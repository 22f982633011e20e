// Collaborator seams: the core reads collections and runs named procedures
// only through these traits, so it never touches the network itself.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::RawRecord;

/// Collection holding the single system-resource record.
pub const SYSTEM_RESOURCE_PATH: &str = "/system/resource";

#[async_trait]
pub trait CollectionFetcher: Send + Sync {
    /// Read every record of one collection, in device order.
    async fn fetch(&self, path: &str) -> Result<Vec<RawRecord>, TransportError>;
}

#[async_trait]
pub trait ProcedureInvoker: Send + Sync {
    /// Run one named remote procedure with no arguments.
    async fn invoke(&self, name: &str) -> Result<(), TransportError>;
}

/// A device the dashboard can both read and operate.
pub trait RouterDevice: CollectionFetcher + ProcedureInvoker {}

impl<T: CollectionFetcher + ProcedureInvoker + ?Sized> RouterDevice for T {}

/// Fetch the system-resource collection and return its first record.
pub async fn fetch_system_resource<F>(fetcher: &F) -> Result<RawRecord, TransportError>
where
    F: CollectionFetcher + ?Sized,
{
    fetcher
        .fetch(SYSTEM_RESOURCE_PATH)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| TransportError::EmptyReply {
            path: SYSTEM_RESOURCE_PATH.to_string(),
        })
}
