// Domain models: raw device records and their normalized forms

mod record;
mod snapshot;
mod status;
mod vpn;

pub use record::{FieldValue, RawRecord};
pub use snapshot::{DeviceEvent, DeviceSnapshot};
pub use status::StatusEntry;
pub use vpn::{VpnEntry, VpnProtocol};
