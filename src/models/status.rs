// Normalized system-resource rows

use serde::{Deserialize, Serialize};

/// One display row: localized label and formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub label: String,
    pub value: String,
}

impl StatusEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
