// Loosely-typed device records as returned by one resource query

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field value. The RouterOS API only ever sends text; JSON sources may
/// carry numbers and booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Integer reading of the value. Text is trimmed and may exceed 64 bits;
    /// finite floats truncate toward zero. Booleans have no integer reading.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            FieldValue::Integer(n) => Some(i128::from(*n)),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Float(x) if x.is_finite() => Some(x.trunc() as i128),
            FieldValue::Bool(_) | FieldValue::Float(_) => None,
        }
    }

    /// True only for the exact text `true`. "yes", "1", "True", the empty
    /// string and a JSON boolean are all false.
    pub fn is_literal_true(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s == "true")
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Field-name to value mapping that keeps the order fields arrived in.
/// Re-inserting an existing key replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: IndexMap<String, FieldValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// String form of a field, or "" when the field is absent.
    pub fn text_or_empty(&self, key: &str) -> String {
        self.get(key).map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
