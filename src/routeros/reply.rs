// Reply sentences from the device

use crate::error::TransportError;
use crate::models::RawRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// One data record.
    Re(RawRecord),
    /// End of the reply; may carry attributes such as `=ret=`.
    Done(RawRecord),
    Trap { message: String },
    /// The device is closing the connection.
    Fatal(String),
    /// No data (RouterOS v7 print on an empty collection).
    Empty,
}

impl Reply {
    pub fn parse(words: Vec<String>) -> Result<Self, TransportError> {
        let Some((kind, rest)) = words.split_first() else {
            return Err(TransportError::Protocol("empty sentence".into()));
        };
        match kind.as_str() {
            "!re" => Ok(Reply::Re(attributes(rest))),
            "!done" => Ok(Reply::Done(attributes(rest))),
            "!trap" => {
                let attrs = attributes(rest);
                let message = attrs
                    .get("message")
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "device reported an error without a message".into());
                Ok(Reply::Trap { message })
            }
            "!fatal" => Ok(Reply::Fatal(rest.first().cloned().unwrap_or_default())),
            "!empty" => Ok(Reply::Empty),
            other => Err(TransportError::Protocol(format!(
                "unexpected reply word {:?}",
                other
            ))),
        }
    }
}

/// Collect `=key=value` words in order. The value may itself contain `=`.
/// API words such as `.tag=3` are skipped.
fn attributes(words: &[String]) -> RawRecord {
    let mut record = RawRecord::new();
    for word in words {
        let Some(attr) = word.strip_prefix('=') else {
            continue;
        };
        match attr.split_once('=') {
            Some((key, value)) => record.insert(key, value),
            None => record.insert(attr, ""),
        }
    }
    record
}
