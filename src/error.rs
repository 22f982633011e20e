// Transport failures reported by the device collaborator

use thiserror::Error;

/// The only error kind the core surfaces. Device-reported messages
/// (`Trap`, `Fatal`) display verbatim so callers can show them unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection to {addr} failed: {reason}")]
    Connect { addr: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("{message}")]
    Trap { message: String },

    #[error("{0}")]
    Fatal(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("empty reply for {path}")]
    EmptyReply { path: String },
}

impl TransportError {
    /// Whether the session must be dropped and reopened after this error.
    /// A trap leaves the connection usable.
    pub fn breaks_session(&self) -> bool {
        !matches!(
            self,
            TransportError::Trap { .. } | TransportError::EmptyReply { .. }
        )
    }
}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        TransportError::Io(e.to_string())
    }
}
