use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the FMP client workspace.
///
/// Covers the three ways a call can fail once it reaches the network (transport,
/// non-success status, undecodable body) plus local argument rejection.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FmpError {
    /// Invalid input argument, rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The transport could not complete the request (DNS, TLS, connection reset, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote service answered with a non-success HTTP status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw response body, as returned.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl FmpError {
    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Status` error for a status code and body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status for `Status` errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FmpError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
