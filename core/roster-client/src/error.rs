//! Error types for the client.

use roster_types::{ErrorBody, StudentId, ValidationError};
use thiserror::Error;

/// Client-side errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status and a JSON error body.
    #[error("{}", .body.display_text())]
    Server { status: u16, body: ErrorBody },

    /// The request never completed (connection refused, reset, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server's response body was not the JSON we expected.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Input rejected locally before any request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The id is not part of the currently loaded list.
    #[error("student with ID {0} is not loaded")]
    UnknownRow(StudentId),
}

impl ClientError {
    /// HTTP status for server-reported errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened in transport or decoding rather than
    /// being reported by the server.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::InvalidResponse(_))
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
