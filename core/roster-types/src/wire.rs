//! JSON bodies returned by the `/students` API.

use serde::{Deserialize, Serialize};

use crate::{StudentFields, StudentId};

/// Body of a successful create (`201`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: StudentId,
    pub student: StudentFields,
}

/// Body of a successful update or delete (`200`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short error kind, e.g. `"Constraint Violation"`.
    #[serde(default)]
    pub error: String,
    /// Human-readable detail suitable for showing to the user.
    #[serde(default)]
    pub message: String,
}

impl ErrorBody {
    /// The text a client should surface: the message, falling back to the
    /// error kind.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if !self.message.is_empty() {
            &self.message
        } else if !self.error.is_empty() {
            &self.error
        } else {
            "Unknown error"
        }
    }
}
