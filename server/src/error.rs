//! API errors and their JSON/status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_store::StoreError;
use roster_types::{ErrorBody, StudentId, ValidationError};
use thiserror::Error;
use tracing::{error, warn};

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// The four operations of the `/students` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    /// Short error kind used in 500 bodies.
    fn failure_kind(self) -> &'static str {
        match self {
            Operation::Create => "Failed to add student",
            Operation::List => "Failed to fetch students",
            Operation::Update => "Failed to update student",
            Operation::Delete => "Failed to delete student",
        }
    }
}

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing/empty field, unreadable body, or non-numeric id.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No student has the given id.
    #[error("Student with ID {0} not found.")]
    NotFound(StudentId),

    /// The store's uniqueness constraint rejected the write.
    #[error("{message}")]
    Conflict { op: Operation, message: String },

    /// Any other persistence failure; the store message is passed through.
    #[error("{message}")]
    Store { op: Operation, message: String },
}

impl ApiError {
    /// Translates a store failure for `op`. Constraint failures become
    /// conflicts, everything else is a 500.
    pub fn from_store(op: Operation, err: StoreError) -> Self {
        match err {
            StoreError::Constraint(_) => {
                let message = match op {
                    Operation::Update => "Email already exists. Please use a unique email.",
                    _ => "An entry with this email already exists. Please use a unique email.",
                };
                ApiError::Conflict {
                    op,
                    message: message.to_string(),
                }
            }
            other => ApiError::Store {
                op,
                message: other.to_string(),
            },
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Bad Request",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Conflict { .. } => "Constraint Violation",
            ApiError::Store { op, .. } => op.failure_kind(),
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}: {}", self.kind(), self);
        } else {
            warn!("{} ({}): {}", self.kind(), status.as_u16(), self);
        }
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
