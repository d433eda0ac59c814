//! Core type definitions for Roster.
//!
//! This crate defines the types shared by the record store, the HTTP
//! service and the client:
//! - Student identifiers assigned by the store
//! - Student records and their editable fields
//! - Input validation for create/update payloads
//! - JSON bodies exchanged over the `/students` API

mod ids;
mod student;
mod wire;

pub use ids::StudentId;
pub use student::{Field, StudentFields, StudentPayload, StudentRecord};
pub use wire::{CreatedResponse, ErrorBody, MessageResponse};

/// Errors raised when a create/update request is rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields were missing or empty.
    #[error("All fields (name, surname, email) are required.")]
    MissingFields(Vec<Field>),

    /// The body could not be read as a JSON object of strings.
    #[error("invalid request body: {0}")]
    Malformed(String),

    /// A path identifier was not an integer.
    #[error("invalid student id: {0}")]
    InvalidId(String),
}

/// Result type alias for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
