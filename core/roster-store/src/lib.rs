//! SQLite record store for Roster.
//!
//! Holds the single `students` table. The email uniqueness invariant is
//! enforced by a `UNIQUE` index in the schema, never by application-side
//! lookups, so concurrent writers are serialized by SQLite itself.
//!
//! # Architecture
//!
//! - One connection per store, shared behind `Arc<Mutex<_>>`
//! - Schema is created on open if absent
//! - Every statement is parameterized

mod error;
mod student_store;

pub use error::{StoreError, StoreResult};
pub use student_store::StudentStore;
