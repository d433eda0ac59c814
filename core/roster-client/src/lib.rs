//! Client side of the Roster student API.
//!
//! This crate provides:
//! - [`StudentsClient`], a typed wrapper over the four `/students` calls
//! - [`SyncController`], which keeps a local copy of the full list with
//!   per-row change detection
//!
//! # Design Principles
//!
//! - **Full reload**: after every successful mutation the whole list is
//!   fetched again; the local view is never patched in place
//! - **No redundant writes**: an update whose trimmed values match the
//!   last-fetched snapshot never reaches the network
//! - **One mutation at a time**: every mutating call takes `&mut self` and
//!   awaits its reload before returning

mod client;
mod controller;
mod error;

pub use client::StudentsClient;
pub use controller::{DeleteOutcome, Row, RowState, SyncController, UpdateOutcome};
pub use error::{ClientError, ClientResult};
