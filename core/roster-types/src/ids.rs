//! Identifier type for student records.
//!
//! Ids are assigned by the record store on insert and never reused.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ValidationError;

/// Store-assigned identifier of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(s.to_string()))
    }
}

impl From<i64> for StudentId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
