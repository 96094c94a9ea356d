//! Task identifiers and their parsing rules.
//!
//! Identifiers are strictly positive integers allocated by the store's
//! monotonic counter, starting at 1. Clients never choose them; the only
//! way an id enters the system from the outside is through a URL path
//! segment, which is where the strict [`FromStr`] rules apply.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Serialized transparently as a JSON integer. Valid ids start at 1;
/// the store's allocator is the only producer of new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task id from a raw counter value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a path segment is not a valid task id.
///
/// Covers non-numeric input, negative numbers, and zero alike; the HTTP
/// layer maps all of them to the same 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid task id")]
pub struct ParseTaskIdError;

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    /// Parses a base-10 integer id, rejecting anything below 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s.parse().map_err(|_| ParseTaskIdError)?;
        if raw < 1 {
            return Err(ParseTaskIdError);
        }
        Ok(Self(raw))
    }
}
