//! The task record and its create-input shape.

use serde::{Deserialize, Serialize};

use crate::id::TaskId;

/// A to-do item as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store.
    pub id: TaskId,
    /// Free-form title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Completion flag; always `false` on creation.
    pub completed: bool,
}

/// Client input for creating a task.
///
/// Both fields are required; unknown fields in the payload are ignored,
/// so a client-supplied `id` or `completed` can never reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Free-form title.
    pub title: String,
    /// Free-form description.
    pub description: String,
}
