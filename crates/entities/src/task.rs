//! Task entity definitions.

use serde::{Deserialize, Serialize};

/// A task record: the sole domain entity.
///
/// Serializes to the wire shape `{"id": <int>, "title": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the database on creation.
    pub id: i64,
    /// Task title, provided by the client at creation.
    pub title: String,
}

impl Task {
    /// Creates a task with the given id and title.
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
