//! Task store trait definition.

use async_trait::async_trait;
use entities::Task;

use crate::TaskStoreResult;

/// Trait for task storage operations.
///
/// Each call is a single, independently committed unit; no transaction
/// spans multiple statements.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists all tasks in insertion order.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Creates a task with the given title, returning the stored record
    /// with its assigned id.
    async fn create_task(&self, title: &str) -> TaskStoreResult<Task>;
}
