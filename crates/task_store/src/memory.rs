//! In-memory task store implementation for testing.

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use entities::Task;
use tokio::sync::RwLock;

use crate::{TaskStore, TaskStoreResult};

/// In-memory task store for tests and local development.
///
/// Ids are assigned from a monotonically increasing counter starting at 1,
/// mirroring the database's id assignment.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
    next_id: AtomicI64,
}

impl MemoryTaskStore {
    /// Creates a new in-memory task store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.clone())
    }

    async fn create_task(&self, title: &str) -> TaskStoreResult<Task> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = Task::new(id, title);
        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        Ok(task)
    }
}
