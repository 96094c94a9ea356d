//! In-memory task store.
//!
//! The [`TaskStore`] owns the task collection and the next-id counter.
//! Both live behind a single [`RwLock`] so that a create or delete holds
//! one exclusive guard across the counter update and the collection
//! mutation: concurrent requests can never observe a torn append, lose an
//! update, or receive duplicate ids.

use tokio::sync::RwLock;

use taskboard_model::{NewTask, Task, TaskId};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No task exists with the requested id.
    #[error("task not found")]
    NotFound,
}

/// Collection and counter guarded together; the counter never rolls back.
struct StoreInner {
    tasks: Vec<Task>,
    next_id: u64,
}

/// In-memory task collection with monotonic id allocation.
///
/// Thread-safe via [`RwLock`]. Tasks are kept in insertion order; deleting
/// one preserves the relative order of the rest. Ids start at 1, increase
/// by exactly one per create, and are never reused, even after deletion.
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates a new, empty store with the id counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a task from the given input, returning the stored record.
    ///
    /// Assigns the next id, marks the task not completed, and appends it
    /// to the collection. Always succeeds.
    pub async fn create(&self, input: NewTask) -> Task {
        let mut inner = self.inner.write().await;
        let task = Task {
            id: TaskId::from_raw(inner.next_id),
            title: input.title,
            description: input.description,
            completed: false,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// Returns a snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        let inner = self.inner.read().await;
        inner.tasks.clone()
    }

    /// Returns the task with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no task has that id.
    pub async fn get(&self, id: TaskId) -> Result<Task, StoreError> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Removes the task with the given id.
    ///
    /// The remaining tasks keep their relative order, and the id counter
    /// is left untouched, so the id is never handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no task has that id.
    pub async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let position = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.tasks.remove(position);
        Ok(())
    }
}
