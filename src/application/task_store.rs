use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Task, TaskDraft, TaskId};
use crate::ports::TaskStorage;

use super::{AppError, AppResult};

/// Single source of truth for the task collection.
///
/// All reads and writes to durable storage flow through this store. Each
/// mutation builds a fresh collection, persists it, then swaps it in as the
/// new in-memory state; the write lock keeps that read-modify-write sequence
/// exclusive.
pub struct TaskStore {
    storage: Arc<dyn TaskStorage>,
    tasks: RwLock<Vec<Task>>,
    next_id: AtomicU64,
}

impl TaskStore {
    pub fn new(storage: Arc<dyn TaskStorage>) -> Self {
        Self {
            storage,
            tasks: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Hydrate the in-memory collection from storage and seed the id counter
    /// past the highest persisted id. Must complete before any other
    /// operation runs.
    ///
    /// Unreadable storage is never fatal: the store starts empty and stays
    /// usable in memory.
    pub async fn initialize(&self) {
        let stored = match self.storage.load().await {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!("Failed to load tasks, starting with an empty collection: {e}");
                Vec::new()
            }
        };
        let next = stored.iter().map(|t| t.id.0).max().map_or(1, |max| max + 1);
        self.next_id.store(next, Ordering::SeqCst);
        *self.tasks.write().await = stored;
    }

    /// Append a new incomplete task and persist the collection.
    ///
    /// An empty post-trim title or description is silently absorbed: no task
    /// is created and nothing is written. Callers observe the outcome through
    /// [`TaskStore::tasks`].
    pub async fn add_task(&self, title: &str, description: &str) {
        let Some(draft) = TaskDraft::new(title, description) else {
            return;
        };
        let mut tasks = self.tasks.write().await;
        let task = draft.into_task(TaskId(self.next_id.fetch_add(1, Ordering::SeqCst)));
        let mut next = tasks.clone();
        next.push(task);
        self.commit(&mut tasks, next).await;
    }

    /// Replace the task at `index`, leaving all other entries and their order
    /// untouched, and persist the collection.
    pub async fn update_task(&self, index: usize, task: Task) -> AppResult<()> {
        let mut tasks = self.tasks.write().await;
        if index >= tasks.len() {
            return Err(AppError::IndexOutOfRange {
                index,
                len: tasks.len(),
            });
        }
        let mut next = tasks.clone();
        next[index] = task;
        self.commit(&mut tasks, next).await;
        Ok(())
    }

    /// Remove the task with the given id and persist the collection. An
    /// absent id leaves the collection unchanged, but it is still persisted.
    pub async fn delete_task(&self, id: TaskId) {
        let mut tasks = self.tasks.write().await;
        let next: Vec<Task> = tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(&mut tasks, next).await;
    }

    /// Read-only view of the current ordered collection.
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Persist `next` and make it the in-memory state. A write failure is
    /// reported but non-fatal; the in-memory state remains authoritative.
    async fn commit(&self, current: &mut Vec<Task>, next: Vec<Task>) {
        if let Err(e) = self.storage.save(&next).await {
            tracing::warn!("Failed to persist tasks, keeping in-memory state: {e}");
        }
        *current = next;
    }
}
