use crate::domain::Task;
use crate::ports::{StorageError, StorageResult, TaskStorage};
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::dto;

/// Volatile storage with the same serialized text and overwrite semantics as
/// the file adapter. Used by tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryTaskStorage {
    stored: Mutex<Option<String>>,
}

impl InMemoryTaskStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStorage for InMemoryTaskStorage {
    async fn load(&self) -> StorageResult<Vec<Task>> {
        match self.stored.lock().await.as_deref() {
            None => Ok(Vec::new()),
            Some(content) => Ok(dto::from_wire_json(content)),
        }
    }

    async fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let content =
            dto::to_wire_json(tasks).map_err(|e| StorageError::InvalidFormat(e.to_string()))?;
        *self.stored.lock().await = Some(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[tokio::test]
    async fn empty_storage_loads_as_empty() {
        let storage = InMemoryTaskStorage::new();
        assert!(storage.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let storage = InMemoryTaskStorage::new();
        let tasks = vec![Task::new(TaskId(1), "a", "1").unwrap()];
        storage.save(&tasks).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), tasks);
    }
}
