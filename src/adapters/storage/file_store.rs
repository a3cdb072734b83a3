use crate::domain::Task;
use crate::ports::{StorageError, StorageResult, TaskStorage};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use super::dto;

/// File-backed task storage: one JSON document holding the full collection,
/// overwritten on every save.
pub struct FileTaskStorage {
    storage_path: PathBuf,
}

impl FileTaskStorage {
    /// Store under the platform data directory, e.g.
    /// `~/.local/share/taskdeck/taskObjects.json` on Linux.
    pub fn new() -> StorageResult<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StorageError::Read("Cannot determine data directory".to_string()))?;
        Ok(Self::with_path(
            data_dir.join("taskdeck").join("taskObjects.json"),
        ))
    }

    pub fn with_path(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }

    async fn ensure_storage_dir(&self) -> StorageResult<()> {
        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStorage for FileTaskStorage {
    async fn load(&self) -> StorageResult<Vec<Task>> {
        let content = match fs::read_to_string(&self.storage_path).await {
            Ok(content) => content,
            Err(_) => return Ok(Vec::new()), // nothing stored yet
        };
        Ok(dto::from_wire_json(&content))
    }

    async fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        self.ensure_storage_dir().await?;
        let content =
            dto::to_wire_json(tasks).map_err(|e| StorageError::InvalidFormat(e.to_string()))?;
        fs::write(&self.storage_path, content)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))
    }
}
