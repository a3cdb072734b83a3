use crate::domain::Task;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read task storage: {0}")]
    Read(String),

    #[error("Failed to write task storage: {0}")]
    Write(String),

    #[error("Invalid task storage format: {0}")]
    InvalidFormat(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable storage of the entire task collection under one fixed key.
///
/// `save` overwrites the previous value with the full ordered sequence; there
/// are no incremental writes, transactions, or versioning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStorage: Send + Sync {
    async fn load(&self) -> StorageResult<Vec<Task>>;
    async fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}
