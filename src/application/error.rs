use crate::ports::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Task position {index} is out of range (collection has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type AppResult<T> = Result<T, AppError>;
