//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] patas_storage::StorageError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] patas_nav::NavigationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
