//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Failed to load fragment {resource}: status {status}")]
    FailedStatus { resource: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid fragment URL: {0}")]
    InvalidUrl(String),

    #[error("Content region missing in fragment: {0}")]
    MissingContent(String),
}
