//! Patas Amigas Storage Layer
//!
//! SQLite-backed stand-in for the site's string-keyed local storage,
//! plus the persisted registration list layered on top of it.

mod error;
mod migrations;
mod registrations;
mod store;

pub use error::StorageError;
pub use registrations::{RegistrationRecord, RegistrationStore, REGISTRATIONS_KEY};
pub use store::LocalStore;

pub type Result<T> = std::result::Result<T, StorageError>;
