//! Patas Amigas Core
//!
//! Central coordination layer for the volunteer-registration site engine.
//! The engine owns all state; the renderer is stateless. A navigation click
//! flows through the event registry to the content fetcher, which swaps the
//! mount region, re-arms every handler on the fresh subtree, and pushes the
//! route onto history.

mod app;
mod config;
mod error;

pub use app::{App, Concern};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use patas_dom::{Document, Field, FieldGroup, Form, NavLink, MOUNT_SELECTOR};
pub use patas_events::{BindingId, EventKind, EventRegistry, Rebinder, Target};
pub use patas_forms::{
    mask_document_number, mask_phone, mask_postal_code, MaskKind, ValidationReport,
};
pub use patas_nav::{
    FetchedFragment, FragmentFetcher, History, HttpFetcher, NavigationError, RouteTable,
    DEFAULT_FRAGMENT,
};
pub use patas_storage::{
    LocalStore, RegistrationRecord, RegistrationStore, StorageError, REGISTRATIONS_KEY,
};
pub use patas_theme::{ThemeController, ThemeState, THEME_PREFERENCE_KEY};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
