//! Patas Amigas Theme Machine
//!
//! ```text
//! Light
//!   ↓ toggle
//! DarkMode
//!   ↓ toggle
//! HighContrastMode
//!   ↓ toggle
//! Light
//! ```
//!
//! The theme value is the single source of truth: the document body class and
//! toggle icon are derived from it, never read back out of presentation state.

mod state;

pub use state::{ThemeController, ThemeState, THEME_PREFERENCE_KEY};

pub type Result<T> = std::result::Result<T, patas_storage::StorageError>;
