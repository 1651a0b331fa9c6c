//! Theme state machine and persistence

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use patas_storage::LocalStore;

use crate::Result;

pub const THEME_PREFERENCE_KEY: &str = "themePreference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeState {
    /// Default theme, no body class applied
    Light,
    /// Dark palette
    DarkMode,
    /// High-contrast palette for accessibility
    HighContrastMode,
}

impl ThemeState {
    /// Next theme in the toggle cycle
    pub fn advance(&self) -> ThemeState {
        match self {
            ThemeState::Light => ThemeState::DarkMode,
            ThemeState::DarkMode => ThemeState::HighContrastMode,
            ThemeState::HighContrastMode => ThemeState::Light,
        }
    }

    /// Body class this theme applies; the light theme applies none.
    pub fn body_class(&self) -> Option<&'static str> {
        match self {
            ThemeState::Light => None,
            ThemeState::DarkMode => Some("dark-mode"),
            ThemeState::HighContrastMode => Some("high-contrast-mode"),
        }
    }

    /// Icon shown on the toggle control for this theme.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ThemeState::Light => "🌙",
            ThemeState::DarkMode => "☀️",
            ThemeState::HighContrastMode => "◐",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::DarkMode => "dark-mode",
            ThemeState::HighContrastMode => "high-contrast-mode",
        }
    }
}

impl std::fmt::Display for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeState::Light),
            "dark-mode" => Ok(ThemeState::DarkMode),
            "high-contrast-mode" => Ok(ThemeState::HighContrastMode),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState::Light
    }
}

/// Owns the current theme and keeps the persisted preference in sync.
pub struct ThemeController {
    state: Arc<RwLock<ThemeState>>,
    store: LocalStore,
}

impl ThemeController {
    /// Restore the persisted preference, falling back to light for a missing
    /// or unrecognized value.
    pub fn load(store: LocalStore) -> Result<Self> {
        let state = store
            .get_item(THEME_PREFERENCE_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            store,
        })
    }

    pub fn current(&self) -> ThemeState {
        *self.state.read()
    }

    /// Advance to the next theme and persist the new preference.
    pub fn advance(&self) -> Result<ThemeState> {
        let next = self.current().advance();
        *self.state.write() = next;
        self.persist()?;

        tracing::debug!(theme = %next, "Theme advanced");

        Ok(next)
    }

    pub fn persist(&self) -> Result<()> {
        self.store
            .set_item(THEME_PREFERENCE_KEY, self.current().as_str())
    }
}

impl Clone for ThemeController {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: self.store.clone(),
        }
    }
}
