//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the local-storage database file
    pub database_path: PathBuf,
    /// Base URL fragment resource names are resolved against
    pub fragment_base: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("patas.db"),
            fragment_base: "http://localhost:8080/html/".to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        std::env::var("XDG_DATA_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".local/share"))
            })
            .map(|d| d.join("patas-amigas"))
            .unwrap_or_else(|| PathBuf::from(".patas-amigas"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
