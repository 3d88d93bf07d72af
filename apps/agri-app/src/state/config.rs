//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AGRI_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization. The language and dark mode values only
//! seed the navigator's preferences; later changes live there.

use std::path::PathBuf;
use std::time::Duration;

use agri_core::{Language, ANALYSIS_DELAY_MS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::error::InitError;

const DB_FILE_NAME: &str = "agri.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Storage file override. `None` uses the platform data directory.
    #[ts(as = "Option<String>")]
    pub database_path: Option<PathBuf>,

    /// How long the simulated analysis takes.
    pub analysis_delay_ms: u64,

    /// Language selected when the app starts.
    pub default_language: Language,

    /// Whether the app starts in dark mode.
    pub dark_mode: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            database_path: None,
            analysis_delay_ms: ANALYSIS_DELAY_MS,
            default_language: Language::English,
            dark_mode: false,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `AGRI_DB_PATH`: storage file path
    /// - `AGRI_ANALYSIS_DELAY_MS`: analysis delay in milliseconds
    /// - `AGRI_LANGUAGE`: language code (en, hi, mr, ta, od, bn)
    /// - `AGRI_DARK_MODE`: `true` or `false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Unparseable values are logged and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("AGRI_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("AGRI_ANALYSIS_DELAY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.analysis_delay_ms = ms,
                Err(_) => warn!(value = %raw, "Ignoring invalid AGRI_ANALYSIS_DELAY_MS"),
            }
        }

        if let Some(raw) = lookup("AGRI_LANGUAGE") {
            match raw.parse::<Language>() {
                Ok(language) => config.default_language = language,
                Err(_) => warn!(value = %raw, "Ignoring unknown AGRI_LANGUAGE"),
            }
        }

        if let Some(raw) = lookup("AGRI_DARK_MODE") {
            match raw.trim().to_lowercase().as_str() {
                "true" | "1" => config.dark_mode = true,
                "false" | "0" => config.dark_mode = false,
                _ => warn!(value = %raw, "Ignoring invalid AGRI_DARK_MODE"),
            }
        }

        config
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Resolves the storage file path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.smartagri.yield/agri.db`
    /// - **Windows**: `%APPDATA%\smartagri\yield\data\agri.db`
    /// - **Linux**: `~/.local/share/yield/agri.db`
    pub fn resolve_database_path(&self) -> Result<PathBuf, InitError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "smartagri", "yield").ok_or(InitError::NoDataDir)?;
        Ok(dirs.data_dir().join(DB_FILE_NAME))
    }
}
