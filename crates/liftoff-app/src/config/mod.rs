//! Configuration for Liftoff
//!
//! Settings live in `<config_dir>/liftoff/config.toml`. Every section and
//! field is optional; a missing or unparseable file falls back to defaults
//! with a warning, never an error.

use std::path::{Path, PathBuf};

use liftoff_core::prelude::*;
use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::feed::DEFAULT_PAGE_SIZE;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "liftoff";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub fetch: FetchSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Fetch/pagination settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchSettings {
    /// Records per page request
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Root of the launches API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            api_base_url: default_api_base_url(),
        }
    }
}

/// Search settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Quiescence window before a typed query becomes effective
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Rows from the bottom of the list at which the next page is requested
    #[serde(default = "default_fetch_threshold")]
    pub fetch_threshold: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            fetch_threshold: default_fetch_threshold(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_api_base_url() -> String {
    liftoff_api::DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_fetch_threshold() -> usize {
    3
}

/// Load settings from the user config directory, falling back to defaults.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory available, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit path, falling back to defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}
