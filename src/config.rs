use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "STATUSVIEW_CONFIG";
pub const LOG_LEVEL_ENV: &str = "STATUSVIEW_LOG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

/// Display preferences for the status viewer, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub autoplay_gif: bool,
    pub expand_media: bool,
    pub square_media: bool,
    pub log_file: PathBuf,
    pub log_level: String,
    /// Overrides for localized messages, keyed by message id.
    pub messages: HashMap<String, String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            autoplay_gif: true,
            expand_media: false,
            square_media: false,
            log_file: PathBuf::from("statusview.log"),
            log_level: "info".to_string(),
            messages: HashMap::new(),
        }
    }
}

impl ViewerConfig {
    /// Loads the config at `$STATUSVIEW_CONFIG`, or `config.json`.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.json"));
        let mut config = Self::load_from(&path)?;
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
