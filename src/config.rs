//! Configuration handling for the login screen

use crate::state::DEFAULT_DEBOUNCE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the debounce window in milliseconds
pub const DEBOUNCE_ENV: &str = "RX_LOGIN_DEBOUNCE_MS";

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "rx_login=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid RX_LOGIN_DEBOUNCE_MS value {value:?}: expected milliseconds")]
    InvalidDebounce { value: String },
}

/// User configuration for the login screen
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoginConfig {
    /// Quiet window before an edit is validated
    pub debounce_ms: Option<u64>,
    /// Tracing filter directive
    pub log_filter: Option<String>,
    /// Mask the password field
    pub mask_password: Option<bool>,
}

impl LoginConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file, then apply
    /// environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_debounce_override(std::env::var(DEBOUNCE_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply the debounce override if one is set
    pub fn apply_debounce_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(value) = value {
            let ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDebounce {
                    value: value.to_string(),
                })?;
            self.debounce_ms = Some(ms);
        }
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        self.debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "rx-login", "rx-login")
}
