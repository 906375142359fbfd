//! Optional settings shared by all utilities
//!
//! Settings come from, in increasing priority:
//! 1. Built-in defaults
//! 2. A TOML file: the path given with `--config`, or `config.toml` in the
//!    platform config directory when it exists
//! 3. `SMART_UTILS_*` environment variables

use crate::error::{ErrorCode, UtilityError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_LOG_LEVEL: &str = "SMART_UTILS_LOG_LEVEL";
pub const ENV_MAX_ATTEMPTS: &str = "SMART_UTILS_MAX_ATTEMPTS";

/// Directory holding the default `config.toml`
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "smart-utilities", "smart-utilities")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Log filter used when no `-v` flag is given
    pub log_level: Option<String>,
    /// Invalid answers tolerated per prompt, unlimited when unset
    pub max_attempts: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: Some("warn".to_string()),
            max_attempts: None,
        }
    }
}

impl Settings {
    /// Load settings from an explicit file or the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self, UtilityError> {
        let mut settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match get_config_dir().map(|dir| dir.join("config.toml")) {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        settings.merge_env_vars();
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a TOML settings file
    pub fn from_file(path: &Path) -> Result<Self, UtilityError> {
        debug!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            UtilityError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                "Cannot read configuration file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            UtilityError::Config {
                code,
                message,
                source,
                ..
            } => UtilityError::Config {
                code,
                message,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, UtilityError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `SMART_UTILS_*` overrides, ignoring unparsable values
    pub fn merge_env_vars(&mut self) {
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }

        if let Ok(attempts) = std::env::var(ENV_MAX_ATTEMPTS) {
            if let Ok(value) = attempts.parse::<u32>() {
                self.max_attempts = Some(value);
            }
        }
    }

    pub fn validate(&self) -> Result<(), UtilityError> {
        if self.max_attempts == Some(0) {
            return Err(UtilityError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "max_attempts must be at least 1",
                None,
            ));
        }
        Ok(())
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}
