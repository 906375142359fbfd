//! Application configuration
//!
//! Combines command-line flags with the settings file and environment.

use crate::app::cli::CommonArgs;
use crate::config::Settings;
use crate::error::UtilityError;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Settings resolved from file and environment
    pub settings: Settings,
}

impl AppConfig {
    /// Resolve configuration from parsed arguments
    pub fn from_args(args: &CommonArgs) -> Result<Self, UtilityError> {
        let settings = Settings::load(args.config.as_deref())?;
        Ok(Self::new(args.verbose, settings))
    }

    pub fn new(verbose: u8, settings: Settings) -> Self {
        Self { verbose, settings }
    }

    /// Override the attempt limit when one is given
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        if max_attempts.is_some() {
            self.settings.max_attempts = max_attempts;
        }
        self
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.settings.max_attempts
    }

    /// Get the log filter based on verbosity, falling back to the settings
    pub fn log_level(&self) -> &str {
        match self.verbose {
            0 => self.settings.log_level(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(0, Settings::default())
    }
}
