//! Configuration module for the virtual file system.

use serde::Deserialize;
use std::path::Path;

use chrono_tz::Tz;

use crate::{Result, VfsError};

/// Interactive shell configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Timezone for displaying creation times (e.g., "UTC", "Asia/Taipei").
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            timezone: default_timezone(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> String {
    "logs/vfs.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Shell configuration.
    #[serde(default)]
    pub shell: ShellConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(VfsError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| VfsError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `VFS_LOG_LEVEL`: Override the log level
    /// - `VFS_TIMEZONE`: Override the display timezone
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("VFS_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
        if let Ok(timezone) = std::env::var("VFS_TIMEZONE") {
            if !timezone.is_empty() {
                self.shell.timezone = timezone;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the display timezone is not a known IANA name.
    pub fn validate(&self) -> Result<()> {
        if self.shell.timezone.parse::<Tz>().is_err() {
            return Err(VfsError::Config(format!(
                "unknown timezone: {}",
                self.shell.timezone
            )));
        }
        Ok(())
    }
}
