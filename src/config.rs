//! Configuration module for the anonymous board.

use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;

use crate::datetime::{is_valid_format, DEFAULT_FORMAT};
use crate::{BoardError, Result};

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "ANON_BOARD_LOG_LEVEL";

/// Environment variable overriding `display.timezone`.
pub const ENV_TIMEZONE: &str = "ANON_BOARD_TIMEZONE";

/// Board configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Heading shown above the post list.
    #[serde(default = "default_board_name")]
    pub name: String,
}

fn default_board_name() -> String {
    "익명 게시판".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: default_board_name(),
        }
    }
}

/// Display configuration for the console renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Timezone for displaying dates (e.g., "Asia/Seoul", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime-style format for timestamps.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    /// Whether replies are listed under their comment or only counted.
    #[serde(default = "default_expand_replies")]
    pub expand_replies: bool,
}

fn default_timezone() -> String {
    "Asia/Seoul".to_string()
}

fn default_datetime_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_expand_replies() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            datetime_format: default_datetime_format(),
            expand_replies: default_expand_replies(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty means stderr only.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Board configuration.
    #[serde(default)]
    pub board: BoardConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardError::Io)?;
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
        toml::from_str(s).map_err(|e| BoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ANON_BOARD_LOG_LEVEL`: Override the log level
    /// - `ANON_BOARD_TIMEZONE`: Override the display timezone
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
        if let Ok(timezone) = std::env::var(ENV_TIMEZONE) {
            if !timezone.is_empty() {
                self.display.timezone = timezone;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The board name is blank
    /// - The display timezone is not a known IANA name
    /// - The datetime format contains a specifier chrono does not understand
    pub fn validate(&self) -> Result<()> {
        if self.board.name.trim().is_empty() {
            return Err(BoardError::Config("board.name must not be empty".to_string()));
        }
        if self.display.timezone.parse::<Tz>().is_err() {
            return Err(BoardError::Config(format!(
                "unknown timezone: {}",
                self.display.timezone
            )));
        }
        if !is_valid_format(&self.display.datetime_format) {
            return Err(BoardError::Config(format!(
                "invalid datetime_format: {}",
                self.display.datetime_format
            )));
        }
        Ok(())
    }
}
