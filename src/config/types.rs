//! Configuration types and CLI option enums.
//!
//! This module defines the enums and structs shared by the CLI, the API
//! server and the library.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_OUTPUT_DIR, DEFAULT_PORTAL_URL,
    DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS, SUBMIT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// On-disk format for saved search results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Flattened key/value text dump
    Text,
}

impl OutputFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// Shared by the CLI and the API server. Construct it directly or start from
/// `Config::default()` and override fields.
///
/// # Examples
///
/// ```no_run
/// use ecourts_scraper::Config;
///
/// let config = Config {
///     portal_url: "https://services.ecourts.gov.in".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal page that hosts the search form
    pub portal_url: String,

    /// Timeout for the initial page load, in seconds
    pub fetch_timeout_seconds: u64,

    /// Timeout for the search submission, in seconds
    pub submit_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Directory results are written to
    pub output_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// API bind host
    pub api_host: String,

    /// API bind port
    pub api_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal_url: DEFAULT_PORTAL_URL.to_string(),
            fetch_timeout_seconds: FETCH_TIMEOUT_SECS,
            submit_timeout_seconds: SUBMIT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted instead
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks the configuration for values that would make every search fail.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.fetch_timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "fetch_timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.submit_timeout_seconds < self.fetch_timeout_seconds {
            return Err(ConfigValidationError {
                field: "submit_timeout_seconds",
                message: format!(
                    "must be at least the fetch timeout ({}s)",
                    self.fetch_timeout_seconds
                ),
            });
        }
        match url::Url::parse(&self.portal_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigValidationError {
                    field: "portal_url",
                    message: format!("unsupported scheme '{}', expected http or https", parsed.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigValidationError {
                    field: "portal_url",
                    message: format!("not a valid URL: {e}"),
                });
            }
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "output_dir",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Timeout applied to the initial portal page load.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Timeout applied to the search submission.
    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_seconds)
    }
}
