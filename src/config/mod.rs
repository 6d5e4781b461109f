//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (portal URL, timeouts, keyword sets)
//! - Browser request headers
//! - Configuration and CLI option types

mod cli;
mod constants;
mod headers;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, GlobalArgs, SearchArgs, ServeArgs};
pub use constants::*;
pub use headers::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, OutputFormat};
