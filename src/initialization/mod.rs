//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The logger
//! - Per-search HTTP clients

mod client;
mod logger;

// Re-export public API
pub use client::init_session_client;
pub use logger::init_logger_with;
