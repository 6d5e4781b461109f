//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, network, search, validation,
//!   persistence)
//! - Categorization of `reqwest` errors into network error kinds

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    InitializationError, NetworkError, PersistenceError, SearchError, ValidationError,
};
