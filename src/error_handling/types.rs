//! Error type definitions.
//!
//! This module defines the error types used throughout the application.
//! None of them escape the search core: they are folded into outcome records
//! before reaching the CLI or the API.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures talking to the portal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request did not complete within its timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The connection could not be established.
    #[error("Could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    /// The portal answered with a non-success status code.
    #[error("{url} returned status code: {status}")]
    Status { url: String, status: u16 },

    /// Any other transport or body error.
    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// A URL could not be built or resolved.
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Caller input rejected before any network call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    /// Input field that failed validation
    pub field: &'static str,
    /// Human-readable reason, suitable for a 400 response body
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors raised while talking to the portal outside the classified search
/// flow (cause lists).
#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Error types for writing results to disk.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Creating the output directory or writing the file failed.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be converted to JSON.
    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_messages() {
        let err = NetworkError::Status {
            url: "https://services.ecourts.gov.in".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "https://services.ecourts.gov.in returned status code: 503"
        );

        let err = NetworkError::Timeout {
            url: "https://example.com".to_string(),
        };
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = ValidationError::new("cnr", "Invalid CNR format");
        assert_eq!(err.field, "cnr");
        assert_eq!(err.to_string(), "Invalid CNR format");
    }

    #[test]
    fn test_search_error_is_transparent() {
        let err: SearchError = NetworkError::Timeout {
            url: "https://services.ecourts.gov.in".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Request to https://services.ecourts.gov.in timed out"
        );
    }

    #[test]
    fn test_persistence_error_keeps_path() {
        let err = PersistenceError::Io {
            path: "output/x.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("output/x.json"));
        assert!(msg.contains("denied"));
    }
}
