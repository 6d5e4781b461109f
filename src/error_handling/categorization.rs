//! Error categorization.
//!
//! Maps `reqwest::Error` values onto [`NetworkError`] variants.

use super::types::NetworkError;

/// Categorizes a `reqwest::Error` into a [`NetworkError`].
///
/// HTTP status codes are checked first, then timeouts, then connection
/// failures; everything else is a generic request error.
///
/// # Arguments
///
/// * `url` - The URL the request was sent to (used in the message)
/// * `error` - The `reqwest::Error` to categorize
pub fn categorize_reqwest_error(url: &str, error: &reqwest::Error) -> NetworkError {
    if let Some(status) = error.status() {
        return NetworkError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        };
    }

    if error.is_timeout() {
        NetworkError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_connect() {
        NetworkError::Connect {
            url: url.to_string(),
            reason: error.to_string(),
        }
    } else if error.is_builder() {
        NetworkError::InvalidUrl {
            url: url.to_string(),
            reason: error.to_string(),
        }
    } else {
        NetworkError::Request {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}
