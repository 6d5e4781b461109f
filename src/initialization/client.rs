//! HTTP client initialization.
//!
//! Every search builds its own client so cookies set by the portal on the
//! page load carry over to the form submission, and never leak into another
//! caller's search.

use reqwest::ClientBuilder;

use crate::config::{browser_header_map, Config, TCP_CONNECT_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes an HTTP client for one search session.
///
/// Creates a `reqwest::Client` configured with:
/// - A private cookie store (session state carries from fetch to submit)
/// - Browser-like default headers and the configured User-Agent
/// - A TCP connect timeout (per-request timeouts are set by the caller)
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_session_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .cookie_store(true)
        .default_headers(browser_header_map())
        .user_agent(config.user_agent.clone())
        .connect_timeout(TCP_CONNECT_TIMEOUT)
        .build()?;
    Ok(client)
}
