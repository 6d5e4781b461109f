//! Portal session management.
//!
//! A [`PortalSession`] owns one HTTP client with its own cookie jar. The same
//! session must be used for the page load and the form submission of a single
//! search, because the portal ties the captcha and hidden form state to the
//! session cookie. Sessions are never shared between searches.
//!
//! No request is retried: a failed fetch is reported to the caller at once.

mod page;

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error_handling::{categorize_reqwest_error, InitializationError, NetworkError};
use crate::initialization::init_session_client;

pub use page::PortalPage;

/// A single search's connection context with the portal.
#[derive(Debug, Clone)]
pub struct PortalSession {
    client: reqwest::Client,
    fetch_timeout: Duration,
    submit_timeout: Duration,
}

impl PortalSession {
    /// Builds a fresh session (new client, empty cookie jar).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_session_client(config)?,
            fetch_timeout: config.fetch_timeout(),
            submit_timeout: config.submit_timeout(),
        })
    }

    /// Loads a portal page with the fetch timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkError`] on connection failure, timeout, or a
    /// non-2xx status.
    pub async fn fetch(&self, url: &str) -> Result<PortalPage, NetworkError> {
        info!("Fetching portal page {url}");
        let builder = self.client.get(url).timeout(self.fetch_timeout);
        self.execute(url, builder).await
    }

    /// Submits form fields as a query string on a GET request.
    pub async fn submit_get(
        &self,
        url: &Url,
        fields: &BTreeMap<String, String>,
    ) -> Result<PortalPage, NetworkError> {
        let builder = self
            .client
            .get(url.clone())
            .query(fields)
            .timeout(self.submit_timeout);
        self.execute(url.as_str(), builder).await
    }

    /// Submits form fields as an urlencoded POST body.
    pub async fn submit_post(
        &self,
        url: &Url,
        fields: &BTreeMap<String, String>,
    ) -> Result<PortalPage, NetworkError> {
        let builder = self
            .client
            .post(url.clone())
            .form(fields)
            .timeout(self.submit_timeout);
        self.execute(url.as_str(), builder).await
    }

    async fn execute(
        &self,
        url: &str,
        builder: reqwest::RequestBuilder,
    ) -> Result<PortalPage, NetworkError> {
        let response = builder
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(url, &e))?;

        let status = response.status();
        let final_url = response.url().clone();
        debug!("{url} answered {status} (final URL {final_url})");

        if !status.is_success() {
            return Err(NetworkError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(url, &e))?;

        Ok(PortalPage::new(final_url, status.as_u16(), body.to_vec()))
    }
}
