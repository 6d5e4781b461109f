//! Fetched page data.

use std::borrow::Cow;

use url::Url;

/// Raw HTML of a fetched page plus the URL it was finally served from.
///
/// Relative links on the page (form actions, captcha images) resolve against
/// `base_url`.
#[derive(Debug, Clone)]
pub struct PortalPage {
    base_url: Url,
    status: u16,
    body: Vec<u8>,
}

impl PortalPage {
    pub fn new(base_url: Url, status: u16, body: Vec<u8>) -> Self {
        Self {
            base_url,
            status,
            body,
        }
    }

    /// URL the page was served from, after redirects.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn html(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// First `max_chars` characters of the body, for debug logging.
    pub fn preview(&self, max_chars: usize) -> String {
        self.html().chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &[u8]) -> PortalPage {
        PortalPage::new(
            Url::parse("https://services.ecourts.gov.in/").unwrap(),
            200,
            body.to_vec(),
        )
    }

    #[test]
    fn test_html_replaces_invalid_utf8() {
        let p = page(b"<p>ok\xff</p>");
        assert_eq!(p.html(), "<p>ok\u{fffd}</p>");
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let p = page("नमस्ते court".as_bytes());
        assert_eq!(p.preview(3).chars().count(), 3);
        assert_eq!(p.preview(1000), "नमस्ते court");
    }
}
