//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! portal locations, timeouts, form field names, and the keyword sets the
//! result classifier matches against.

use std::time::Duration;

/// Services portal that hosts the CNR search form.
pub const DEFAULT_PORTAL_URL: &str = "https://services.ecourts.gov.in";

/// Directory that search results are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// API bind address defaults.
pub const DEFAULT_API_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_PORT: u16 = 5000;

// Network operation timeouts
/// Timeout for the initial portal page load, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;
/// Timeout for the search submission, in seconds.
/// Longer than the fetch timeout: the portal does the actual lookup here.
pub const SUBMIT_TIMEOUT_SECS: u64 = 15;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default User-Agent string for portal requests.
///
/// The portal rejects clients that do not look like a browser, so this mimics
/// a desktop Chrome build. Users can override it via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Search form field names
/// Name of the CNR input on the portal's search form.
pub const CNR_FIELD: &str = "cino";
/// Name of the captcha response input on the portal's search form.
pub const CAPTCHA_FIELD: &str = "fcaptcha_code";
/// Substring (case-insensitive) that identifies the captcha image.
pub const CAPTCHA_MARKER: &str = "captcha";

// Result classification keyword sets
/// Text that signals the portal rejected the search.
pub const FAILURE_KEYWORDS: &[&str] = &["error", "invalid", "not found", "incorrect"];
/// First-cell text (lowercased) that marks a table row as a case field.
pub const CASE_FIELD_KEYWORDS: &[&str] = &["case", "court", "status", "date", "judge"];
/// Text that marks an element as a case status indicator.
pub const STATUS_KEYWORDS: &[&str] = &["listed", "pending", "disposed", "hearing"];
/// Page text (lowercased) that shows we reached a court page at all.
pub const COURT_PAGE_KEYWORDS: &[&str] = &["case", "court"];
/// Tokens that mark text as stylesheet or script debris rather than content.
pub const STYLE_DEBRIS_MARKERS: &[&str] = &[
    "{", "}", "padding:", "margin:", "border:", "color:", "font-",
];
/// Elements whose own text is inspected for failure and status keywords.
pub const TEXT_BEARING_TAGS: &[&str] = &["div", "span", "p", "td"];

/// Maximum number of status indicators reported for a found case.
pub const MAX_STATUS_INDICATORS: usize = 5;
/// Length of the page text sample attached to a connected-but-empty result.
pub const PAGE_SAMPLE_CHARS: usize = 500;
/// Length of the response preview written to the debug log.
pub const RESPONSE_PREVIEW_CHARS: usize = 1000;

/// Fallback title when the portal page has no `<title>`.
pub const DEFAULT_PAGE_TITLE: &str = "eCourts Services";

/// CNR that returns the fixed demo case without touching the network.
pub const DEMO_CNR: &str = "DEMO123";

/// Minimum CNR length accepted by validation.
pub const MIN_CNR_LENGTH: usize = 10;
/// Earliest case year accepted by validation.
pub const MIN_CASE_YEAR: i32 = 1950;

/// Date format used for every target date (`DD-MM-YYYY`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Anchor text (lowercased) that marks a cause list link on the portal.
pub const CAUSE_LIST_MARKER: &str = "cause list";

/// Error message when the portal page has no CNR search form.
pub const FORM_NOT_FOUND_MESSAGE: &str = "CNR search form not found on services page";
