//! HTML parsing and content extraction.
//!
//! Wraps `scraper` with the handful of queries the form locator and the result
//! classifier need: element lookup by tag and attribute, keyword search over
//! element text, table rows as cell lists, and full page text.

mod document;
mod selector;

pub use document::{own_string, stripped_text, Document};
pub use selector::parse_selector_with_fallback;
