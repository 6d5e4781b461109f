//! Result page classification.
//!
//! The portal's result markup has no stable schema, so classification is a
//! keyword-driven rule table (see [`RULES`]). The first rule that claims the
//! document decides the outcome; the last rule claims everything.

mod rules;

use log::info;

use crate::markup::Document;
use crate::outcome::OutcomeRecord;

pub use rules::{
    case_found, looks_like_style_debris, no_case_data, search_failed, unexpected_response, Rule,
    RULES,
};

/// Classifies a search result document.
pub fn classify(doc: &Document, search_key: &str) -> OutcomeRecord {
    let verdict = RULES
        .iter()
        .find_map(|rule| (rule.apply)(doc, search_key).map(|record| (rule.name, record)));

    match verdict {
        Some((name, record)) => {
            info!("Result page classified by rule '{name}'");
            record
        }
        None => rules::unexpected(search_key),
    }
}

/// Parses a raw response body and classifies it.
pub fn classify_bytes(body: &[u8], search_key: &str) -> OutcomeRecord {
    let doc = Document::parse_bytes(body);
    classify(&doc, search_key)
}
