//! Ordered classification rules.
//!
//! Each rule inspects the result document and either claims it with a record
//! or passes. Rules run in table order and the first claim wins, so explicit
//! failure text is checked before any sign of success.

use log::debug;
use serde_json::Value;

use crate::config::{
    CASE_FIELD_KEYWORDS, COURT_PAGE_KEYWORDS, FAILURE_KEYWORDS, MAX_STATUS_INDICATORS,
    PAGE_SAMPLE_CHARS, STATUS_KEYWORDS, STYLE_DEBRIS_MARKERS, TEXT_BEARING_TAGS,
};
use crate::markup::{stripped_text, Document};
use crate::outcome::{CaseDetails, OutcomeRecord};

/// A named classification step.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&Document, &str) -> Option<OutcomeRecord>,
}

/// Classification rules in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "search_failed",
        apply: search_failed,
    },
    Rule {
        name: "case_found",
        apply: case_found,
    },
    Rule {
        name: "no_case_data",
        apply: no_case_data,
    },
    Rule {
        name: "unexpected_response",
        apply: unexpected_response,
    },
];

/// True if `text` looks like stylesheet or script residue rather than prose.
pub fn looks_like_style_debris(text: &str) -> bool {
    STYLE_DEBRIS_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

/// Stripped texts of elements whose own string mentions a keyword, minus
/// anything that looks like style debris.
fn clean_texts(doc: &Document, keywords: &[&str]) -> Vec<String> {
    doc.elements_with_text(TEXT_BEARING_TAGS, keywords)
        .into_iter()
        .map(stripped_text)
        .filter(|text| {
            let debris = looks_like_style_debris(text);
            if debris {
                debug!("Ignoring style-like text: {text}");
            }
            !debris
        })
        .collect()
}

/// Portal error text such as "Invalid Captcha" or "Record not found".
pub fn search_failed(doc: &Document, search_key: &str) -> Option<OutcomeRecord> {
    let first = clean_texts(doc, FAILURE_KEYWORDS).into_iter().next()?;
    Some(OutcomeRecord::SearchFailed {
        message: format!("Search failed: {first}"),
        cnr: search_key.to_string(),
    })
}

/// Case fields from two-column table rows, plus status indicator texts.
pub fn case_found(doc: &Document, search_key: &str) -> Option<OutcomeRecord> {
    let case_details = case_fields(doc);
    let mut status_indicators = clean_texts(doc, STATUS_KEYWORDS);
    status_indicators.truncate(MAX_STATUS_INDICATORS);

    if case_details.is_empty() && status_indicators.is_empty() {
        return None;
    }

    Some(OutcomeRecord::CaseFound {
        message: "Case information retrieved successfully".to_string(),
        cnr: search_key.to_string(),
        case_details,
        status_indicators,
        demo_mode: false,
    })
}

/// Rows with at least two cells whose (lowercased) first cell names a case
/// field, in page order. A repeated key keeps its first position but takes
/// the later row's value.
fn case_fields(doc: &Document) -> CaseDetails {
    let mut fields = CaseDetails::new();
    for row in doc.table_rows() {
        let [key, value, ..] = row.as_slice() else {
            continue;
        };
        let key = key.to_lowercase();
        if CASE_FIELD_KEYWORDS.iter().any(|kw| key.contains(kw)) {
            fields.insert(key, Value::String(value.clone()));
        }
    }
    fields
}

/// A court page without anything case-specific on it.
pub fn no_case_data(doc: &Document, search_key: &str) -> Option<OutcomeRecord> {
    let text = doc.text();
    let lowered = text.to_lowercase();
    if !COURT_PAGE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return None;
    }

    Some(OutcomeRecord::NoCaseData {
        message: "Connected successfully but no case information found".to_string(),
        cnr: search_key.to_string(),
        page_content_sample: text.chars().take(PAGE_SAMPLE_CHARS).collect(),
    })
}

/// Catch-all for pages none of the other rules recognise.
pub fn unexpected_response(_doc: &Document, search_key: &str) -> Option<OutcomeRecord> {
    Some(unexpected(search_key))
}

pub(super) fn unexpected(search_key: &str) -> OutcomeRecord {
    OutcomeRecord::UnexpectedResponse {
        message: "Received unexpected response from eCourts".to_string(),
        cnr: search_key.to_string(),
    }
}
