//! Cause list reports.

use serde::{Deserialize, Serialize};

/// One entry of a sample cause list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCase {
    pub serial: String,
    pub case: String,
    pub status: String,
}

/// What is known about a court's cause list for a date.
///
/// Always serialized with `"status": "connected"`: a report only exists once
/// the portal (or the demo fixture) answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename = "connected")]
pub struct CauseListReport {
    pub court: String,
    pub date: String,
    pub message: String,
    /// Links on the portal page whose text mentions a cause list
    pub cause_list_links_found: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub demo_mode: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sample_cases: Vec<SampleCase>,
}
