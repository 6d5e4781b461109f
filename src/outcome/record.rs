//! Tagged search result records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Case fields in the order the result page lists them.
pub type CaseDetails = Map<String, Value>;

/// Result of one search attempt, as persisted and returned by the API.
///
/// Serialized with the tag in a `"status"` field. Each variant carries only
/// the fields of its own contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeRecord {
    /// The search form is guarded by a captcha and no response was supplied.
    #[serde(rename = "captcha_required")]
    VerificationRequired {
        message: String,
        date: String,
        website_status: String,
        captcha_status: String,
        captcha_url: Option<String>,
    },

    /// The result page carried case fields or status indicators.
    CaseFound {
        message: String,
        cnr: String,
        case_details: CaseDetails,
        status_indicators: Vec<String>,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        demo_mode: bool,
    },

    /// A court page came back but nothing case-specific was on it.
    NoCaseData {
        message: String,
        cnr: String,
        page_content_sample: String,
    },

    /// The portal rejected the search (bad CNR, wrong captcha, ...).
    SearchFailed { message: String, cnr: String },

    /// The portal was reached; no search result was classified.
    Connected {
        message: String,
        date: String,
        website_status: String,
        page_title: String,
    },

    /// The portal page could not be loaded.
    ConnectionFailed {
        message: String,
        date: String,
        reason: String,
    },

    /// The response matched none of the known result shapes.
    UnexpectedResponse { message: String, cnr: String },

    /// The search could not be carried out.
    Error {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
}

impl OutcomeRecord {
    /// The serialized tag of this record.
    pub fn status(&self) -> &'static str {
        match self {
            OutcomeRecord::VerificationRequired { .. } => "captcha_required",
            OutcomeRecord::CaseFound { .. } => "case_found",
            OutcomeRecord::NoCaseData { .. } => "no_case_data",
            OutcomeRecord::SearchFailed { .. } => "search_failed",
            OutcomeRecord::Connected { .. } => "connected",
            OutcomeRecord::ConnectionFailed { .. } => "connection_failed",
            OutcomeRecord::UnexpectedResponse { .. } => "unexpected_response",
            OutcomeRecord::Error { .. } => "error",
        }
    }

    /// Human-readable status line carried by every record.
    pub fn message(&self) -> &str {
        match self {
            OutcomeRecord::VerificationRequired { message, .. }
            | OutcomeRecord::CaseFound { message, .. }
            | OutcomeRecord::NoCaseData { message, .. }
            | OutcomeRecord::SearchFailed { message, .. }
            | OutcomeRecord::Connected { message, .. }
            | OutcomeRecord::ConnectionFailed { message, .. }
            | OutcomeRecord::UnexpectedResponse { message, .. }
            | OutcomeRecord::Error { message, .. } => message,
        }
    }

    /// Whether the search could not be carried out at all.
    ///
    /// The API answers these with a 500.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            OutcomeRecord::Error { .. } | OutcomeRecord::ConnectionFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_is_serialized_as_status() {
        let record = OutcomeRecord::SearchFailed {
            message: "Search failed: Invalid CNR".to_string(),
            cnr: "ABCD0100000012023".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "search_failed",
                "message": "Search failed: Invalid CNR",
                "cnr": "ABCD0100000012023",
            })
        );
        assert_eq!(record.status(), "search_failed");
    }

    #[test]
    fn test_verification_required_uses_captcha_tag() {
        let record = OutcomeRecord::VerificationRequired {
            message: "m".to_string(),
            date: "01-02-2025".to_string(),
            website_status: "w".to_string(),
            captcha_status: "c".to_string(),
            captcha_url: None,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "captcha_required");
        assert_eq!(value["captcha_url"], serde_json::Value::Null);
        assert!(value.get("page_title").is_none());
    }

    #[test]
    fn test_demo_flag_only_serialized_when_set() {
        let mut record = OutcomeRecord::CaseFound {
            message: "found".to_string(),
            cnr: "CNR".to_string(),
            case_details: CaseDetails::new(),
            status_indicators: vec![],
            demo_mode: false,
        };
        assert!(serde_json::to_value(&record).unwrap().get("demo_mode").is_none());

        if let OutcomeRecord::CaseFound { demo_mode, .. } = &mut record {
            *demo_mode = true;
        }
        assert_eq!(serde_json::to_value(&record).unwrap()["demo_mode"], true);
    }

    #[test]
    fn test_record_deserializes_from_saved_json() {
        let saved = json!({
            "status": "no_case_data",
            "message": "Connected successfully but no case information found",
            "cnr": "X",
            "page_content_sample": "District Court",
        });
        let record: OutcomeRecord = serde_json::from_value(saved).unwrap();
        assert!(matches!(record, OutcomeRecord::NoCaseData { .. }));
        assert!(!record.is_failure());
    }

    #[test]
    fn test_failure_tags() {
        let error = OutcomeRecord::Error {
            message: "boom".to_string(),
            date: None,
        };
        assert!(error.is_failure());
        assert!(serde_json::to_value(&error).unwrap().get("date").is_none());
        assert_eq!(error.message(), "boom");
    }
}
