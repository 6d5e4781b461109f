//! Mapping raw search outcomes onto the published record shape.

use log::debug;

use super::record::OutcomeRecord;

const PORTAL_STATUS: &str = "Connected to eCourts Services";
const CAPTCHA_STATUS: &str = "Captcha verification required";
const CAPTCHA_MESSAGE: &str = "eCourts search form found but requires captcha verification";
const CONNECTED_STATUS: &str = "Connected to eCourts";
const CONNECTED_MESSAGE: &str = "Successfully connected to eCourts website";
const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to eCourts";

/// What a search produced before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The form is guarded by a captcha and no response was supplied.
    ChallengePending { captcha_url: Option<String> },
    /// The portal page loaded; no search was submitted.
    PortalReached { page_title: String },
    /// A result page was submitted for and classified.
    Classified(OutcomeRecord),
    /// The portal page could not be loaded.
    Unreachable(String),
    /// Anything else that stopped the search.
    Failed(String),
}

/// Relabels a search outcome for CLI and API consumers.
///
/// Pure: no network access, no re-classification. Classified records pass
/// through untouched; every other outcome gets a status line and the
/// target date.
pub fn normalize(outcome: SearchOutcome, target_date: &str) -> OutcomeRecord {
    let record = match outcome {
        SearchOutcome::ChallengePending { captcha_url } => OutcomeRecord::VerificationRequired {
            message: CAPTCHA_MESSAGE.to_string(),
            date: target_date.to_string(),
            website_status: PORTAL_STATUS.to_string(),
            captcha_status: CAPTCHA_STATUS.to_string(),
            captcha_url,
        },
        SearchOutcome::PortalReached { page_title } => OutcomeRecord::Connected {
            message: CONNECTED_MESSAGE.to_string(),
            date: target_date.to_string(),
            website_status: CONNECTED_STATUS.to_string(),
            page_title,
        },
        SearchOutcome::Classified(record) => record,
        SearchOutcome::Unreachable(reason) => OutcomeRecord::ConnectionFailed {
            message: CONNECTION_FAILED_MESSAGE.to_string(),
            date: target_date.to_string(),
            reason,
        },
        SearchOutcome::Failed(message) => OutcomeRecord::Error {
            message,
            date: Some(target_date.to_string()),
        },
    };
    debug!("Normalized search outcome to '{}'", record.status());
    record
}
