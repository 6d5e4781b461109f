//! Fixed offline fixtures.
//!
//! The `DEMO123` CNR and any court whose name mentions "demo" are answered
//! from here without touching the network, so the CLI and API can be tried
//! out while the portal is down or captcha-locked.

use serde_json::Value;

use crate::config::DEMO_CNR;
use crate::outcome::{CaseDetails, CauseListReport, OutcomeRecord, SampleCase};

/// Whether `cnr` is the demo CNR (case-insensitive).
pub fn is_demo_cnr(cnr: &str) -> bool {
    cnr.trim().eq_ignore_ascii_case(DEMO_CNR)
}

/// Whether `court` names the demo court (case-insensitive substring).
pub fn is_demo_court(court: &str) -> bool {
    court.to_lowercase().contains("demo")
}

/// The demo case, reported under the CNR the caller typed.
pub fn demo_case(cnr: &str) -> OutcomeRecord {
    let case_details = [
        ("case_number", "DEMO/123/2024"),
        ("court_name", "Demo District Court"),
        ("case_type", "Civil Suit"),
        ("filing_date", "15-01-2024"),
        ("status", "Pending"),
        ("next_hearing", "25-10-2025"),
        ("judge", "Hon'ble Justice Demo"),
        ("petitioner", "Demo Petitioner"),
        ("respondent", "Demo Respondent"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
    .collect::<CaseDetails>();

    OutcomeRecord::CaseFound {
        message: "Demo case information retrieved successfully".to_string(),
        cnr: cnr.to_string(),
        case_details,
        status_indicators: vec![
            "Case is listed for hearing".to_string(),
            "Documents filed".to_string(),
            "Notice served".to_string(),
        ],
        demo_mode: true,
    }
}

/// The demo court's cause list for `date`.
pub fn demo_cause_list(date: &str) -> CauseListReport {
    let sample_cases = [
        ("001", "DEMO/001/2024 - Civil Suit", "Listed"),
        ("002", "DEMO/002/2024 - Criminal Case", "Pending"),
        ("003", "DEMO/003/2024 - Family Matter", "Hearing"),
        ("004", "DEMO/004/2024 - Property Dispute", "Listed"),
        ("005", "DEMO/005/2024 - Contract Dispute", "Final Arguments"),
    ]
    .into_iter()
    .map(|(serial, case, status)| SampleCase {
        serial: serial.to_string(),
        case: case.to_string(),
        status: status.to_string(),
    })
    .collect::<Vec<_>>();

    CauseListReport {
        court: "Demo District Court".to_string(),
        date: date.to_string(),
        message: "Connected to eCourts Services".to_string(),
        cause_list_links_found: sample_cases.len(),
        note: Some("Demo cause list with sample cases".to_string()),
        demo_mode: true,
        available_features: vec![
            "Court selection available".to_string(),
            "Date-specific cause lists".to_string(),
            "PDF download capability".to_string(),
        ],
        sample_cases,
    }
}
