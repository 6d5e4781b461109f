//! Human-readable CLI output for search results.

use colored::Colorize;

use crate::outcome::{CauseListReport, OutcomeRecord};

/// Lines describing a record, in the order they are printed.
pub fn record_lines(record: &OutcomeRecord) -> Vec<String> {
    let mut lines = Vec::new();
    match record {
        OutcomeRecord::CaseFound {
            message,
            cnr,
            case_details,
            status_indicators,
            ..
        } => {
            lines.push("Case Information Found!".green().bold().to_string());
            lines.push(format!("CNR: {cnr}"));
            lines.push(format!("Message: {message}"));
            if !case_details.is_empty() {
                lines.push(String::new());
                lines.push("Case Details:".to_string());
                for (key, value) in case_details {
                    let value = value
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string());
                    lines.push(format!("  {}: {value}", display_label(key)));
                }
            }
            if !status_indicators.is_empty() {
                lines.push(String::new());
                lines.push("Status Indicators:".to_string());
                for indicator in status_indicators {
                    lines.push(format!("  - {indicator}"));
                }
            }
        }
        OutcomeRecord::NoCaseData { message, cnr, .. } => {
            lines.push("No Case Data Found".yellow().bold().to_string());
            lines.push(format!("CNR: {cnr}"));
            lines.push(format!("Message: {message}"));
        }
        OutcomeRecord::SearchFailed { message, cnr } => {
            lines.push("Search Failed".red().bold().to_string());
            lines.push(format!("CNR: {cnr}"));
            lines.push(format!("Error: {message}"));
        }
        OutcomeRecord::UnexpectedResponse { message, cnr } => {
            lines.push("Unexpected Response".yellow().bold().to_string());
            lines.push(format!("CNR: {cnr}"));
            lines.push(format!("Message: {message}"));
        }
        OutcomeRecord::VerificationRequired {
            message,
            website_status,
            captcha_url,
            ..
        } => {
            lines.push("Captcha Required".yellow().bold().to_string());
            lines.push(format!("Status: {website_status}"));
            lines.push(format!("Message: {message}"));
            if let Some(url) = captcha_url {
                lines.push(format!("Captcha image: {url}"));
            }
            lines.push(
                "Note: pass the captcha text with --captcha-code, or use the HTTP API".to_string(),
            );
        }
        OutcomeRecord::Connected {
            message,
            website_status,
            page_title,
            ..
        } => {
            lines.push("eCourts Connection Successful".green().bold().to_string());
            lines.push(format!("Status: {website_status}"));
            lines.push(format!("Message: {message}"));
            lines.push(format!("Page Title: {page_title}"));
        }
        OutcomeRecord::ConnectionFailed {
            message, reason, ..
        } => {
            lines.push("Connection Failed".red().bold().to_string());
            lines.push(format!("Message: {message}"));
            lines.push(format!("Reason: {reason}"));
        }
        OutcomeRecord::Error { message, .. } => {
            lines.push(format!("{} {message}", "Error:".red().bold()));
        }
    }
    lines
}

/// Lines describing a cause list report.
pub fn cause_list_lines(report: &CauseListReport) -> Vec<String> {
    let mut lines = vec![
        "eCourts Cause List Service".green().bold().to_string(),
        format!("Status: {}", report.message),
        format!("Court: {}", report.court),
        format!("Date: {}", report.date),
    ];
    if let Some(note) = &report.note {
        lines.push(format!("Note: {note}"));
    }
    if !report.demo_mode {
        lines.push(format!(
            "Cause list links found: {}",
            report.cause_list_links_found
        ));
    }
    if !report.sample_cases.is_empty() {
        lines.push(String::new());
        lines.push("Sample Cases:".to_string());
        for case in &report.sample_cases {
            lines.push(format!("  {}: {} - {}", case.serial, case.case, case.status));
        }
    }
    if !report.available_features.is_empty() {
        lines.push(String::new());
        lines.push("Available Features:".to_string());
        for feature in &report.available_features {
            lines.push(format!("  - {feature}"));
        }
    }
    lines
}

/// `next_hearing` -> `Next Hearing`, `case status` -> `Case Status`.
fn display_label(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
