//! Caller input validation.
//!
//! Runs before any network call; a rejected input never reaches the portal.

use chrono::{Datelike, Local, NaiveDate};

use crate::config::{DATE_FORMAT, DEMO_CNR, MIN_CASE_YEAR, MIN_CNR_LENGTH};
use crate::error_handling::ValidationError;

/// Accepts the demo CNR or any CNR of at least ten characters.
///
/// # Errors
///
/// Returns a [`ValidationError`] for a missing or too-short CNR.
pub fn validate_cnr(cnr: &str) -> Result<(), ValidationError> {
    let cnr = cnr.trim();
    if cnr.is_empty() {
        return Err(ValidationError::new("cnr", "CNR is required"));
    }
    if cnr.eq_ignore_ascii_case(DEMO_CNR) {
        return Ok(());
    }
    if cnr.chars().count() < MIN_CNR_LENGTH {
        return Err(ValidationError::new("cnr", "Invalid CNR format"));
    }
    Ok(())
}

/// Accepts a case triple whose year lies between 1950 and the current year.
///
/// # Errors
///
/// Returns a [`ValidationError`] if any part is blank or the year is out of
/// range.
pub fn validate_case_details(
    case_type: &str,
    case_number: &str,
    case_year: &str,
) -> Result<(), ValidationError> {
    validate_case_details_at(case_type, case_number, case_year, Local::now().year())
}

/// [`validate_case_details`] against a fixed current year.
pub fn validate_case_details_at(
    case_type: &str,
    case_number: &str,
    case_year: &str,
    current_year: i32,
) -> Result<(), ValidationError> {
    let parts: [(&'static str, &str); 3] = [
        ("case_type", case_type),
        ("case_number", case_number),
        ("case_year", case_year),
    ];
    if let Some((field, _)) = parts.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationError::new(*field, "Invalid case details"));
    }

    let year: i32 = case_year
        .trim()
        .parse()
        .map_err(|_| ValidationError::new("case_year", "Invalid case details"))?;
    if !(MIN_CASE_YEAR..=current_year).contains(&year) {
        return Err(ValidationError::new("case_year", "Invalid case details"));
    }
    Ok(())
}

/// Accepts a real calendar date written `DD-MM-YYYY`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for any other shape or an impossible date.
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    let well_shaped = date.len() == 10
        && date
            .char_indices()
            .all(|(i, c)| if i == 2 || i == 5 { c == '-' } else { c.is_ascii_digit() });
    if !well_shaped || NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        return Err(ValidationError::new(
            "date",
            "Invalid date format, expected DD-MM-YYYY",
        ));
    }
    Ok(())
}
