//! Target date selection.

use chrono::{Days, Local, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::DATE_FORMAT;

/// Which day's listing to check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateChoice {
    #[default]
    Today,
    Tomorrow,
}

impl DateChoice {
    /// Reads the API's `date` field: `"tomorrow"` selects tomorrow, anything
    /// else (including a missing field) selects today.
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some("tomorrow") => DateChoice::Tomorrow,
            _ => DateChoice::Today,
        }
    }

    /// The chosen day as `DD-MM-YYYY`, relative to the local date.
    pub fn resolve(self) -> String {
        self.resolve_from(Local::now().date_naive())
    }

    /// The chosen day as `DD-MM-YYYY`, relative to `today`.
    pub fn resolve_from(self, today: NaiveDate) -> String {
        let day = match self {
            DateChoice::Today => today,
            DateChoice::Tomorrow => today.checked_add_days(Days::new(1)).unwrap_or(today),
        };
        format_date(day)
    }
}

/// Formats a date the way the portal writes it (`DD-MM-YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "07-03-2026");
    }

    #[test]
    fn test_tomorrow_crosses_year_end() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(DateChoice::Today.resolve_from(today), "31-12-2025");
        assert_eq!(DateChoice::Tomorrow.resolve_from(today), "01-01-2026");
    }

    #[test]
    fn test_from_api() {
        assert_eq!(DateChoice::from_api(Some("tomorrow")), DateChoice::Tomorrow);
        assert_eq!(DateChoice::from_api(Some("today")), DateChoice::Today);
        assert_eq!(DateChoice::from_api(Some("Tomorrow")), DateChoice::Today);
        assert_eq!(DateChoice::from_api(None), DateChoice::Today);
    }
}
