//! Search requests.

/// What a search is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey {
    /// Case-record number
    Cnr(String),
    /// Case type, number and year
    CaseDetails {
        case_type: String,
        case_number: String,
        case_year: String,
    },
}

/// One search, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    key: SearchKey,
    target_date: String,
    verification_token: Option<String>,
}

impl SearchRequest {
    pub fn cnr(cnr: impl Into<String>, target_date: impl Into<String>) -> Self {
        Self {
            key: SearchKey::Cnr(cnr.into()),
            target_date: target_date.into(),
            verification_token: None,
        }
    }

    pub fn case_details(
        case_type: impl Into<String>,
        case_number: impl Into<String>,
        case_year: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self {
            key: SearchKey::CaseDetails {
                case_type: case_type.into(),
                case_number: case_number.into(),
                case_year: case_year.into(),
            },
            target_date: target_date.into(),
            verification_token: None,
        }
    }

    /// Attaches the caller's captcha response. Blank tokens are ignored.
    pub fn with_verification_token(mut self, token: Option<String>) -> Self {
        self.verification_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn key(&self) -> &SearchKey {
        &self.key
    }

    pub fn target_date(&self) -> &str {
        &self.target_date
    }

    pub fn verification_token(&self) -> Option<&str> {
        self.verification_token.as_deref()
    }

    /// File name stem results of this search are saved under.
    pub fn result_stem(&self) -> String {
        match &self.key {
            SearchKey::Cnr(cnr) => format!("case_result_{}_{}", cnr, self.target_date),
            SearchKey::CaseDetails {
                case_type,
                case_number,
                case_year,
            } => format!(
                "case_result_{}_{}_{}_{}",
                case_type, case_number, case_year, self.target_date
            ),
        }
    }
}

/// File name stem a court's cause list is saved under.
pub fn cause_list_stem(court: &str, date: &str) -> String {
    format!("causelist_{}_{}", court.replace(' ', "_"), date)
}
