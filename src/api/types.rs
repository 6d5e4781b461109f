//! API request and response bodies.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::Config;

/// Shared state for the API server.
///
/// Holds configuration only; every request builds its own portal session.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Body of `POST /search/cnr`.
#[derive(Debug, Default, Deserialize)]
pub struct CnrSearchBody {
    #[serde(default)]
    pub cnr: Option<String>,
    /// `"today"` (default) or `"tomorrow"`
    #[serde(default)]
    pub date: Option<String>,
    /// Captcha text, when the caller has solved one
    #[serde(default)]
    pub captcha_code: Option<String>,
}

/// Body of `POST /search/case`.
#[derive(Debug, Default, Deserialize)]
pub struct CaseSearchBody {
    #[serde(default, deserialize_with = "string_or_number")]
    pub case_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub case_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub case_year: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Accepts `"2023"` as well as `2023`.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Echo of what was searched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchParams {
    Cnr {
        cnr: String,
        date: String,
    },
    Case {
        case_type: String,
        case_number: String,
        case_year: String,
        date: String,
    },
}

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_params: Option<SearchParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to_file: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub captcha_required: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub demo_data: bool,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            search_params: None,
            saved_to_file: None,
            captcha_required: false,
            demo_data: false,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
