//! Search form data structures.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    /// Reads a form's `method` attribute.
    ///
    /// A missing attribute means POST. A present one is POST only when it says
    /// `post` (any case); every other value, empty included, submits as GET.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            None => FormMethod::Post,
            Some(m) if m.trim().eq_ignore_ascii_case("post") => FormMethod::Post,
            Some(_) => FormMethod::Get,
        }
    }
}

/// Everything needed to submit the portal's search form.
///
/// Derived from a fetched page and discarded after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    /// Absolute submission URL
    pub action: Url,
    pub method: FormMethod,
    /// Every `type="hidden"` input with its original value. Visible inputs
    /// sharing a name do not affect these entries.
    pub hidden: BTreeMap<String, String>,
    /// Field that receives the caller's search key
    pub search_key_field: String,
    /// Field that receives the caller's verification response
    pub token_field: String,
}

impl FormDescriptor {
    /// Hidden inputs with their original values, in name order.
    pub fn hidden_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.hidden
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// A captcha guarding the search form.
///
/// Only ever describes the current attempt; challenges are not cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationChallenge {
    /// Absolute captcha image URL, when an image could be identified
    pub image_url: Option<String>,
}

/// Result of inspecting a page for the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The search input, the captcha input or the form itself is missing.
    NotFound,
    /// The form is present; the captcha input always comes with it.
    Found {
        form: FormDescriptor,
        challenge: VerificationChallenge,
    },
}
