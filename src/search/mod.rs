//! Search orchestration.
//!
//! A search runs fetch, locate, submit and classify in sequence over its own
//! [`PortalSession`]. Nothing is shared between searches, so concurrent API
//! requests need no locking and cannot see each other's cookies.
//!
//! Parsed documents are confined to the synchronous helpers at the bottom of
//! this file and never held across an `.await`.

mod date;
mod request;

use std::sync::Arc;

use log::{debug, info, warn};

use crate::classify::classify_bytes;
use crate::config::{
    Config, CAUSE_LIST_MARKER, DEFAULT_PAGE_TITLE, FORM_NOT_FOUND_MESSAGE, RESPONSE_PREVIEW_CHARS,
};
use crate::demo;
use crate::error_handling::SearchError;
use crate::form::{self, FormOutcome};
use crate::markup::Document;
use crate::outcome::{normalize, CauseListReport, OutcomeRecord, SearchOutcome};
use crate::session::{PortalPage, PortalSession};

pub use date::{format_date, DateChoice};
pub use request::{cause_list_stem, SearchKey, SearchRequest};

/// Runs case searches against the configured portal.
#[derive(Debug, Clone)]
pub struct CaseSearch {
    config: Arc<Config>,
}

impl CaseSearch {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a request and returns its normalized record.
    pub async fn run(&self, request: &SearchRequest) -> OutcomeRecord {
        let outcome = match request.key() {
            SearchKey::Cnr(cnr) => {
                self.search_by_cnr(cnr, request.verification_token())
                    .await
            }
            SearchKey::CaseDetails {
                case_type,
                case_number,
                case_year,
            } => {
                self.search_by_case_details(case_type, case_number, case_year)
                    .await
            }
        };
        normalize(outcome, request.target_date())
    }

    /// Searches by CNR.
    ///
    /// Without a verification token the search stops at the captcha and
    /// reports [`SearchOutcome::ChallengePending`]. With one, the form is
    /// submitted through the session that loaded it and the result page is
    /// classified. The demo CNR is answered without any network access.
    pub async fn search_by_cnr(&self, cnr: &str, token: Option<&str>) -> SearchOutcome {
        if demo::is_demo_cnr(cnr) {
            info!("Answering demo CNR {cnr} from fixtures");
            return SearchOutcome::Classified(demo::demo_case(cnr));
        }

        info!("Searching by CNR: {cnr}");
        let session = match PortalSession::new(&self.config) {
            Ok(session) => session,
            Err(e) => return SearchOutcome::Failed(e.to_string()),
        };

        let page = match session.fetch(&self.config.portal_url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Portal unreachable: {e}");
                return SearchOutcome::Unreachable(e.to_string());
            }
        };
        info!("Connected to portal ({})", page.status());

        let (form, challenge) = match inspect_form(&page) {
            FormOutcome::NotFound => return SearchOutcome::Failed(FORM_NOT_FOUND_MESSAGE.to_string()),
            FormOutcome::Found { form, challenge } => (form, challenge),
        };

        let Some(token) = token.filter(|t| !t.is_empty()) else {
            info!("Captcha required; stopping before submission");
            return SearchOutcome::ChallengePending {
                captcha_url: challenge.image_url,
            };
        };

        match form::submit(&session, &form, cnr, token).await {
            Ok(result) => {
                info!("Got search response, classifying");
                debug!(
                    "Search response preview: {}",
                    result.preview(RESPONSE_PREVIEW_CHARS)
                );
                SearchOutcome::Classified(classify_bytes(result.body(), cnr))
            }
            Err(e) => {
                warn!("Search submission failed: {e}");
                SearchOutcome::Failed(format!("Search submission failed: {e}"))
            }
        }
    }

    /// Checks the portal for a case-details search.
    ///
    /// The portal's case-details form is not submitted; reaching the portal
    /// page is reported with its title.
    pub async fn search_by_case_details(
        &self,
        case_type: &str,
        case_number: &str,
        case_year: &str,
    ) -> SearchOutcome {
        info!("Searching case: {case_type}/{case_number}/{case_year}");
        let session = match PortalSession::new(&self.config) {
            Ok(session) => session,
            Err(e) => return SearchOutcome::Failed(e.to_string()),
        };

        match session.fetch(&self.config.portal_url).await {
            Ok(page) => SearchOutcome::PortalReached {
                page_title: page_title(&page),
            },
            Err(e) => {
                warn!("Portal unreachable: {e}");
                SearchOutcome::Unreachable(e.to_string())
            }
        }
    }

    /// Looks up a court's cause list for `date`.
    ///
    /// Demo courts are answered from fixtures. For any other court the portal
    /// page is loaded and its cause list links are counted.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the session cannot be built or the portal
    /// cannot be reached.
    pub async fn cause_list(&self, court: &str, date: &str) -> Result<CauseListReport, SearchError> {
        if demo::is_demo_court(court) {
            info!("Answering demo court '{court}' from fixtures");
            return Ok(demo::demo_cause_list(date));
        }

        info!("Fetching cause list for '{court}' on {date}");
        let session = PortalSession::new(&self.config)?;
        let page = session.fetch(&self.config.portal_url).await?;
        let links = count_cause_list_links(&page);
        info!("Found {links} cause list links");

        Ok(CauseListReport {
            court: court.to_string(),
            date: date.to_string(),
            message: "Connected to eCourts Services".to_string(),
            cause_list_links_found: links,
            note: None,
            demo_mode: false,
            available_features: Vec::new(),
            sample_cases: Vec::new(),
        })
    }
}

fn inspect_form(page: &PortalPage) -> FormOutcome {
    let doc = Document::parse_bytes(page.body());
    form::locate(&doc, page.base_url())
}

fn page_title(page: &PortalPage) -> String {
    Document::parse_bytes(page.body())
        .title()
        .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string())
}

fn count_cause_list_links(page: &PortalPage) -> usize {
    Document::parse_bytes(page.body())
        .elements_with_text(&["a"], &[CAUSE_LIST_MARKER])
        .len()
}
