//! Search form submission.

use std::collections::BTreeMap;

use log::{debug, info};

use super::types::{FormDescriptor, FormMethod};
use crate::error_handling::NetworkError;
use crate::session::{PortalPage, PortalSession};

/// Builds the field set sent to the portal.
///
/// The search-key and token fields always carry the caller's values. Every
/// other hidden input is forwarded with its original value; a hidden input
/// that shares a name with one of the two designated fields is dropped so it
/// cannot overwrite what the caller supplied.
pub fn build_submission(
    form: &FormDescriptor,
    search_key: &str,
    token: &str,
) -> BTreeMap<String, String> {
    let mut fields: BTreeMap<String, String> = form
        .hidden_fields()
        .filter(|(name, _)| *name != form.search_key_field && *name != form.token_field)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    fields.insert(form.search_key_field.clone(), search_key.to_string());
    fields.insert(form.token_field.clone(), token.to_string());
    fields
}

/// Submits the form through the session that loaded it.
///
/// GET forms send the fields as a query string, POST forms as an urlencoded
/// body. The response is returned whatever it contains; interpreting it is
/// the classifier's job.
///
/// # Errors
///
/// Returns a [`NetworkError`] on connection failure, timeout, or a non-2xx
/// status.
pub async fn submit(
    session: &PortalSession,
    form: &FormDescriptor,
    search_key: &str,
    token: &str,
) -> Result<PortalPage, NetworkError> {
    let fields = build_submission(form, search_key, token);
    info!(
        "Submitting search form ({:?} {}) with {} fields",
        form.method,
        form.action,
        fields.len()
    );
    debug!("Submitted field names: {:?}", fields.keys().collect::<Vec<_>>());

    match form.method {
        FormMethod::Get => session.submit_get(&form.action, &fields).await,
        FormMethod::Post => session.submit_post(&form.action, &fields).await,
    }
}
