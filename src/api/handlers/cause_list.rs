//! Cause list handler.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::types::{AppState, Envelope};
use super::{bad_request, internal_error};
use crate::config::OutputFormat;
use crate::persist::save_results;
use crate::search::{cause_list_stem, CaseSearch};
use crate::validation::validate_date;

/// `GET /causelist/{court}/{date}`
pub async fn cause_list_handler(
    State(state): State<AppState>,
    Path((court, date)): Path<(String, String)>,
) -> Response {
    if let Err(e) = validate_date(&date) {
        return bad_request(e.to_string());
    }

    let report = match CaseSearch::new(state.config.clone())
        .cause_list(&court, &date)
        .await
    {
        Ok(report) => report,
        Err(e) => return internal_error(e.to_string()),
    };

    let mut envelope = Envelope::new(report);
    if envelope.data.demo_mode {
        envelope.demo_data = true;
        let stem = cause_list_stem(&court, &date);
        match save_results(&envelope.data, &state.config.output_dir, &stem, OutputFormat::Json) {
            Ok(path) => envelope.saved_to_file = Some(path.display().to_string()),
            Err(e) => return internal_error(e.to_string()),
        }
    }

    Json(envelope).into_response()
}
