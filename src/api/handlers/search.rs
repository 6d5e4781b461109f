//! Case search handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;

use super::super::types::{AppState, CaseSearchBody, CnrSearchBody, Envelope, SearchParams};
use super::{bad_request, internal_error};
use crate::config::OutputFormat;
use crate::outcome::OutcomeRecord;
use crate::persist::save_results;
use crate::search::{CaseSearch, DateChoice, SearchRequest};
use crate::validation::{validate_case_details, validate_cnr};

/// `POST /search/cnr`
pub async fn cnr_search_handler(
    State(state): State<AppState>,
    body: Result<Json<CnrSearchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let cnr = body.cnr.unwrap_or_default();
    if let Err(e) = validate_cnr(&cnr) {
        return bad_request(e.to_string());
    }

    let target_date = DateChoice::from_api(body.date.as_deref()).resolve();
    let request =
        SearchRequest::cnr(&cnr, &target_date).with_verification_token(body.captcha_code);
    let params = SearchParams::Cnr {
        cnr: cnr.clone(),
        date: target_date.clone(),
    };

    let record = CaseSearch::new(state.config.clone()).run(&request).await;
    info!("CNR search for {cnr} finished with status '{}'", record.status());

    if record.is_failure() {
        return internal_error(failure_message(&record));
    }

    let mut envelope = Envelope::new(record);
    envelope.search_params = Some(params);

    if matches!(envelope.data, OutcomeRecord::VerificationRequired { .. }) {
        envelope.captcha_required = true;
        return Json(envelope).into_response();
    }

    envelope.demo_data = matches!(
        envelope.data,
        OutcomeRecord::CaseFound {
            demo_mode: true,
            ..
        }
    );
    match save_results(
        &envelope.data,
        &state.config.output_dir,
        &request.result_stem(),
        OutputFormat::Json,
    ) {
        Ok(path) => envelope.saved_to_file = Some(path.display().to_string()),
        Err(e) => return internal_error(e.to_string()),
    }

    Json(envelope).into_response()
}

/// `POST /search/case`
pub async fn case_search_handler(
    State(state): State<AppState>,
    body: Result<Json<CaseSearchBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let case_type = body.case_type.unwrap_or_default();
    let case_number = body.case_number.unwrap_or_default();
    let case_year = body.case_year.unwrap_or_default();
    if let Err(e) = validate_case_details(&case_type, &case_number, &case_year) {
        return bad_request(e.to_string());
    }

    let target_date = DateChoice::from_api(body.date.as_deref()).resolve();
    let request = SearchRequest::case_details(&case_type, &case_number, &case_year, &target_date);

    let record = CaseSearch::new(state.config.clone()).run(&request).await;
    info!(
        "Case search for {case_type}/{case_number}/{case_year} finished with status '{}'",
        record.status()
    );

    if record.is_failure() {
        return internal_error(failure_message(&record));
    }

    let mut envelope = Envelope::new(record);
    envelope.search_params = Some(SearchParams::Case {
        case_type,
        case_number,
        case_year,
        date: target_date,
    });
    Json(envelope).into_response()
}

fn failure_message(record: &OutcomeRecord) -> String {
    match record {
        OutcomeRecord::ConnectionFailed {
            message, reason, ..
        } => format!("{message}: {reason}"),
        other => other.message().to_string(),
    }
}
