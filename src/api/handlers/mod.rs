//! API HTTP handlers.

mod cause_list;
mod meta;
mod search;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};

use super::types::ErrorBody;

pub use cause_list::cause_list_handler;
pub use meta::{api_docs_handler, health_handler};
pub use search::{case_search_handler, cnr_search_handler};

/// `400 {"error": ...}` for input rejected before any search.
fn bad_request(message: impl Into<String>) -> Response {
    let message = message.into();
    warn!("Rejected request: {message}");
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
}

/// `500 {"error": ...}` for searches that could not be carried out.
fn internal_error(message: impl Into<String>) -> Response {
    let message = message.into();
    error!("Request failed: {message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: message }),
    )
        .into_response()
}
