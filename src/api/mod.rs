//! HTTP API.
//!
//! Provides:
//! - `GET /health` - liveness probe
//! - `GET /api` - endpoint listing
//! - `POST /search/cnr` - search by CNR, optionally with a captcha answer
//! - `POST /search/case` - search by case type, number and year
//! - `GET /causelist/{court}/{date}` - a court's cause list
//!
//! Responses are `{success, data, ...}` envelopes, or `{error}` with 400 for
//! rejected input and 500 for searches that could not be carried out.

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use handlers::{
    api_docs_handler, case_search_handler, cause_list_handler, cnr_search_handler, health_handler,
};
pub use types::{AppState, CaseSearchBody, CnrSearchBody, Envelope, ErrorBody, SearchParams};

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api", get(api_docs_handler))
        .route("/search/cnr", post(cnr_search_handler))
        .route("/search/case", post(case_search_handler))
        .route("/causelist/{court}/{date}", get(cause_list_handler))
        .with_state(state)
}

/// Binds `api_host:api_port` and serves the API until the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn start_api_server(config: Arc<Config>) -> Result<(), anyhow::Error> {
    let addr = format!("{}:{}", config.api_host, config.api_port);
    let app = router(AppState { config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))?;

    log::info!("API listening on http://{}/", addr);
    log::info!("  - Docs: http://{}/api", addr);
    log::info!("  - Health: http://{}/health", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_failure_is_an_error() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = Config {
            api_host: "127.0.0.1".to_string(),
            api_port: port,
            ..Default::default()
        };
        let err = start_api_server(Arc::new(config)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind API server"));
    }
}
