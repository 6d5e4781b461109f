//! Health and documentation handlers.

use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

/// Liveness probe
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
    }))
}

/// Endpoint listing with example bodies
pub async fn api_docs_handler() -> Json<Value> {
    Json(json!({
        "message": "eCourts Scraper API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "search_by_cnr": "POST /search/cnr",
            "search_by_case": "POST /search/case",
            "cause_list": "GET /causelist/{court_name}/{date}",
        },
        "example_usage": {
            "cnr_search": {
                "url": "/search/cnr",
                "method": "POST",
                "body": {"cnr": "DLCT01-123456-2023", "date": "today"},
            },
            "case_search": {
                "url": "/search/case",
                "method": "POST",
                "body": {
                    "case_type": "CRL",
                    "case_number": "12345",
                    "case_year": "2023",
                    "date": "today",
                },
            },
        },
    }))
}
