//! ecourts_scraper library: case status lookups on the eCourts services portal
//!
//! This library loads the portal's search page, detects the captcha that
//! guards the CNR search form, submits the form when the caller supplies the
//! captcha text, and classifies the result page into a fixed set of outcome
//! records. The same records back the CLI and the HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ecourts_scraper::{CaseSearch, Config, DateChoice, SearchRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let search = CaseSearch::new(Arc::new(Config::default()));
//! let request = SearchRequest::cnr("DLCT010012342023", DateChoice::Today.resolve());
//!
//! let record = search.run(&request).await;
//! println!("{}: {}", record.status(), record.message());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod api;
pub mod app;
pub mod classify;
pub mod config;
pub mod demo;
mod error_handling;
pub mod form;
pub mod initialization;
pub mod markup;
pub mod outcome;
pub mod persist;
pub mod search;
pub mod session;
pub mod validation;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{
    InitializationError, NetworkError, PersistenceError, SearchError, ValidationError,
};
pub use outcome::{normalize, CaseDetails, CauseListReport, OutcomeRecord, SearchOutcome};
pub use search::{CaseSearch, DateChoice, SearchKey, SearchRequest};
