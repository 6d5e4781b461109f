//! CLI application modules.
//!
//! This module provides the `search` subcommand, its interactive prompts,
//! and the transcript printed for each result.

pub mod command;
pub mod prompts;
pub mod transcript;

// Re-export public API
pub use command::run_search;
pub use prompts::Prompter;
pub use transcript::{cause_list_lines, record_lines};
