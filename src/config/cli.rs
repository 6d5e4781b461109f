//! Command-line options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::constants::{
    DEFAULT_API_HOST, DEFAULT_API_PORT, DEFAULT_OUTPUT_DIR, DEFAULT_PORTAL_URL,
    DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS, SUBMIT_TIMEOUT_SECS,
};
use super::types::{Config, LogFormat, LogLevel, OutputFormat};
use crate::search::DateChoice;

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Look up a case by CNR for today's listing
/// ecourts_scraper search --cnr DLCT010012342023 --today
///
/// # Same, answering the captcha shown by a previous run
/// ecourts_scraper search --cnr DLCT010012342023 --today --captcha-code X7K2
///
/// # Case details for tomorrow, saved as text, plus the demo cause list
/// ecourts_scraper search --case-type CRL --case-number 12345 --case-year 2023 \
///     --tomorrow --causelist --output-format text
///
/// # HTTP API
/// ecourts_scraper serve --port 5000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ecourts_scraper",
    about = "Fetches case status and cause lists from the eCourts services portal."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for a case by CNR or by case details
    Search(SearchArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, ignore_case = true, env = "LOG_LEVEL", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Portal page that hosts the search form
    #[arg(long, global = true, env = "ECOURTS_PORTAL_URL", default_value = DEFAULT_PORTAL_URL)]
    pub portal_url: String,

    /// Directory results are saved to
    #[arg(long, global = true, env = "ECOURTS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Timeout for loading the portal page, in seconds
    #[arg(long, global = true, default_value_t = FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_seconds: u64,

    /// Timeout for the search submission, in seconds
    #[arg(long, global = true, default_value_t = SUBMIT_TIMEOUT_SECS)]
    pub submit_timeout_seconds: u64,

    /// HTTP User-Agent header value.
    ///
    /// Defaults to a Chrome-like browser string; the portal turns away
    /// clients that do not look like a browser.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl GlobalArgs {
    /// Library configuration for these options.
    pub fn to_config(&self) -> Config {
        Config {
            portal_url: self.portal_url.clone(),
            fetch_timeout_seconds: self.fetch_timeout_seconds,
            submit_timeout_seconds: self.submit_timeout_seconds,
            user_agent: self.user_agent.clone(),
            output_dir: self.output_dir.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            ..Default::default()
        }
    }
}

/// Options for `search`.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// CNR number of the case
    #[arg(long)]
    pub cnr: Option<String>,

    /// Case type (e.g. CRL, CIV)
    #[arg(long)]
    pub case_type: Option<String>,

    /// Case number
    #[arg(long)]
    pub case_number: Option<String>,

    /// Case year
    #[arg(long)]
    pub case_year: Option<String>,

    /// Check today's listing
    #[arg(long, conflicts_with = "tomorrow")]
    pub today: bool,

    /// Check tomorrow's listing
    #[arg(long)]
    pub tomorrow: bool,

    /// Also fetch the (demo) cause list
    #[arg(long)]
    pub causelist: bool,

    /// Output format: json|text
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output_format: OutputFormat,

    /// Captcha text for the portal's search form
    #[arg(long)]
    pub captcha_code: Option<String>,
}

impl SearchArgs {
    /// Date chosen on the command line, if any.
    pub fn date_choice(&self) -> Option<DateChoice> {
        if self.today {
            Some(DateChoice::Today)
        } else if self.tomorrow {
            Some(DateChoice::Tomorrow)
        } else {
            None
        }
    }

    /// The case triple, when all three parts were given.
    pub fn case_details(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.case_type.as_deref()?,
            self.case_number.as_deref()?,
            self.case_year.as_deref()?,
        ))
    }
}

/// Options for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "API_HOST", default_value = DEFAULT_API_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "API_PORT", default_value_t = DEFAULT_API_PORT)]
    pub port: u16,
}

impl ServeArgs {
    /// Applies the bind address to a configuration.
    pub fn apply(&self, config: Config) -> Config {
        Config {
            api_host: self.host.clone(),
            api_port: self.port,
            ..config
        }
    }
}
