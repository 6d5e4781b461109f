//! The `search` subcommand.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use super::prompts::Prompter;
use super::transcript::{cause_list_lines, record_lines};
use crate::config::{Config, SearchArgs};
use crate::outcome::OutcomeRecord;
use crate::persist::save_results;
use crate::search::{cause_list_stem, CaseSearch, SearchKey, SearchRequest};
use crate::validation::{validate_case_details, validate_cnr};

/// Court whose cause list `--causelist` prints.
const CLI_CAUSE_LIST_COURT: &str = "Demo Court";

/// Runs one CLI search, prompting on `input` for anything the flags left out
/// and printing the transcript to `output`.
///
/// Invalid input is reported on `output` and is not an error.
///
/// # Errors
///
/// Returns an error if prompting, writing the transcript, or saving the
/// results fails.
pub async fn run_search<R, W>(
    args: &SearchArgs,
    config: Arc<Config>,
    input: R,
    output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut prompter = Prompter::new(input, output);

    let date_choice = match args.date_choice() {
        Some(choice) => choice,
        None => prompter.date_choice().context("Failed to read date choice")?,
    };
    let target_date = date_choice.resolve();

    let key = if let Some(cnr) = &args.cnr {
        SearchKey::Cnr(cnr.clone())
    } else if let Some((case_type, case_number, case_year)) = args.case_details() {
        SearchKey::CaseDetails {
            case_type: case_type.to_string(),
            case_number: case_number.to_string(),
            case_year: case_year.to_string(),
        }
    } else {
        prompter.search_key().context("Failed to read search input")?
    };

    let validation = match &key {
        SearchKey::Cnr(cnr) => validate_cnr(cnr),
        SearchKey::CaseDetails {
            case_type,
            case_number,
            case_year,
        } => validate_case_details(case_type, case_number, case_year),
    };
    let out = prompter.output();
    if let Err(e) = validation {
        writeln!(out, "Error: {e}")?;
        return Ok(());
    }

    let request = match key {
        SearchKey::Cnr(cnr) => SearchRequest::cnr(cnr, &target_date),
        SearchKey::CaseDetails {
            case_type,
            case_number,
            case_year,
        } => SearchRequest::case_details(case_type, case_number, case_year, &target_date),
    }
    .with_verification_token(args.captcha_code.clone());

    let search = CaseSearch::new(Arc::clone(&config));
    let record = search.run(&request).await;
    info!("Search finished with status '{}'", record.status());

    for line in record_lines(&record) {
        writeln!(out, "{line}")?;
    }

    if matches!(record, OutcomeRecord::VerificationRequired { .. }) {
        return Ok(());
    }

    let path = save_results(&record, &config.output_dir, &request.result_stem(), args.output_format)
        .context("Failed to save results")?;
    writeln!(out, "\nResults saved to: {}", path.display())?;

    if args.causelist {
        writeln!(out, "\nDownloading Cause List...")?;
        match search.cause_list(CLI_CAUSE_LIST_COURT, &target_date).await {
            Ok(report) => {
                for line in cause_list_lines(&report) {
                    writeln!(out, "{line}")?;
                }
                let stem = cause_list_stem(CLI_CAUSE_LIST_COURT, &target_date);
                let path = save_results(&report, &config.output_dir, &stem, args.output_format)
                    .context("Failed to save cause list")?;
                writeln!(out, "\nCause list saved to: {}", path.display())?;
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }

    Ok(())
}
