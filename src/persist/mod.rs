//! Writing search results to disk.
//!
//! Records are saved under the output directory as pretty-printed JSON or as
//! a flattened text dump, one file per search.

mod text;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error_handling::PersistenceError;

pub use text::format_text_output;

/// Writes `record` to `<output_dir>/<stem>.<ext>` and returns the path.
///
/// The output directory is created if missing and the stem is sanitized
/// first, so user-supplied CNRs and court names cannot escape it.
///
/// # Errors
///
/// Returns a [`PersistenceError`] if the record cannot be serialized or the
/// file cannot be written.
pub fn save_results<T: Serialize>(
    record: &T,
    output_dir: &Path,
    stem: &str,
    format: OutputFormat,
) -> Result<PathBuf, PersistenceError> {
    fs::create_dir_all(output_dir).map_err(|source| PersistenceError::Io {
        path: output_dir.display().to_string(),
        source,
    })?;

    let path = output_dir.join(format!("{}.{}", sanitize_stem(stem), format.extension()));
    let contents = match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Text => format_text_output(&serde_json::to_value(record)?),
    };

    fs::write(&path, contents).map_err(|source| PersistenceError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Saved results to {}", path.display());
    Ok(path)
}

/// Replaces every character other than ASCII alphanumerics, `-`, `_` and
/// `.` with `_`.
pub fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    // A stem made only of dots would name the directory itself or its parent.
    if cleaned.chars().all(|c| c == '.') {
        cleaned.replace('.', "_")
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_stem() {
        assert_eq!(
            sanitize_stem("case_result_DLCT01-123456-2023_16-10-2026"),
            "case_result_DLCT01-123456-2023_16-10-2026"
        );
        assert_eq!(sanitize_stem("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_stem("CRL/12 3"), "CRL_12_3");
        assert_eq!(sanitize_stem(".."), "__");
    }
}
