//! Saving records to the output directory.

use ecourts_scraper::demo::{demo_case, demo_cause_list};
use ecourts_scraper::persist::save_results;
use ecourts_scraper::{OutcomeRecord, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_json_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let record = demo_case("DEMO123");

    let path = save_results(&record, dir.path(), "case_result_DEMO123_16-10-2026", OutputFormat::Json)
        .unwrap();

    assert_eq!(path, dir.path().join("case_result_DEMO123_16-10-2026.json"));
    let saved: OutcomeRecord = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, record);
}

#[test]
fn test_json_is_pretty_printed_with_status_first() {
    let dir = TempDir::new().unwrap();
    let path = save_results(&demo_case("DEMO123"), dir.path(), "demo", OutputFormat::Json).unwrap();
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.starts_with("{\n  \"status\": \"case_found\""));
}

#[test]
fn test_text_format() {
    let dir = TempDir::new().unwrap();
    let path = save_results(
        &demo_cause_list("16-10-2026"),
        dir.path(),
        "causelist_Demo_Court_16-10-2026",
        OutputFormat::Text,
    )
    .unwrap();

    assert_eq!(path.extension().unwrap(), "txt");
    let contents = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "eCourts Scraper Results");
    assert_eq!(lines[1], "=========================");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "status: connected");
    assert!(lines.contains(&"court: Demo District Court"));
    assert!(lines.contains(&"AVAILABLE_FEATURES:"));
    assert!(lines.contains(&"  3. PDF download capability"));
}

#[test]
fn test_missing_output_dir_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("output").join("nested");
    let path = save_results(&demo_case("DEMO123"), &nested, "x", OutputFormat::Json).unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn test_stem_cannot_escape_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let path = save_results(&demo_case("DEMO123"), &out, "../escape", OutputFormat::Json).unwrap();
    assert_eq!(path.parent().unwrap(), out);
    assert!(!dir.path().join("escape.json").exists());
}

#[test]
fn test_unwritable_dir_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not_a_dir");
    std::fs::write(&file, "x").unwrap();

    let err = save_results(&demo_case("DEMO123"), &file, "x", OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("not_a_dir"));
}
