//! Integration tests for the xlcsv CLI
//!
//! Drive the command functions end to end against scratch files.

use std::fs;

use tempfile::TempDir;
use xlcsv_cli::{convert_csv_command, convert_excel_command, filter_command, sort_command};
use xlcsv_data::XlsxBuilder;

fn scratch_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_filter_command_writes_sibling() {
    let dir = TempDir::new().unwrap();
    let input = scratch_csv(&dir, "report.csv", "\"Name\",\"Score\"\nAlice,9\nBob,7\n");

    filter_command(&input, Some("Name")).unwrap();

    let out = dir.path().join("report.filtered.csv");
    let text = fs::read_to_string(out).unwrap();
    assert!(text.starts_with("\"Name\"\n"));
    let body: std::collections::HashSet<&str> = text.split('\n').skip(1).collect();
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));
}

#[test]
fn test_filter_command_reports_invalid_headers() {
    let dir = TempDir::new().unwrap();
    let input = scratch_csv(&dir, "report.csv", "\"Name\",\"Score\"\nAlice,9\n");

    let err = filter_command(&input, Some("Rank")).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Invalid headers: Rank"));

    // no output on failure
    assert!(!dir.path().join("report.filtered.csv").exists());
}

#[test]
fn test_sort_command() {
    let dir = TempDir::new().unwrap();
    let input = scratch_csv(&dir, "report.csv", "\"K\",\"V\"\nb,2\na,1");

    sort_command(&input).unwrap();

    let text = fs::read_to_string(dir.path().join("report.sorted.csv")).unwrap();
    assert_eq!(text, "\"K\",\"V\"\na,1\nb,2");
}

#[test]
fn test_convert_round_trip_keeps_cell_values() {
    let dir = TempDir::new().unwrap();
    let input = scratch_csv(&dir, "cities.csv", "\"Name\",\"City\"\nAlice,Rome\nBob,Oslo");

    convert_excel_command(&input).unwrap();
    let book = dir.path().join("cities.xlsx");
    assert!(book.exists());

    // the dialect is a lossy boundary, but a convert back yields the
    // same cell values behind the quoting
    convert_csv_command(&book).unwrap();
    let text = fs::read_to_string(dir.path().join("cities.csv")).unwrap();
    assert!(text.contains("Alice"));
    assert!(text.contains("Oslo"));
    assert_eq!(text.split('\n').count(), 3);
}

#[test]
fn test_convert_csv_command_rejects_csv_input() {
    let dir = TempDir::new().unwrap();
    let input = scratch_csv(&dir, "report.csv", "\"A\"\nx\n");

    let err = convert_csv_command(&input).unwrap_err();
    assert!(format!("{err:#}").contains("File is not an excel file"));
}
