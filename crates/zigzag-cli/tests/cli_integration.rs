//! Integration tests for the zigzag CLI.
//!
//! These tests run the built binary on the CSV fixtures and check the CSV it
//! writes, its exit code and its error messages.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

/// Run the CLI with given arguments and return the output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zigzag"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI, assert success and return stdout lines.
fn run_cli_lines(args: &[&str]) -> Vec<String> {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

fn last_column(lines: &[String]) -> Vec<String> {
    lines[1..]
        .iter()
        .map(|l| l.rsplit(',').next().unwrap().to_string())
        .collect()
}

#[test]
fn test_pivots_end_to_end() {
    let lines = run_cli_lines(&["pivots", &fixture("simple_close.csv")]);

    assert_eq!(lines[0], "date,close,pivot");
    assert_eq!(lines.len(), 7);
    assert_eq!(last_column(&lines), vec!["-1", "1", "0", "-1", "0", "1"]);
    assert!(lines[1].starts_with("2024-01-01,"));
}

#[test]
fn test_pivots_to_output_file() {
    let output = std::env::temp_dir().join("zigzag_cli_it_pivots.csv");
    let result = run_cli(&[
        "pivots",
        &fixture("simple_close.csv"),
        "0.03,-0.03",
        "-o",
        output.to_str().unwrap(),
    ]);

    assert!(result.status.success());
    assert!(result.stdout.is_empty());

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("date,close,pivot\n"));
    fs::remove_file(&output).ok();
}

#[test]
fn test_wide_thresholds_label_only_endpoints() {
    let lines = run_cli_lines(&["pivots", &fixture("simple_close.csv"), "0.5,-0.5"]);
    assert_eq!(last_column(&lines), vec!["-1", "0", "0", "0", "0", "1"]);
}

#[test]
fn test_candlestick_end_to_end() {
    let lines = run_cli_lines(&["candlestick", &fixture("hlc.csv"), "0.1,-0.1"]);

    assert_eq!(lines[0], "date,close,high,low,pivot");
    assert_eq!(last_column(&lines), vec!["-1", "1", "0", "0", "0", "-1", "1"]);
}

#[test]
fn test_close_only_pivots_on_hlc_file() {
    // Closes alone put the peak on 2024-01-03 and the valley on 2024-01-05.
    let lines = run_cli_lines(&["pivots", &fixture("hlc.csv"), "0.1,-0.1"]);
    assert_eq!(last_column(&lines), vec!["-1", "0", "1", "0", "-1", "0", "1"]);
}

#[test]
fn test_modes_end_to_end() {
    let lines = run_cli_lines(&["modes", &fixture("simple_close.csv")]);

    assert_eq!(lines[0], "date,pivot,mode");
    assert_eq!(last_column(&lines), vec!["-1", "1", "-1", "-1", "1", "1"]);
}

#[test]
fn test_returns_end_to_end() {
    let lines = run_cli_lines(&["returns", &fixture("simple_close.csv")]);

    assert_eq!(lines[0], "start,end,return");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("2024-01-01,2024-01-02,"));
    assert!(lines[2].starts_with("2024-01-02,2024-01-04,"));
    assert!(lines[3].starts_with("2024-01-04,2024-01-06,"));

    let first: f64 = lines[1].rsplit(',').next().unwrap().parse().unwrap();
    assert!((first - 0.05).abs() < 1e-9);
}

#[test]
fn test_drawdown_end_to_end() {
    let lines = run_cli_lines(&["drawdown", &fixture("simple_close.csv")]);

    assert_eq!(lines[0], "max_drawdown");
    let dd: f64 = lines[1].parse().unwrap();
    assert!((dd - (1.05 - 0.90) / 1.05).abs() < 1e-9);
}

#[test]
fn test_exit_code_missing_file() {
    let output = run_cli(&["pivots", "/nonexistent/prices.csv"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/prices.csv"));
}

#[test]
fn test_bad_value_reports_line() {
    let output = run_cli(&["pivots", &fixture("bad_values.csv")]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3"));
    assert!(stderr.contains("abc"));
}

#[test]
fn test_missing_close_column() {
    let output = run_cli(&["pivots", &fixture("no_close.csv")]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("close"));
}

#[test]
fn test_named_column_selects_values() {
    let lines = run_cli_lines(&["drawdown", &fixture("no_close.csv"), "-c", "volume"]);
    assert_eq!(lines, vec!["max_drawdown", "0"]);
}

#[test]
fn test_candlestick_requires_high_low() {
    let output = run_cli(&["candlestick", &fixture("simple_close.csv")]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'high'"));
}

#[test]
fn test_positive_down_threshold_is_actionable() {
    let output = run_cli(&["pivots", &fixture("simple_close.csv"), "0.05,0.05"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("down_thresh"));
    assert!(stderr.contains("Did you mean 0.05,-0.05?"));
}

#[test]
fn test_malformed_threshold_params() {
    let output = run_cli(&["pivots", &fixture("simple_close.csv"), "0.05"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("up,down"));
}

#[test]
fn test_help_flag() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["pivots", "candlestick", "modes", "returns", "drawdown"] {
        assert!(stdout.contains(command), "help should list {command}");
    }
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_repeated_runs_identical() {
    let first = run_cli_lines(&["pivots", &fixture("hlc.csv"), "0.02,-0.02"]);
    let second = run_cli_lines(&["pivots", &fixture("hlc.csv"), "0.02,-0.02"]);
    assert_eq!(first, second);
}
