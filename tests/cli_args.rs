//! Tests for the command line surface, run against the built binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Points `--config` at a file that does not exist so the user's own config
/// never leaks into the tests.
fn unitconv_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_unitconv"));
    let config: PathBuf = dir.path().join("config.toml");
    cmd.arg("--config").arg(config);
    cmd.env_remove("UNITCONV_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    unitconv_cmd(&dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_subcommands() {
    let output = run(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("--category"));
}

#[test]
fn test_convert_meters_to_kilometers() {
    let output = run(&[
        "convert",
        "--category",
        "Length/Distance",
        "--from",
        "Meter",
        "--to",
        "Kilometer",
        "2500",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2.5");
}

#[test]
fn test_convert_negative_temperature() {
    let output = run(&[
        "convert",
        "-c",
        "Temperature",
        "-f",
        "Celsius",
        "-t",
        "Fahrenheit",
        "-40",
    ]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-40");
}

#[test]
fn test_convert_respects_configured_digits() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[display]\nmax_fraction_digits = 2\n").unwrap();
    let output = unitconv_cmd(&dir)
        .args(["convert", "-c", "Length/Distance", "-f", "Foot", "-t", "Meter", "1"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0.3");
}

#[test]
fn test_unknown_category_exits_with_error() {
    let output = run(&["convert", "-c", "Pressure", "-f", "Pascal", "-t", "Bar", "1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Category 'Pressure' not found"));
    assert!(stderr.contains("Available categories: Length/Distance"));
}

#[test]
fn test_unknown_unit_exits_with_error() {
    let output = run(&["convert", "-c", "Time", "-f", "Second", "-t", "Fortnight", "1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unit 'Fortnight' not found in category 'Time'"));
    assert!(stderr.contains("Available units: Second, Minute, Hour, Day, Week"));
}

#[test]
fn test_non_numeric_value_exits_with_error() {
    let output = run(&["convert", "-c", "Time", "-f", "Second", "-t", "Minute", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: 'abc' is not a number"));
}

#[test]
fn test_unknown_ui_category_exits_before_terminal_setup() {
    let output = run(&["--category", "Pressure"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Category 'Pressure' not found"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[defaults]\ncategory = \"Pressure\"\n",
    )
    .unwrap();
    let output = unitconv_cmd(&dir).args(["list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_list_units_of_category() {
    let output = run(&["list", "--category", "Fuel Efficiency"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["Kilometers per Liter", "Miles per Gallon"]);
}

#[test]
fn test_list_json() {
    let output = run(&["list", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let categories = value.as_array().unwrap();
    assert_eq!(categories.len(), 9);
    assert_eq!(categories[3]["name"], "Temperature");
    assert_eq!(categories[3]["rule"], "temperature");
    assert_eq!(categories[0]["units"][2]["name"], "Kilometer");
    assert_eq!(categories[0]["units"][2]["factor"], 1000.0);
}

#[test]
fn test_missing_value_shows_clap_error() {
    let output = run(&["convert", "-c", "Time", "-f", "Second", "-t", "Minute"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
