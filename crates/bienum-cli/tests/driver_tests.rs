use super::*;
use clap::Parser;
use std::io::Write;

fn definition_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write definition");
    file
}

fn parse_args(file: &tempfile::NamedTempFile, extra: &[&str]) -> CliArgs {
    let path = file.path().to_str().expect("utf-8 temp path").to_string();
    let mut argv = vec!["bienum".to_string(), path];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    CliArgs::try_parse_from(argv).expect("args should parse")
}

#[test]
fn test_run_builds_instance_from_file() {
    let file = definition_file(r#"{"Up": 1, "Down": 2}"#);
    let args = parse_args(&file, &[]);

    let report = run(&args).expect("valid definition");

    assert_eq!(report.instance["1"], Value::from("Up"));
    assert_eq!(report.instance.all_labels(), ["Up", "Down"]);
    assert!(report.types.is_none());
    assert!(report.checks.is_empty());
    assert!(report.all_checks_passed());
}

#[test]
fn test_run_rejects_non_object_definition() {
    let file = definition_file("[1, 2]");
    let args = parse_args(&file, &[]);

    let err = run(&args).expect_err("arrays are not definitions");

    assert!(format!("{err:#}").contains("must be a JSON object"));
}

#[test]
fn test_run_reports_missing_file() {
    let args = CliArgs::try_parse_from(["bienum", "/nonexistent/bienum/definition.json"])
        .expect("args should parse");

    let err = run(&args).expect_err("missing file");

    assert!(format!("{err:#}").contains("failed to read"));
}

#[test]
fn test_value_checks_with_types() {
    let file = definition_file(r#"{"Up": 1, "Down": 2}"#);
    let args = parse_args(&file, &["--types", "--check-value", "1", "--check-value", "3"]);

    let report = run(&args).expect("valid definition");

    assert_eq!(report.checks.len(), 2);
    assert!(report.checks[0].passed);
    assert!(report.checks[0].diagnostic.is_none());
    assert!(!report.checks[1].passed);
    let diagnostic = report.checks[1]
        .diagnostic
        .as_ref()
        .expect("3 is not assignable to the value union");
    assert_eq!(diagnostic.code, 2322);
    assert!(!report.all_checks_passed());
}

#[test]
fn test_label_check_reports_missing_property() {
    let file = definition_file(r#"{"Up": 1}"#);
    let args = parse_args(&file, &["--types", "--check-label", "Up", "--check-label", "Left"]);

    let report = run(&args).expect("valid definition");

    assert!(report.checks[0].passed);
    assert!(!report.checks[1].passed);
    let diagnostic = report.checks[1].diagnostic.as_ref().expect("Left is missing");
    assert_eq!(
        diagnostic.message,
        "Property 'Left' does not exist on type '{ Up: 1; }'."
    );
}

#[test]
fn test_checks_without_types_have_no_diagnostics() {
    let file = definition_file(r#"{"Up": 1}"#);
    let args = parse_args(&file, &["--check-value", "2"]);

    let report = run(&args).expect("valid definition");

    assert!(!report.checks[0].passed);
    assert!(report.checks[0].diagnostic.is_none());
}

#[test]
fn test_invalid_check_value_json_is_an_error() {
    let file = definition_file(r#"{"Up": 1}"#);
    let args = parse_args(&file, &["--check-value", "Up"]);

    let err = run(&args).expect_err("Up is not JSON");

    assert!(err.to_string().contains("--check-value expects JSON"));
}

#[test]
fn test_report_lists_shadowed_helpers_and_types() {
    let file = definition_file(r#"{"allLabels": 1, "2": "isLabel"}"#);
    let args = parse_args(&file, &["--types"]);

    let report = run(&args).expect("valid definition");

    assert_eq!(report.shadowed_helpers, ["allLabels", "isLabel"]);
    let types = report.types.expect("--types was given");
    assert_eq!(types.len(), 8);
}
