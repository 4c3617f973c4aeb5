use clap::Parser;

use super::CliArgs;

#[test]
fn test_parses_defaults() {
    let args = CliArgs::try_parse_from(["bienum"]).expect("default args should parse");

    assert!(args.reads_stdin());
    assert!(!args.types);
    assert!(!args.pretty);
    assert!(!args.no_color);
    assert!(args.check_values.is_empty());
    assert!(args.check_labels.is_empty());
}

#[test]
fn test_parses_flags_and_repeated_checks() {
    let args = CliArgs::try_parse_from([
        "bienum",
        "direction.json",
        "--types",
        "--pretty",
        "--no-color",
        "--check-value",
        "1",
        "--check-value",
        "\"Up\"",
        "--check-label",
        "Left",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.input, std::path::Path::new("direction.json"));
    assert!(!args.reads_stdin());
    assert!(args.types);
    assert!(args.pretty);
    assert!(args.no_color);
    assert_eq!(args.check_values, ["1", "\"Up\""]);
    assert_eq!(args.check_labels, ["Left"]);
}

#[test]
fn test_rejects_unknown_flag() {
    assert!(CliArgs::try_parse_from(["bienum", "--reverse"]).is_err());
}
