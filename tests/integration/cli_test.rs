//! Usage and startup-validation behavior.

use crate::helpers::run_logdur;

#[test]
fn help_exits_0_and_shows_flags() {
    let (stdout, _stderr, exit_code) = run_logdur(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--min"));
    assert!(stdout.contains("--hist"));
    assert!(stdout.contains("--field"));
    assert!(stdout.contains("--re"));
    assert!(stdout.contains("--tf"));
}

#[test]
fn missing_field_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_logdur(&["-f", "%T"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--field"));
}

#[test]
fn normalize_without_time_format_fails_before_reading_input() {
    let (stdout, stderr, exit_code) = run_logdur(&["--field", "2"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("match pattern"));
}

#[test]
fn explicit_regex_still_needs_a_layout() {
    let (_stdout, stderr, exit_code) = run_logdur(&["--re", r"(\d+)", "--field", "2"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("layout"));
}

#[test]
fn broken_regex_fails_before_reading_input() {
    let (_stdout, stderr, exit_code) =
        run_logdur(&["--re", "(unclosed", "--tf", "%T", "--field", "2"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("invalid time match pattern"));
}

#[test]
fn hist_without_min_is_rejected() {
    let (_stdout, _stderr, exit_code) = run_logdur(&["--hist", "--field", "2"]);

    assert_eq!(exit_code, 2);
}

#[test]
fn unparseable_min_is_rejected() {
    let (_stdout, stderr, exit_code) = run_logdur(&["--min", "fast", "--field", "2"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("fast"));
}
