//! Normalize mode behavior.

use crate::helpers::run_logdur_stdin;

#[test]
fn emits_header_then_normalized_records() {
    let input = "2024-01-02 03:04:05 req 00:00:01\n";
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["-f", "%Y-%m-%d %T", "--field", "4"], input);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "date time duration(ms)\n2024/01/02 03:04:05 1000\n");
}

#[test]
fn non_matching_lines_are_silent() {
    let input = "no timestamp here\n\n2024-01-02 03:04:05 250ms\n";
    let (stdout, stderr, exit_code) =
        run_logdur_stdin(&["-f", "%Y-%m-%d %T", "--field", "3"], input);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "date time duration(ms)\n2024/01/02 03:04:05 250\n");
    assert!(stderr.is_empty());
}

#[test]
fn explicit_re_and_tf_override_the_template() {
    let input = "[02/Jan/2024 03:04:05] GET / 1.5s\n";
    let (stdout, _stderr, exit_code) = run_logdur_stdin(
        &[
            "--re",
            r"\[([^\]]+)\]",
            "--tf",
            "%d/%b/%Y %H:%M:%S",
            "--field",
            "5",
        ],
        input,
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "date time duration(ms)\n2024/01/02 03:04:05 1500\n");
}

#[test]
fn timestamp_parse_failure_skips_the_line() {
    // The loose pattern accepts an impossible month; parsing rejects it.
    let input = "2024-13-02 03:04:05 1s\n2024-01-02 03:04:05 1s\n";
    let (stdout, stderr, exit_code) =
        run_logdur_stdin(&["-f", "%Y-%m-%d %T", "--field", "3"], input);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "date time duration(ms)\n2024/01/02 03:04:05 1000\n");
    assert!(stderr.contains("2024-13-02"));
}

#[test]
fn time_only_format_gets_the_zero_date() {
    let input = "03:04:05 worker 2s\n";
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["-f", "%T", "--field", "3"], input);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "date time duration(ms)\n0000/01/01 03:04:05 2000\n");
}
