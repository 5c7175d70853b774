//! Filter and histogram mode behavior over stdin.

use crate::helpers::run_logdur_stdin;

#[test]
fn filter_passes_lines_over_the_threshold_unmodified() {
    let input = "GET /a 1500ms\nGET /b  2500ms \nGET /c 2s\n";
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["--min", "2s", "--field", "3"], input);

    assert_eq!(exit_code, 0);
    // Inner whitespace of the kept line survives byte-for-byte.
    assert_eq!(stdout, "GET /b  2500ms \n");
}

#[test]
fn filter_needs_no_time_format() {
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["--min", "1s", "--field", "2"], "x 90s\n");

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "x 90s\n");
}

#[test]
fn filter_accepts_clock_form_durations() {
    let input = "A B 00:05:30 C\nA B 00:00:00 C\n";
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["--min", "1s", "--field", "3"], input);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "A B 00:05:30 C\n");
}

#[test]
fn malformed_lines_are_skipped_not_fatal() {
    let input = "short\nx not-a-duration\nx 3s\n";
    let (stdout, stderr, exit_code) =
        run_logdur_stdin(&["--min", "1s", "--field", "2"], input);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "x 3s\n");
    // Both bad lines are diagnosed on stderr with their content.
    assert!(stderr.contains("not-a-duration"));
    assert!(stderr.contains("wanted field 2"));
}

#[test]
fn histogram_prints_one_summary_at_end_of_stream() {
    let input = "a 2s\nb 3s\nc 3s\nd 500ms\n";
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["--min", "1s", "--hist", "--field", "2"], input);

    assert_eq!(exit_code, 0);
    // 500ms is under the threshold; three values make it in.
    assert!(stdout.contains("total: 3"));
    assert!(stdout.contains("2.000"));
    assert!(stdout.contains("3.000"));
    assert!(stdout.contains('#'));
    assert_eq!(stdout.matches("total:").count(), 1);
}

#[test]
fn empty_input_yields_empty_histogram() {
    let (stdout, _stderr, exit_code) =
        run_logdur_stdin(&["--min", "1s", "--hist", "--field", "2"], "");

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "total: 0\n");
}
