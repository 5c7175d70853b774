//! Command-line argument surface.

use clap::Parser;

use crate::duration::parse_duration_ms;

/// Extract, filter and summarize duration fields from timestamped logs.
///
/// Reads the given files (or stdin when none are given, or for the name
/// `-`) line by line. By default each line's timestamp is located via the
/// time format and re-emitted normalized next to the duration in
/// milliseconds. With `--min` the tool instead passes through lines whose
/// duration exceeds the threshold; adding `--hist` aggregates those
/// durations into a distribution summary.
#[derive(Debug, Parser)]
#[command(name = "logdur", version, about)]
pub struct Cli {
    /// Filter mode: keep lines taking more than this duration
    /// (e.g. 500ms, 2s, 1m30s).
    #[arg(long, value_name = "DURATION", value_parser = parse_threshold)]
    pub min: Option<i64>,

    /// Show a histogram of the kept durations instead (with --min).
    #[arg(long, requires = "min")]
    pub hist: bool,

    /// Time format: %Y %m %d %H %M %S %T %F %C %b %Z %z.
    /// More precise control via --re and --tf.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Regex locating the timestamp (first capture group, or the whole
    /// match when the pattern has no groups).
    #[arg(long = "re", value_name = "REGEX")]
    pub match_pattern: Option<String>,

    /// strftime layout parsing the located timestamp.
    #[arg(long = "tf", value_name = "LAYOUT")]
    pub layout: Option<String>,

    /// Duration field: 1-based position among whitespace-delimited fields.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub field: u64,

    /// Input files; `-` or no files means stdin.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// clap value parser for `--min`, sharing the line grammar.
fn parse_threshold(value: &str) -> Result<i64, String> {
    parse_duration_ms(value).map_err(|e| e.to_string())
}
