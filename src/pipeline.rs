//! Pipeline driver.
//!
//! Sequences input sources, feeds each line through the extraction
//! stages and the configured [`Aggregator`], applies the per-line
//! recoverable-error policy (skip, log, keep going) and tracks
//! [`RunStats`] for the final exit code.
//!
//! Strictly sequential and unbuffered beyond the current line: filter
//! mode in particular must keep behaving like a streaming grep.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Result;
use tracing::{error, warn};

use crate::aggregate::{Aggregator, Record, HISTOGRAM_BINS, NORMALIZE_HEADER};
use crate::config::{Config, Mode};
use crate::duration::parse_duration_ms;
use crate::error::SkipReason;
use crate::fields::extract_field;
use crate::histogram::Histogram;
use crate::scan::{self, LineMatcher, TimestampParser};

/// Counters accumulated across the whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Lines read, across all sources.
    pub lines: u64,
    /// Lines without a locatable timestamp (normalize mode only; routine).
    pub no_match: u64,
    /// Lines skipped per failure reason.
    pub timestamp_errors: u64,
    pub field_errors: u64,
    pub duration_errors: u64,
    /// Named sources that could not be opened.
    pub failed_sources: u64,
}

impl RunStats {
    fn count_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Timestamp => self.timestamp_errors += 1,
            SkipReason::FieldIndex => self.field_errors += 1,
            SkipReason::Duration => self.duration_errors += 1,
        }
    }

    /// Process exit code: nonzero only when a named source failed to
    /// open. Skipped lines never affect it.
    pub fn exit_code(&self) -> i32 {
        if self.failed_sources > 0 {
            1
        } else {
            0
        }
    }
}

/// One run: stage objects built once from a validated [`Config`].
pub struct Pipeline {
    field: usize,
    /// Timestamp stages, present only in normalize mode.
    scanner: Option<(LineMatcher, TimestampParser)>,
    aggregator: Aggregator,
    stats: RunStats,
}

impl Pipeline {
    /// Build all stages. Pattern compilation failures surface here,
    /// before any input is read.
    pub fn new(config: &Config) -> Result<Self> {
        let (scanner, aggregator) = match &config.mode {
            Mode::Normalize { spec } => (Some(scan::build(spec)?), Aggregator::Normalize),
            Mode::Filter { threshold_ms } => (
                None,
                Aggregator::Filter {
                    threshold_ms: *threshold_ms,
                },
            ),
            Mode::Histogram { threshold_ms } => (
                None,
                Aggregator::Histogram {
                    threshold_ms: *threshold_ms,
                    state: Histogram::new(HISTOGRAM_BINS),
                },
            ),
        };
        Ok(Self {
            field: config.field,
            scanner,
            aggregator,
            stats: RunStats::default(),
        })
    }

    /// Process every source in order and finalize the aggregator.
    ///
    /// A source that fails to open is logged and counted, and the run
    /// moves on to the next one. Each file is closed when its scope ends,
    /// before the next source is opened.
    pub fn run<W: Write>(&mut self, sources: &[String], out: &mut W) -> Result<RunStats> {
        if self.aggregator.wants_timestamp() {
            writeln!(out, "{NORMALIZE_HEADER}")?;
        }

        for source in sources {
            if source == "-" {
                let stdin = io::stdin();
                self.drain(stdin.lock(), out)?;
            } else {
                match File::open(source) {
                    Ok(file) => self.drain(BufReader::new(file), out)?,
                    Err(e) => {
                        error!("{source}: {e}");
                        self.stats.failed_sources += 1;
                    }
                }
            }
        }

        self.aggregator.finalize(out)?;
        Ok(self.stats.clone())
    }

    /// Read one source to exhaustion. A mid-stream read error stops this
    /// source only.
    fn drain<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> Result<()> {
        for line in reader.lines() {
            match line {
                Ok(line) => self.step(&line, out)?,
                Err(e) => {
                    warn!("read error, abandoning source: {e}");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Push a single line through the stage chain.
    ///
    /// Only I/O errors on `out` propagate; every extraction failure is
    /// logged with the offending line, counted, and swallowed.
    fn step<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        self.stats.lines += 1;

        let timestamp = match &self.scanner {
            Some((matcher, parser)) => {
                let Some(captured) = matcher.capture(line) else {
                    self.stats.no_match += 1;
                    return Ok(());
                };
                match parser.parse(captured) {
                    Ok(ts) => Some(ts),
                    Err(e) => {
                        warn!("{e}: {line}");
                        self.stats.count_skip(e.reason());
                        return Ok(());
                    }
                }
            }
            None => None,
        };

        let duration_ms = match extract_field(line, self.field).and_then(parse_duration_ms) {
            Ok(ms) => ms,
            Err(e) => {
                warn!("{e}: {line}");
                self.stats.count_skip(e.reason());
                return Ok(());
            }
        };

        let record = Record {
            timestamp,
            duration_ms,
            raw: line,
        };
        self.aggregator.accept(&record, out)?;
        Ok(())
    }

    /// Stats so far; final values come from [`Pipeline::run`].
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}
