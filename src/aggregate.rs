//! Per-mode record consumption.
//!
//! The pipeline hands every accepted line to an [`Aggregator`], which
//! either emits output immediately (normalize, filter) or accumulates
//! state to render at end-of-stream (histogram).

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::histogram::Histogram;

/// Output format for normalized timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Header printed before any normalize-mode output.
pub const NORMALIZE_HEADER: &str = "date time duration(ms)";

/// One accepted line, alive for a single pipeline iteration.
#[derive(Debug, Clone)]
pub struct Record<'l> {
    /// Parsed timestamp; only normalize mode pays for timestamp work.
    pub timestamp: Option<NaiveDateTime>,
    /// Duration in milliseconds, truncated.
    pub duration_ms: i64,
    /// The original line, untouched.
    pub raw: &'l str,
}

/// Mode strategy consuming extracted records.
pub enum Aggregator {
    /// Emit `<timestamp> <duration_ms>` per record.
    Normalize,
    /// Pass raw lines through when their duration exceeds the threshold.
    Filter { threshold_ms: i64 },
    /// Accumulate exceeding durations (in seconds) into a histogram.
    Histogram {
        threshold_ms: i64,
        state: Histogram,
    },
}

/// Bin capacity for histogram mode.
pub const HISTOGRAM_BINS: usize = 20;

impl Aggregator {
    /// Consume one record, writing any immediate output to `out`.
    pub fn accept<W: Write>(&mut self, record: &Record, out: &mut W) -> io::Result<()> {
        match self {
            Aggregator::Normalize => {
                // The pipeline never builds a normalize record without a
                // timestamp.
                if let Some(ts) = record.timestamp {
                    writeln!(out, "{} {}", ts.format(TIMESTAMP_FORMAT), record.duration_ms)?;
                }
                Ok(())
            }
            Aggregator::Filter { threshold_ms } => {
                if record.duration_ms > *threshold_ms {
                    writeln!(out, "{}", record.raw)?;
                    // Keep filter mode streaming line by line even when
                    // stdout is a pipe.
                    out.flush()?;
                }
                Ok(())
            }
            Aggregator::Histogram { threshold_ms, state } => {
                if record.duration_ms > *threshold_ms {
                    state.insert(record.duration_ms as f64 / 1000.0);
                }
                Ok(())
            }
        }
    }

    /// End-of-stream step. Histogram mode renders its summary exactly
    /// once; the other modes have nothing left to do.
    pub fn finalize<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self {
            Aggregator::Normalize | Aggregator::Filter { .. } => Ok(()),
            Aggregator::Histogram { state, .. } => state.render(out),
        }
    }

    /// Whether this mode needs timestamp matching and parsing at all.
    pub fn wants_timestamp(&self) -> bool {
        matches!(self, Aggregator::Normalize)
    }
}
