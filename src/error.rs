//! Line-level error taxonomy.
//!
//! Every variant here is recoverable: it costs exactly one skipped line
//! and never aborts the run. Fatal configuration problems are plain
//! `anyhow` errors raised before any input is read.

/// Why a single line was skipped.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("timestamp {text:?} does not parse with layout {layout:?}: {source}")]
    Timestamp {
        text: String,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("line has {found} fields, wanted field {index}")]
    FieldIndex { index: usize, found: usize },

    #[error("bad duration {value:?}: {reason}")]
    Duration { value: String, reason: String },
}

impl LineError {
    /// Stable bucket for per-reason skip counters.
    pub fn reason(&self) -> SkipReason {
        match self {
            LineError::Timestamp { .. } => SkipReason::Timestamp,
            LineError::FieldIndex { .. } => SkipReason::FieldIndex,
            LineError::Duration { .. } => SkipReason::Duration,
        }
    }
}

/// Skip-counter bucket for [`crate::pipeline::RunStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Timestamp,
    FieldIndex,
    Duration,
}
