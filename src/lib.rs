//! logdur: extract, filter and summarize duration fields from
//! timestamped log streams.
//!
//! The library is a straight-line per-line pipeline: a compact `%`-token
//! time format is translated into a locating regex plus a chrono parse
//! layout ([`format`]), lines are scanned and parsed ([`scan`]), a
//! duration field is cut out and parsed ([`fields`], [`duration`]) and
//! the result feeds one of three mode strategies ([`aggregate`]), driven
//! over the input sources by [`pipeline`]. Malformed lines are skipped
//! and counted, never fatal.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod fields;
pub mod format;
pub mod histogram;
pub mod pipeline;
pub mod scan;

pub use cli::Cli;
pub use config::{Config, Mode};
pub use error::LineError;
pub use format::FormatSpec;
pub use pipeline::{Pipeline, RunStats};
