//! Run configuration, resolved once from the CLI and immutable after.

use anyhow::{bail, Result};

use crate::cli::Cli;
use crate::format::FormatSpec;

/// Operating mode. Filter and Histogram do no timestamp work at all, so
/// only Normalize carries a [`FormatSpec`].
#[derive(Debug, Clone)]
pub enum Mode {
    Normalize { spec: FormatSpec },
    Filter { threshold_ms: i64 },
    Histogram { threshold_ms: i64 },
}

/// Everything a run needs, validated up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// 1-based duration field index.
    pub field: usize,
    /// Input sources in order; `-` means stdin.
    pub sources: Vec<String>,
}

impl Config {
    /// Resolve and validate CLI arguments before any input is read.
    ///
    /// In normalize mode both pattern halves must resolve to something
    /// non-empty, from the format template or the explicit overrides.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mode = match cli.min {
            Some(threshold_ms) if cli.hist => Mode::Histogram { threshold_ms },
            Some(threshold_ms) => Mode::Filter { threshold_ms },
            None => {
                let spec = FormatSpec::resolve(
                    cli.format.as_deref(),
                    cli.match_pattern.as_deref(),
                    cli.layout.as_deref(),
                );
                if spec.match_pattern.is_empty() {
                    bail!("time match pattern must not be empty (give -f or --re)");
                }
                if spec.layout.is_empty() {
                    bail!("time parse layout must not be empty (give -f or --tf)");
                }
                Mode::Normalize { spec }
            }
        };

        let sources = if cli.files.is_empty() {
            vec!["-".to_string()]
        } else {
            cli.files
        };

        Ok(Self {
            mode,
            field: cli.field as usize,
            sources,
        })
    }
}
