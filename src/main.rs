use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logdur::{Cli, Config, Pipeline};

fn main() -> ExitCode {
    // Diagnostics go to stderr so piped output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("logdur: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::from_cli(cli)?;
    let mut pipeline = Pipeline::new(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = pipeline.run(&config.sources, &mut out)?;
    out.flush()?;

    Ok(ExitCode::from(stats.exit_code() as u8))
}
