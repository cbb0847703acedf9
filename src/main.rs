//! license-head: print the top of every `license.txt` below the current
//! directory, deepest directories first.

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use license_head::ShortFilePolicy;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "license-head", version, about)]
struct Cli {
    /// Skip license files shorter than five lines instead of failing
    #[arg(long)]
    skip_short: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let policy = if cli.skip_short {
        ShortFilePolicy::Skip
    } else {
        ShortFilePolicy::Fail
    };

    let report = license_head::collect()
        .root(".")
        .short_files(policy)
        .run()?;

    debug!(
        dirs = report.stats.dirs,
        files = report.stats.files,
        matches = report.stats.matches,
        elapsed_ms = u64::try_from(report.stats.duration.as_millis()).unwrap_or(u64::MAX),
        "scan complete"
    );

    let mut out = io::stdout().lock();
    writeln!(out, "{}", report.render()).context("failed to write report")?;
    out.flush().context("failed to write report")?;

    Ok(())
}
