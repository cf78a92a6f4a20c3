//! fpkit-demo - prints one worked example per fpkit capability.
//!
//! Usage:
//!   fpkit-demo [--only <DEMO>]... [--list]
//!
//! Logging is controlled with `RUST_LOG` (default `warn`).

mod cli;
mod demos;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Demo};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for demo in <Demo as clap::ValueEnum>::value_variants() {
            writeln!(out, "{}", demo.name())?;
        }
        return Ok(());
    }

    let selection = cli.selection();
    tracing::info!(count = selection.len(), "running demonstrations");
    demos::run(&selection, &mut out)?;
    out.flush()?;
    Ok(())
}
