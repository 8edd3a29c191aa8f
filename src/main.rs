//! fatlang CLI entry point.

mod cli;

use std::io::Write;
use std::path::Path;

use clap::Parser;
use cli::{Cli, Command};
use fatlang::{SymbolFilter, prototypes, render_header};
use fatlang_abi::{Family, Kind};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> fatlang::Result<()> {
    match command {
        Command::Header { output } => write_header(output.as_deref()),
        Command::Symbols { family, kind } => {
            let filter = SymbolFilter {
                family: family.as_deref().map(str::parse::<Family>).transpose()?,
                kind: kind.as_deref().map(str::parse::<Kind>).transpose()?,
            };
            list_symbols(&filter)
        }
    }
}

fn write_header(output: Option<&Path>) -> fatlang::Result<()> {
    let header = render_header();
    match output {
        Some(path) => {
            std::fs::write(path, &header)?;
            tracing::info!(path = %path.display(), bytes = header.len(), "Wrote header");
        }
        None => std::io::stdout().lock().write_all(header.as_bytes())?,
    }
    Ok(())
}

fn list_symbols(filter: &SymbolFilter) -> fatlang::Result<()> {
    let lines = prototypes(filter);
    tracing::debug!(count = lines.len(), ?filter, "Listing symbols");
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
