//! Command-line interface for the fatlang tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fatlang")]
#[command(about = "fatlang runtime surface tooling", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the C header declaring every runtime symbol
    Header {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List symbol prototypes
    #[command(alias = "ls")]
    Symbols {
        /// Only symbols of this family (operator, cast, io, memory, process)
        #[arg(long)]
        family: Option<String>,
        /// Only symbols taking or returning this kind
        #[arg(long)]
        kind: Option<String>,
    },
}
