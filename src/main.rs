//! stylelink - keep every HTML page in a tree linked to the shared stylesheet
//!
//! stylelink provides:
//! - Recursive discovery of .html files (skipping .git and scripts)
//! - Idempotent insertion of the stylesheet link before `</head>`
//! - Dry-run reporting by default, writes with --apply
//! - text and jsonl reports

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod core;
mod injector;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
