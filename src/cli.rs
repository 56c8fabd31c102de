//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::core::paths::default_root;
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::injector::process::{Stylesheet, DEFAULT_STYLESHEET};
use crate::injector::Injector;

/// stylelink - make sure every HTML page links the shared stylesheet.
#[derive(Parser, Debug)]
#[command(name = "stylelink")]
#[command(
    author,
    version,
    about,
    long_about = r#"stylelink scans a directory tree for .html files and inserts
<link rel="stylesheet" href="styles.css"> just before the first </head> of
every page that does not reference the stylesheet yet.

Without --apply nothing is written: each page that needs the link is listed
as "Would add link to: <path>". Pages without a </head> are reported as SKIP
and left alone. Directories named .git or scripts are never scanned.

Examples:
    stylelink                     # dry run over the project tree
    stylelink --apply
    stylelink --root site --stylesheet /assets/main.css --apply
    stylelink --check             # exit 1 if any page lacks the link
"#
)]
pub struct Cli {
    /// Write changes instead of reporting them.
    #[arg(
        long,
        conflicts_with = "check",
        long_help = "Write changes to disk. Without this flag the run is a dry run:\n\
pages that need the link are listed but never modified."
    )]
    pub apply: bool,

    /// Dry run that exits with status 1 when any page needs the link.
    #[arg(
        long,
        long_help = "Dry run for CI gates. Reports like a normal dry run, then exits with\n\
status 1 if at least one page would be changed."
    )]
    pub check: bool,

    /// Root directory to scan.
    #[arg(
        long,
        value_name = "ROOT",
        long_help = "Root directory to scan.\n\n\
Defaults to the parent of the directory holding the stylelink executable, so a\n\
binary shipped as <project>/scripts/stylelink maintains <project>. Report paths\n\
are relative to this root."
    )]
    pub root: Option<PathBuf>,

    /// Stylesheet href to ensure.
    #[arg(
        long,
        default_value = DEFAULT_STYLESHEET,
        value_name = "HREF",
        long_help = "Stylesheet href to ensure. A page counts as linked when it contains\n\
href=\"HREF\" or href='HREF' anywhere in its text."
    )]
    pub stylesheet: String,

    /// Extra directory names to skip (repeatable).
    #[arg(
        long = "exclude",
        value_name = "NAME",
        long_help = "Skip any path containing a directory with this name. May be given several\n\
times. .git and scripts are always skipped."
    )]
    pub exclude: Vec<String>,

    /// Skip files ignored by .gitignore.
    #[arg(
        long,
        long_help = "Honour .gitignore and .git/info/exclude files while scanning. Hidden files\n\
are still visited."
    )]
    pub gitignore: bool,

    /// Report format (text/jsonl).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl"],
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): one status line per page\n\
- jsonl: one JSON object per visited page, then a summary object"
    )]
    pub format: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Colors are also off when stdout is not a terminal."
    )]
    pub no_color: bool,

    /// Quiet mode (only changed pages).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Only print pages that were (or would be) changed. Skip notices and the\n\
\"No files needed changes.\" line are suppressed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Also list pages that already link the stylesheet, and print the scan root\n\
and a closing tally to stderr."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig {
        format,
        quiet: cli.quiet,
        verbose: cli.verbose,
    });

    let root = match cli.root {
        Some(root) => root,
        None => default_root().context("Failed to locate the directory stylelink lives in")?,
    };
    let root = root.canonicalize().unwrap_or(root);

    let stylesheet = Stylesheet::new(cli.stylesheet)?;
    let injector = Injector::new(&root)
        .with_stylesheet(stylesheet)
        .exclude(cli.exclude)
        .respect_gitignore(cli.gitignore);

    let apply = cli.apply;
    if cli.verbose {
        eprintln!(
            "Scanning {} for pages missing {} ({})",
            root.display(),
            injector.stylesheet().href(),
            if apply { "apply" } else { "dry run" }
        );
    }

    let summary = injector
        .run(apply, |report| {
            if let Some(line) = renderer.render_report(report) {
                println!("{}", line);
            }
        })
        .with_context(|| format!("Failed to update HTML files under {}", root.display()))?;

    if let Some(line) = renderer.render_summary(&summary) {
        println!("{}", line);
    }
    if cli.verbose {
        eprintln!("{}", summary.tally());
    }

    if cli.check && summary.changed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
