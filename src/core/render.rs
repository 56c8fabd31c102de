//! Renderer module
//!
//! Renders file reports and the run summary as text or jsonl.

use colored::Colorize;
use serde::Serialize;

use crate::core::model::{FileReport, RunSummary, Status};

/// Shown when a run changes nothing
pub const NO_CHANGES_NOTICE: &str = "No files needed changes.";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and verbosity
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

impl RenderConfig {
    #[cfg(test)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a RunSummary,
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render one file report, or `None` when it is filtered out
    pub fn render_report(&self, report: &FileReport) -> Option<String> {
        match self.config.format {
            OutputFormat::Text => self.render_report_text(report),
            OutputFormat::Jsonl => serde_json::to_string(report).ok(),
        }
    }

    /// Render the closing summary, or `None` when there is nothing to say
    pub fn render_summary(&self, summary: &RunSummary) -> Option<String> {
        match self.config.format {
            OutputFormat::Text => {
                if summary.changed == 0 && !self.config.quiet {
                    Some(NO_CHANGES_NOTICE.to_string())
                } else {
                    None
                }
            }
            OutputFormat::Jsonl => serde_json::to_string(&SummaryLine { summary }).ok(),
        }
    }

    fn render_report_text(&self, report: &FileReport) -> Option<String> {
        let label = match report.status {
            Status::Updated => "Updated:".green(),
            Status::WouldAdd => "Would add link to:".cyan(),
            Status::SkippedNoHead if !self.config.quiet => "SKIP (no </head>):".yellow(),
            Status::AlreadyLinked if self.config.verbose => "Already linked:".dimmed(),
            _ => return None,
        };
        Some(format!("{} {}", label, report.path))
    }
}
