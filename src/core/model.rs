//! Per-file outcomes and the run summary
//!
//! Every visited file maps to exactly one `Outcome`. Reporting layers turn
//! outcomes into `FileReport`s, which is what renderers see.

use serde::{Deserialize, Serialize};

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The stylesheet was already referenced
    Unchanged,
    /// The link tag was inserted (or would be, in a dry run)
    Inserted,
    /// No `</head>` to anchor the insertion on
    SkippedNoHead,
}

impl Outcome {
    /// Whether the file needed (or received) a change
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Inserted)
    }
}

/// Reported status, which folds the apply flag into the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Updated,
    WouldAdd,
    SkippedNoHead,
    AlreadyLinked,
}

impl Status {
    pub fn from_outcome(outcome: Outcome, apply: bool) -> Self {
        if outcome.changed() {
            return if apply {
                Status::Updated
            } else {
                Status::WouldAdd
            };
        }
        match outcome {
            Outcome::SkippedNoHead => Status::SkippedNoHead,
            _ => Status::AlreadyLinked,
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to root, using '/' as separator
    pub path: String,

    pub status: Status,
}

impl FileReport {
    pub fn new(path: impl Into<String>, status: Status) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Totals accumulated across a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files updated, or that would be updated in a dry run
    pub changed: usize,

    /// Files without a `</head>`
    pub skipped: usize,

    /// Files that already link the stylesheet
    pub already_linked: usize,

    /// Whether changes were written
    pub applied: bool,
}

impl RunSummary {
    pub fn new(applied: bool) -> Self {
        Self {
            applied,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Inserted => self.changed += 1,
            Outcome::SkippedNoHead => self.skipped += 1,
            Outcome::Unchanged => self.already_linked += 1,
        }
    }

    /// Total number of files visited
    pub fn visited(&self) -> usize {
        self.changed + self.skipped + self.already_linked
    }

    /// One-line tally for diagnostics
    pub fn tally(&self) -> String {
        let verb = if self.applied {
            "updated"
        } else {
            "would be updated"
        };
        format!(
            "{} of {} file(s) {}, {} skipped, {} already linked",
            self.changed,
            self.visited(),
            verb,
            self.skipped,
            self.already_linked
        )
    }
}
