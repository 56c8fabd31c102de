//! Injector - ensures HTML pages link the shared stylesheet
//!
//! Provides:
//! - discover: eligible file enumeration
//! - process: per-file detection and insertion
//!
//! Files are handled one at a time, in traversal order, on the calling thread.

pub mod discover;
pub mod process;

use std::path::{Path, PathBuf};

use crate::core::error::{Result, StylelinkError};
use crate::core::model::{FileReport, Outcome, RunSummary, Status};
use crate::core::paths::display_path;

use self::discover::Discovery;
use self::process::{process_file, Stylesheet};

/// Scans a root and links the stylesheet into every eligible page
#[derive(Debug, Clone)]
pub struct Injector {
    discovery: Discovery,
    stylesheet: Stylesheet,
}

impl Injector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            discovery: Discovery::new(root),
            stylesheet: Stylesheet::default(),
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn exclude(mut self, dirs: impl IntoIterator<Item = String>) -> Self {
        self.discovery = self.discovery.exclude(dirs);
        self
    }

    pub fn respect_gitignore(mut self, enabled: bool) -> Self {
        self.discovery = self.discovery.gitignore(enabled);
        self
    }

    pub fn root(&self) -> &Path {
        self.discovery.root()
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Candidate files, freshly enumerated on every call
    pub fn discover(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        self.discovery.paths()
    }

    /// Handle one file; only writes when `apply` is set
    pub fn process(&self, path: &Path, apply: bool) -> Result<Outcome> {
        process_file(path, &self.stylesheet, apply)
    }

    /// Process every candidate, passing each report to `on_report` as it happens.
    ///
    /// The first error aborts the run; files already written stay written.
    pub fn run<F>(&self, apply: bool, mut on_report: F) -> Result<RunSummary>
    where
        F: FnMut(&FileReport),
    {
        let root = self.root();
        if !root.is_dir() {
            return Err(StylelinkError::RootNotFound(root.to_path_buf()));
        }

        let mut summary = RunSummary::new(apply);
        for path in self.discover() {
            let path = path?;
            let outcome = self.process(&path, apply)?;
            summary.record(outcome);

            let report = FileReport::new(
                display_path(&path, root),
                Status::from_outcome(outcome, apply),
            );
            on_report(&report);
        }

        Ok(summary)
    }
}
