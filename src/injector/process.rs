//! Stylesheet link insertion
//!
//! Detection is a plain substring search and the insertion anchor is the first
//! case-insensitive `</head>`. Nothing here parses HTML: a marker inside a
//! comment still counts as present.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, StylelinkError};
use crate::core::model::Outcome;

/// Stylesheet linked when none is given
pub const DEFAULT_STYLESHEET: &str = "styles.css";

/// Case-insensitive closing head tag
pub static HEAD_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</head>").expect("Invalid HEAD_CLOSE_RE regex"));

/// The stylesheet to ensure, with its precomputed markers and link tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    href: String,
    double_quoted: String,
    single_quoted: String,
    link_tag: String,
}

impl Stylesheet {
    /// Validate `href` and build the markers for it
    pub fn new(href: impl Into<String>) -> Result<Self> {
        let href = href.into();
        if href.is_empty() {
            return Err(StylelinkError::InvalidStylesheet {
                href,
                reason: "href is empty",
            });
        }
        if href
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '<' | '>') || c.is_whitespace())
        {
            return Err(StylelinkError::InvalidStylesheet {
                href,
                reason: "href must not contain quotes, angle brackets or whitespace",
            });
        }

        Ok(Self {
            double_quoted: format!("href=\"{}\"", href),
            single_quoted: format!("href='{}'", href),
            link_tag: format!("<link rel=\"stylesheet\" href=\"{}\">", href),
            href,
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// The element inserted before `</head>`
    pub fn link_tag(&self) -> &str {
        &self.link_tag
    }

    /// Whether `text` already references this stylesheet in either quote style
    pub fn is_linked(&self, text: &str) -> bool {
        text.contains(&self.double_quoted) || text.contains(&self.single_quoted)
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            href: DEFAULT_STYLESHEET.to_string(),
            double_quoted: format!("href=\"{}\"", DEFAULT_STYLESHEET),
            single_quoted: format!("href='{}'", DEFAULT_STYLESHEET),
            link_tag: format!("<link rel=\"stylesheet\" href=\"{}\">", DEFAULT_STYLESHEET),
        }
    }
}

/// Planned edit for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    AlreadyLinked,
    NoHead,
    /// Full rewritten document
    Insert { content: String },
}

impl Edit {
    pub fn outcome(&self) -> Outcome {
        match self {
            Edit::AlreadyLinked => Outcome::Unchanged,
            Edit::NoHead => Outcome::SkippedNoHead,
            Edit::Insert { .. } => Outcome::Inserted,
        }
    }
}

/// Decide what to do with `text` without touching the filesystem
pub fn plan_edit(text: &str, stylesheet: &Stylesheet) -> Edit {
    if stylesheet.is_linked(text) {
        return Edit::AlreadyLinked;
    }

    let offset = match HEAD_CLOSE_RE.find(text) {
        Some(m) => m.start(),
        None => return Edit::NoHead,
    };

    let link_tag = stylesheet.link_tag();
    let mut content = String::with_capacity(text.len() + link_tag.len() + 1);
    content.push_str(&text[..offset]);
    content.push_str(link_tag);
    content.push('\n');
    content.push_str(&text[offset..]);

    Edit::Insert { content }
}

/// Read `path`, insert the link if needed, and write it back when `apply` is set
pub fn process_file(path: &Path, stylesheet: &Stylesheet, apply: bool) -> Result<Outcome> {
    let bytes = fs::read(path).map_err(|source| StylelinkError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| StylelinkError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let edit = plan_edit(&text, stylesheet);
    if let Edit::Insert { content } = &edit {
        if apply {
            fs::write(path, content).map_err(|source| StylelinkError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(edit.outcome())
}
