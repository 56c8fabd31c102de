//! Error types for stylelink

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum StylelinkError {
    /// Root directory is missing or not a directory
    #[error("root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("file '{path}' is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Failed to write a file back
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Gitignore-aware traversal failed
    #[error("failed to walk directory tree: {0}")]
    IgnoreWalk(#[from] ignore::Error),

    /// Stylesheet href cannot be embedded in a link tag
    #[error("invalid stylesheet href '{href}': {reason}")]
    InvalidStylesheet { href: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, StylelinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = StylelinkError::FileRead {
            path: PathBuf::from("site/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read file 'site/index.html': gone"
        );

        let err = StylelinkError::InvalidStylesheet {
            href: String::new(),
            reason: "href is empty",
        };
        assert_eq!(err.to_string(), "invalid stylesheet href '': href is empty");
    }

    #[test]
    fn test_decode_error_message() {
        let source = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err();
        let err = StylelinkError::Decode {
            path: PathBuf::from("bad.html"),
            source,
        };
        assert!(err.to_string().starts_with("file 'bad.html' is not valid UTF-8"));
    }
}
