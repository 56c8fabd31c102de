//! Path utilities
//!
//! Normalizes report paths and decides which files are eligible for injection.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Extension of the files we touch (case-sensitive)
pub const HTML_EXTENSION: &str = "html";

/// Directory names that are never scanned
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "scripts"];

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Path as shown in reports: relative to root when possible
pub fn display_path(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Whether a single path component names an excluded directory
pub fn is_excluded_name(name: &OsStr, excluded_dirs: &[String]) -> bool {
    excluded_dirs.iter().any(|dir| name == OsStr::new(dir))
}

/// Check whether `path` is a candidate for injection.
///
/// Only the extension and the components below `root` are inspected, so a
/// root that itself lives under e.g. `scripts/` is still scanned.
pub fn is_eligible(path: &Path, root: &Path, excluded_dirs: &[String]) -> bool {
    if path.extension() != Some(OsStr::new(HTML_EXTENSION)) {
        return false;
    }

    let relative = path.strip_prefix(root).unwrap_or(path);
    !relative.components().any(|component| match component {
        Component::Normal(name) => is_excluded_name(name, excluded_dirs),
        _ => false,
    })
}

/// The built-in excluded directories plus any extra names
pub fn excluded_dirs_with(extra: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut dirs: Vec<String> = DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect();
    for dir in extra {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// Root of the tree the tool ships in: the parent of the executable's directory
pub fn default_root() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    root_for_tool(&exe)
}

fn root_for_tool(exe: &Path) -> Option<PathBuf> {
    let tool_dir = exe.parent()?;
    Some(tool_dir.parent().unwrap_or(tool_dir).to_path_buf())
}
