//! HTML file discovery
//!
//! Uses walkdir for the default traversal and the ignore crate when
//! `.gitignore` rules should be honoured.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{Result, StylelinkError};
use crate::core::paths::{excluded_dirs_with, is_eligible, is_excluded_name};

/// A re-enumerable set of candidate files under a root
#[derive(Debug, Clone)]
pub struct Discovery {
    root: PathBuf,
    excluded_dirs: Vec<String>,
    gitignore: bool,
}

impl Discovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_dirs: excluded_dirs_with(Vec::new()),
            gitignore: false,
        }
    }

    /// Exclude more directory names on top of `.git` and `scripts`
    pub fn exclude(mut self, dirs: impl IntoIterator<Item = String>) -> Self {
        self.excluded_dirs = excluded_dirs_with(dirs);
        self
    }

    pub fn gitignore(mut self, enabled: bool) -> Self {
        self.gitignore = enabled;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree. Each call starts a fresh traversal.
    pub fn paths(&self) -> Box<dyn Iterator<Item = Result<PathBuf>> + '_> {
        if self.gitignore {
            Box::new(self.gitignore_walk())
        } else {
            Box::new(self.plain_walk())
        }
    }

    fn accept(&self, path: &Path) -> bool {
        path.is_file() && is_eligible(path, &self.root, &self.excluded_dirs)
    }

    fn plain_walk(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                entry.depth() == 0 || !is_excluded_name(entry.file_name(), &self.excluded_dirs)
            })
            .filter_map(move |entry| match entry {
                Ok(entry) if self.accept(entry.path()) => Some(Ok(entry.into_path())),
                Ok(_) => None,
                Err(e) => Some(Err(StylelinkError::from(e))),
            })
    }

    fn gitignore_walk(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        let excluded = self.excluded_dirs.clone();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .ignore(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0 || !is_excluded_name(entry.file_name(), &excluded)
            });

        builder.build().filter_map(move |entry| match entry {
            Ok(entry) if self.accept(entry.path()) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(StylelinkError::from(e))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn relative_set(discovery: &Discovery) -> BTreeSet<String> {
        discovery
            .paths()
            .map(|p| {
                let p = p.unwrap();
                crate::core::paths::display_path(&p, discovery.root())
            })
            .collect()
    }

    fn set(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_discover_empty_dir() {
        let temp = tempdir().unwrap();
        let discovery = Discovery::new(temp.path());
        assert_eq!(discovery.paths().count(), 0);
    }

    #[test]
    fn test_discover_nested_html_only() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("index.html"), "");
        write_file(&temp.path().join("docs/guide/intro.html"), "");
        write_file(&temp.path().join("docs/notes.txt"), "");
        write_file(&temp.path().join("styles.css"), "");
        write_file(&temp.path().join("LEGACY.HTML"), "");
        write_file(&temp.path().join("old.htm"), "");

        let discovery = Discovery::new(temp.path());
        assert_eq!(
            relative_set(&discovery),
            set(&["index.html", "docs/guide/intro.html"])
        );
    }

    #[test]
    fn test_discover_skips_git_and_scripts() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("index.html"), "");
        write_file(&temp.path().join(".git/info/page.html"), "");
        write_file(&temp.path().join("scripts/preview.html"), "");
        write_file(&temp.path().join("blog/scripts/embed.html"), "");
        write_file(&temp.path().join("blog/post.html"), "");

        let discovery = Discovery::new(temp.path());
        assert_eq!(
            relative_set(&discovery),
            set(&["index.html", "blog/post.html"])
        );
    }

    #[test]
    fn test_discover_root_named_like_an_excluded_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("scripts");
        write_file(&root.join("page.html"), "");

        let discovery = Discovery::new(&root);
        assert_eq!(relative_set(&discovery), set(&["page.html"]));
    }

    #[test]
    fn test_discover_extra_excludes() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("index.html"), "");
        write_file(&temp.path().join("vendor/lib/readme.html"), "");

        let discovery = Discovery::new(temp.path()).exclude(vec!["vendor".to_string()]);
        assert_eq!(relative_set(&discovery), set(&["index.html"]));
    }

    #[test]
    fn test_discover_ignores_directories_with_html_suffix() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("archive.html")).unwrap();
        write_file(&temp.path().join("archive.html/inner.html"), "");

        let discovery = Discovery::new(temp.path());
        assert_eq!(relative_set(&discovery), set(&["archive.html/inner.html"]));
    }

    #[test]
    fn test_discover_is_restartable() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join("a.html"), "");
        write_file(&temp.path().join("b/c.html"), "");

        let discovery = Discovery::new(temp.path());
        let first = relative_set(&discovery);
        let second = relative_set(&discovery);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_discover_without_gitignore_sees_ignored_files() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join(".gitignore"), "build/\n");
        write_file(&temp.path().join("index.html"), "");
        write_file(&temp.path().join("build/out.html"), "");

        let discovery = Discovery::new(temp.path());
        assert_eq!(
            relative_set(&discovery),
            set(&["index.html", "build/out.html"])
        );
    }

    #[test]
    fn test_discover_with_gitignore() {
        let temp = tempdir().unwrap();
        write_file(&temp.path().join(".gitignore"), "build/\n");
        write_file(&temp.path().join("index.html"), "");
        write_file(&temp.path().join("build/out.html"), "");
        write_file(&temp.path().join(".hidden/page.html"), "");
        write_file(&temp.path().join("scripts/tool.html"), "");

        let discovery = Discovery::new(temp.path()).gitignore(true);
        assert_eq!(
            relative_set(&discovery),
            set(&["index.html", ".hidden/page.html"])
        );
    }
}
