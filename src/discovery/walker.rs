//! Depth-bounded directory walk
//!
//! Entries are visited depth first in lexical order, each directory's
//! contents immediately after the directory itself. Direct children of the
//! root sit at depth 0, so a directory at depth `d` is only entered when
//! `d + 1` does not exceed the query's maximum depth.

use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::discovery::filesystem::{EntryKind, FileSystem, LocalFileSystem};
use crate::discovery::matcher::is_match;
use crate::query::Query;

/// Executes queries against a [`FileSystem`]
#[derive(Debug, Clone, Default)]
pub struct Walker<F = LocalFileSystem> {
    fs: F,
}

impl Walker<LocalFileSystem> {
    /// Creates a walker over the local filesystem
    pub fn new() -> Self {
        Walker {
            fs: LocalFileSystem,
        }
    }
}

impl<F: FileSystem> Walker<F> {
    /// Creates a walker over a custom filesystem
    pub fn with_file_system(fs: F) -> Self {
        Walker { fs }
    }

    /// Runs one search and returns the absolute paths of all matching files
    ///
    /// A root that is missing or unreadable yields an empty result, as do
    /// roots that are not directories. Unreadable subdirectories are skipped.
    pub fn search(&self, query: Query) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let root = match std::path::absolute(query.root()) {
            Ok(root) => root,
            Err(e) => {
                debug!("Cannot resolve search root {}: {e}", query.root().display());
                return files;
            }
        };

        debug!(
            "Searching {} (max depth {}, {} predicates)",
            root.display(),
            query.max_depth(),
            query.predicates().len()
        );

        match self.fs.list(&root) {
            Ok(entries) => self.visit(&query, entries, 0, &mut files),
            Err(e) => debug!("Cannot read search root {}: {e}", root.display()),
        }

        debug!("Found {} files below {}", files.len(), root.display());

        files
    }

    fn visit(
        &self,
        query: &Query,
        mut entries: Vec<PathBuf>,
        depth: usize,
        files: &mut Vec<PathBuf>,
    ) {
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for path in entries {
            let info = match self.fs.stat(&path) {
                Ok(info) => info,
                Err(e) => {
                    debug!("Skipping {}: {e}", path.display());
                    continue;
                }
            };

            match info.kind() {
                EntryKind::Directory => self.descend(query, &path, depth, files),
                EntryKind::File => {
                    if is_match(query.predicates(), &path, &info) {
                        files.push(path);
                    }
                }
                EntryKind::Symlink | EntryKind::Other => {
                    trace!("Ignoring non-regular entry {}", path.display());
                }
            }
        }
    }

    fn descend(&self, query: &Query, dir: &Path, depth: usize, files: &mut Vec<PathBuf>) {
        if depth >= query.max_depth() {
            trace!("Not descending into {} at depth {depth}", dir.display());
            return;
        }

        match self.fs.list(dir) {
            Ok(children) => self.visit(query, children, depth + 1, files),
            Err(e) => warn!("Skipping unreadable directory {}: {e}", dir.display()),
        }
    }
}
