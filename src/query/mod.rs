//! Search queries
//!
//! A [`Query`] accumulates a root, a depth bound and a list of predicates,
//! then hands itself to the [`Walker`](crate::discovery::Walker).

mod predicate;

use std::env;
use std::path::{Path, PathBuf};

pub use predicate::{FilterFn, Predicate};

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::discovery::{EntryInfo, Walker};
use crate::errors::{Result, file_operation_error};

/// One search configuration
///
/// Predicates combine with logical OR: a file is selected when any of them
/// holds, and a query without predicates selects every regular file.
///
/// # Examples
/// ```no_run
/// use filehound::Query;
///
/// # fn main() -> filehound::Result<()> {
/// let files = Query::new("./fixtures")
///     .ext(["json"])
///     .glob("report-*")?
///     .depth(2)
///     .find();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    root: PathBuf,
    max_depth: usize,
    predicates: Vec<Predicate>,
}

impl Query {
    /// Creates a query rooted at `root` with the default depth and no predicates
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Query {
            root: root.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            predicates: Vec::new(),
        }
    }

    /// Creates a query rooted at the process working directory
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined
    pub fn in_current_dir() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            file_operation_error(e, PathBuf::from("."), "resolve working directory")
        })?;
        Ok(Query::new(cwd))
    }

    /// Replaces the search root
    pub fn path(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Replaces the recursion bound; 0 searches only the root's direct children
    pub fn depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Appends a predicate
    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Appends an arbitrary filter function
    pub fn filter<F>(self, filter: F) -> Self
    where
        F: Fn(&Path, &EntryInfo) -> bool + Send + Sync + 'static,
    {
        self.predicate(Predicate::custom(filter))
    }

    /// Selects files with any of the given extensions
    pub fn ext<I, S>(self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.predicate(Predicate::extension(exts))
    }

    /// Selects files of exactly `bytes` bytes
    pub fn size(self, bytes: u64) -> Self {
        self.predicate(Predicate::size(bytes))
    }

    /// Selects empty files
    pub fn empty(self) -> Self {
        self.predicate(Predicate::empty())
    }

    /// Selects files whose base name matches a shell glob
    ///
    /// # Errors
    /// Returns an error if the pattern is malformed
    pub fn glob(self, pattern: &str) -> Result<Self> {
        Ok(self.predicate(Predicate::glob(pattern)?))
    }

    /// Selects files whose full path matches a regular expression
    ///
    /// # Errors
    /// Returns an error if the pattern does not compile
    pub fn regex(self, pattern: &str) -> Result<Self> {
        Ok(self.predicate(Predicate::regex(pattern)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Walks the local filesystem and returns the matching files
    pub fn find(self) -> Vec<PathBuf> {
        Walker::new().search(self)
    }
}
