//! Predicates a query can select files with

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use glob::Pattern;
use regex::Regex;

use crate::discovery::EntryInfo;
use crate::errors::{Result, glob_pattern_error, pattern_matching_error};
use crate::utils::{file_extension, normalize_extension};

/// Signature of a caller-supplied predicate
pub type FilterFn = dyn Fn(&Path, &EntryInfo) -> bool + Send + Sync;

/// A single file filter
///
/// Patterns are compiled when the predicate is built, so a malformed glob or
/// regex is reported before any directory is read.
#[derive(Clone)]
pub enum Predicate {
    /// Extension equals one of the listed values (stored without leading dot)
    Extension(Vec<String>),
    /// Length in bytes equals the value exactly
    Size(u64),
    /// Base name matches a shell glob
    Glob(Pattern),
    /// Full path matches a regular expression
    Regex(Regex),
    /// Arbitrary caller-supplied function
    Custom(Arc<FilterFn>),
}

impl Predicate {
    /// Matches files whose extension is any of `exts`
    ///
    /// A leading dot in the input is ignored, so `"txt"` and `".txt"` are
    /// equivalent. Comparison is case-sensitive.
    pub fn extension<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Predicate::Extension(
            exts.into_iter()
                .map(|ext| normalize_extension(ext.as_ref()).to_string())
                .collect(),
        )
    }

    /// Matches files of exactly `bytes` bytes
    pub fn size(bytes: u64) -> Self {
        Predicate::Size(bytes)
    }

    /// Matches empty files
    pub fn empty() -> Self {
        Predicate::Size(0)
    }

    /// Matches files whose base name matches the shell glob `pattern`
    ///
    /// Classes may be negated with `[!...]` or `[^...]`.
    ///
    /// # Errors
    /// Returns an error if the pattern is malformed
    pub fn glob(pattern: &str) -> Result<Self> {
        Pattern::new(&shell_glob(pattern))
            .map(Predicate::Glob)
            .map_err(|e| glob_pattern_error(e, pattern))
    }

    /// Matches files whose full path matches the regular expression `pattern`
    ///
    /// # Errors
    /// Returns an error if the pattern does not compile
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Predicate::Regex)
            .map_err(|e| pattern_matching_error(e, pattern))
    }

    /// Wraps an arbitrary function as a predicate
    pub fn custom<F>(filter: F) -> Self
    where
        F: Fn(&Path, &EntryInfo) -> bool + Send + Sync + 'static,
    {
        Predicate::Custom(Arc::new(filter))
    }

    /// Evaluates the predicate for one regular file
    pub fn matches(&self, path: &Path, info: &EntryInfo) -> bool {
        match self {
            Predicate::Extension(exts) => file_extension(path)
                .is_some_and(|actual| exts.iter().any(|ext| ext == actual)),
            Predicate::Size(bytes) => info.len() == *bytes,
            Predicate::Glob(pattern) => pattern.matches(info.name()),
            Predicate::Regex(regex) => regex.is_match(&path.to_string_lossy()),
            Predicate::Custom(filter) => filter(path, info),
        }
    }
}

/// Rewrites shell glob syntax into the dialect of [`Pattern`]
///
/// `[^` opens a negated class like `[!`, and a run of `*` is a single
/// wildcard since base names have no separators for `**` to cross.
fn shell_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                out.push('*');
                while chars.next_if_eq(&'*').is_some() {}
            }
            '[' => {
                out.push('[');
                if chars.next_if(|&c| c == '^' || c == '!').is_some() {
                    out.push('!');
                }
                // a leading ']' is a member of the class
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
                for c in chars.by_ref() {
                    out.push(c);
                    if c == ']' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Extension(exts) => f.debug_tuple("Extension").field(exts).finish(),
            Predicate::Size(bytes) => f.debug_tuple("Size").field(bytes).finish(),
            Predicate::Glob(pattern) => f.debug_tuple("Glob").field(&pattern.as_str()).finish(),
            Predicate::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            Predicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
