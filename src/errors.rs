use glob::PatternError;
use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for filehound
///
/// Only configuration can fail. A search itself never errors: unreadable
/// directories are skipped and a missing root yields no results.
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to regular expression compilation
    PatternMatching { source: RegexError, pattern: String },
    /// Error related to glob pattern compilation
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path,
                operation,
                source,
            } => {
                write!(f, "Failed to {} {}: {}", operation, path.display(), source)
            }
            Error::PatternMatching { pattern, source } => {
                write!(f, "Invalid regex pattern '{pattern}': {source}")
            }
            Error::GlobPattern { pattern, source } => {
                write!(f, "Invalid glob pattern '{pattern}': {}", source.msg)
            }
            Error::ConfigParsing { detail, source } => {
                write!(f, "Configuration parsing error: {detail}: {source}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::PatternMatching { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
        }
    }
}

/// Custom Result type for filehound
///
/// # Examples
/// ```
/// use filehound::prelude::{Result, Query};
///
/// fn json_files(root: &str) -> Result<Query> {
///     Query::new(root).glob("*.json")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a regex pattern error
pub fn pattern_matching_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternMatching {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}
