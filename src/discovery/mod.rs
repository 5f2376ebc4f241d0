//! File discovery module
//!
//! This module contains the filesystem seam, the predicate matcher and the
//! depth-bounded walker that executes a [`Query`](crate::query::Query).

mod filesystem;
mod matcher;
mod walker;

pub use filesystem::{EntryInfo, EntryKind, FileSystem, LocalFileSystem};
pub use matcher::is_match;
pub use walker::Walker;
