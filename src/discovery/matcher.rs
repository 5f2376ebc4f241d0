//! File matching functionality
//!
//! Predicates compose as "any of": a file is selected when at least one
//! predicate accepts it, and an empty predicate set accepts everything.

use std::path::Path;

use log::trace;

use crate::discovery::EntryInfo;
use crate::query::Predicate;

/// Checks a regular file against a predicate set
///
/// # Arguments
/// * `predicates` - The predicates of the query, in insertion order
/// * `path` - Absolute path of the file
/// * `info` - Metadata of the file
///
/// # Returns
/// * `bool` - True when the set is empty or any predicate matches
pub fn is_match(predicates: &[Predicate], path: &Path, info: &EntryInfo) -> bool {
    if predicates.is_empty() {
        return true;
    }

    let matched = predicates
        .iter()
        .any(|predicate| predicate.matches(path, info));

    trace!(
        "{} {} against {} predicates",
        path.display(),
        if matched { "matched" } else { "did not match" },
        predicates.len()
    );

    matched
}
