//! Search profile data structures
//!
//! A profile describes a search in YAML so that recurring queries do not
//! have to be spelled out on the command line every time.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::errors::Result;
use crate::query::Query;
use crate::utils::expand_path;

/// A search profile
///
/// Every field is optional. Missing root falls back to the directory the
/// caller provides, missing depth to the query default.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Directory to search, `~` is expanded
    #[serde(default, deserialize_with = "deserialize_expanded_path")]
    pub root: Option<PathBuf>,
    /// Maximum recursion depth
    #[serde(default)]
    pub depth: Option<usize>,
    /// Extensions to select
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub ext: Vec<String>,
    /// Exact size in bytes to select
    #[serde(default)]
    pub size: Option<u64>,
    /// Whether to select empty files
    #[serde(default)]
    pub empty: bool,
    /// Shell globs matched against base names
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub glob: Vec<String>,
    /// Regular expressions matched against full paths
    #[serde(default, deserialize_with = "deserialize_one_or_many")]
    pub regex: Vec<String>,
}

impl SearchConfig {
    /// Overlays `other` on top of this profile
    ///
    /// Scalars set in `other` replace ours, lists are appended and the
    /// `empty` flag is kept if either side sets it.
    pub fn merge(mut self, other: SearchConfig) -> SearchConfig {
        if other.root.is_some() {
            self.root = other.root;
        }
        if other.depth.is_some() {
            self.depth = other.depth;
        }
        if other.size.is_some() {
            self.size = other.size;
        }
        self.empty |= other.empty;
        self.ext.extend(other.ext);
        self.glob.extend(other.glob);
        self.regex.extend(other.regex);
        self
    }

    /// Builds a query from the profile
    ///
    /// # Arguments
    /// * `default_root` - Root used when the profile does not name one
    ///
    /// # Errors
    /// Returns an error if a glob or regex pattern is malformed
    pub fn into_query(self, default_root: &Path) -> Result<Query> {
        let root = self.root.unwrap_or_else(|| default_root.to_path_buf());
        let mut query = Query::new(root);

        if let Some(depth) = self.depth {
            query = query.depth(depth);
        }
        if !self.ext.is_empty() {
            query = query.ext(&self.ext);
        }
        if let Some(size) = self.size {
            query = query.size(size);
        }
        if self.empty {
            query = query.empty();
        }
        for pattern in &self.glob {
            query = query.glob(pattern)?;
        }
        for pattern in &self.regex {
            query = query.regex(pattern)?;
        }

        Ok(query)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accepts either a single string or a list of strings
fn deserialize_one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

fn deserialize_expanded_path<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.map(|path| expand_path(&path)))
}
