//! Search profile loading
//!
//! This module contains functions for reading profiles from disk.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde_yaml::from_str;

use crate::constants::{APPLICATION, DEFAULT_CONFIG_FILE, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, config_parsing_error, file_operation_error};

use super::model::SearchConfig;

impl SearchConfig {
    /// Parses a profile from YAML text
    ///
    /// An empty document yields the default profile.
    ///
    /// # Errors
    /// Returns an error if the YAML is malformed, contains unknown fields or
    /// holds values of the wrong type (for example a negative depth)
    pub fn from_yaml(content: &str) -> Result<Self> {
        parse_profile(content, "Failed to parse search profile")
    }
}

fn parse_profile(content: &str, detail: &str) -> Result<SearchConfig> {
    if content.trim().is_empty() {
        return Ok(SearchConfig::default());
    }

    from_str(content).map_err(|e| config_parsing_error(e, detail))
}

/// Loads a profile from a YAML file
///
/// # Arguments
/// * `file` - Path to the profile
///
/// # Returns
/// * `Result<SearchConfig>` - The loaded profile or an error
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid profile
pub fn load_config(file: &Path) -> Result<SearchConfig> {
    debug!("Loading search profile from {}", file.display());

    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read search profile"))?;

    parse_profile(
        &content,
        &format!("Failed to parse search profile {}", file.display()),
    )
}

/// Location of the default profile in the platform configuration directory
///
/// Returns `None` when no home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|folder| folder.config_dir().join(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_yaml_full_profile() {
        let config = SearchConfig::from_yaml(
            r#"
root: /data
depth: 2
ext: [txt, ".json"]
size: 20
empty: true
glob: "*.md"
regex:
  - "src/.*"
"#,
        )
        .unwrap();

        assert_eq!(config.root, Some(PathBuf::from("/data")));
        assert_eq!(config.depth, Some(2));
        assert_eq!(config.ext, vec!["txt".to_string(), ".json".to_string()]);
        assert_eq!(config.size, Some(20));
        assert!(config.empty);
        assert_eq!(config.glob, vec!["*.md".to_string()]);
        assert_eq!(config.regex, vec!["src/.*".to_string()]);
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert_eq!(SearchConfig::from_yaml("").unwrap(), SearchConfig::default());
        assert_eq!(
            SearchConfig::from_yaml("  \n").unwrap(),
            SearchConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_rejects_negative_depth() {
        let result = SearchConfig::from_yaml("depth: -1");
        assert!(matches!(result, Err(crate::Error::ConfigParsing { .. })));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let result = SearchConfig::from_yaml("extension: txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("profile.yaml");
        fs::write(&path, "ext: rs\ndepth: 0\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.ext, vec!["rs".to_string()]);
        assert_eq!(config.depth, Some(0));
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let error = load_config(&path).unwrap_err();
        assert!(format!("{error}").contains("missing.yaml"));
    }

    #[test]
    fn test_load_config_error_names_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "depth: [").unwrap();

        let error = load_config(&path).unwrap_err();
        assert!(format!("{error}").contains("broken.yaml"));
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(DEFAULT_CONFIG_FILE));
        }
    }
}
