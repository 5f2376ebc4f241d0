mod common;

use std::fs;
use std::path::Path;

use common::{deeply_nested, just_files, qualify};
use filehound::Query;
use filehound::config::{SearchConfig, load_config};

// Helper function to write a profile next to the fixture and load it
fn load_profile(dir: &Path, content: &str) -> anyhow::Result<SearchConfig> {
    let path = dir.join("profile.yaml");
    fs::write(&path, content)?;
    Ok(load_config(&path)?)
}

#[test]
fn test_profile_matches_builder() {
    let root = just_files();
    let profile_dir = tempfile::tempdir().unwrap();

    let config = load_profile(
        profile_dir.path(),
        r#"
ext: ".txt"
size: 20
"#,
    )
    .unwrap();

    let from_profile = config.into_query(root.path()).unwrap().find();
    let from_builder = Query::new(root.path()).ext(["txt"]).size(20).find();

    assert_eq!(from_profile, from_builder);
    assert_eq!(from_profile, qualify(root.path(), &["b.json", "dummy.txt"]));
}

#[test]
fn test_profile_root_and_depth() {
    let root = deeply_nested();
    let profile_dir = tempfile::tempdir().unwrap();

    let content = format!("root: {:?}\ndepth: 0\n", root.path().display().to_string());
    let config = load_profile(profile_dir.path(), &content).unwrap();

    let files = config
        .into_query(Path::new("/ignored"))
        .unwrap()
        .find();

    assert_eq!(files, qualify(root.path(), &["c.json", "d.json"]));
}

#[test]
fn test_profile_with_globs_and_empty_flag() {
    let root = just_files();
    let profile_dir = tempfile::tempdir().unwrap();

    let config = load_profile(
        profile_dir.path(),
        r#"
empty: true
glob:
  - "b.*"
"#,
    )
    .unwrap();

    let files = config.into_query(root.path()).unwrap().find();

    assert_eq!(
        files,
        qualify(root.path(), &["a.json", "b.json", "dummy.txt"])
    );
}

#[test]
fn test_profile_with_invalid_glob_fails_before_search() {
    let profile_dir = tempfile::tempdir().unwrap();
    let config = load_profile(profile_dir.path(), "glob: \"[\"\n").unwrap();

    let result = config.into_query(profile_dir.path());
    assert!(matches!(result, Err(filehound::Error::GlobPattern { .. })));
}

#[test]
fn test_profile_with_invalid_regex_fails_before_search() {
    let profile_dir = tempfile::tempdir().unwrap();
    let config = load_profile(profile_dir.path(), "regex: \"(\"\n").unwrap();

    let result = config.into_query(profile_dir.path());
    assert!(matches!(result, Err(filehound::Error::PatternMatching { .. })));
}

#[test]
fn test_profile_with_negative_depth() {
    let profile_dir = tempfile::tempdir().unwrap();
    let result = load_profile(profile_dir.path(), "depth: -3\n");

    assert!(result.is_err(), "Negative depth should be rejected");
    let error = result.unwrap_err();
    assert!(
        error.to_string().contains("Failed to parse search profile"),
        "Error message should mention the profile: {error}"
    );
}

#[test]
fn test_profile_with_unknown_field() {
    let profile_dir = tempfile::tempdir().unwrap();
    let result = load_profile(profile_dir.path(), "extensions: [txt]\n");

    assert!(result.is_err(), "Unknown fields should be rejected");
}
