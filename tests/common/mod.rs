#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Creates `files` (relative path, byte length) below a fresh temporary directory
pub fn fixture(files: &[(&str, usize)]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    for (relative, len) in files {
        let path = temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, "x".repeat(*len)).expect("Failed to write fixture file");
    }
    temp_dir
}

/// `a.json` (0 bytes), `b.json` (20 bytes), `dummy.txt` (0 bytes)
pub fn just_files() -> TempDir {
    fixture(&[("a.json", 0), ("b.json", 20), ("dummy.txt", 0)])
}

/// `c.json`, `d.json`, `mydir/e.json`
pub fn nested() -> TempDir {
    fixture(&[("c.json", 2), ("d.json", 2), ("mydir/e.json", 2)])
}

/// Files at depths 0 through 3
pub fn deeply_nested() -> TempDir {
    fixture(&[
        ("c.json", 2),
        ("d.json", 2),
        ("mydir/e.json", 2),
        ("mydir/mydir2/f.json", 2),
        ("mydir/mydir2/y.json", 2),
        ("mydir/mydir2/mydir3/z.json", 2),
    ])
}

/// Json files with assorted names plus a few that are not json
pub fn mixed() -> TempDir {
    fixture(&[
        ("a.json", 1),
        ("aabbcc.json", 1),
        ("ab.json", 1),
        ("z.json", 1),
        ("notes.txt", 1),
        ("README", 1),
    ])
}

/// Two dotfiles next to an ordinary text file
pub fn dotfiles() -> TempDir {
    fixture(&[(".env", 1), (".txt", 1), ("a.txt", 1)])
}

/// Joins relative names onto `root`, keeping the given order
pub fn qualify(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| root.join(name)).collect()
}
