use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use shellexpand::tilde;

/// Expands a leading `~` to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(tilde(path).into_owned())
}

/// Strips a single leading dot so `.txt` and `txt` compare equal
pub fn normalize_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Returns the text after the last dot of the base name, if it is valid unicode
///
/// Unlike [`Path::extension`], a leading dot counts, so `.env` has the
/// extension `env`.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(OsStr::to_str)
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
}

/// Returns the base name of a path as a lossy string
///
/// Paths without a final component (such as `/` or `..`) yield an empty string.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".txt"), "txt");
        assert_eq!(normalize_extension("txt"), "txt");
        assert_eq!(normalize_extension("..txt"), ".txt");
        assert_eq!(normalize_extension(""), "");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("/a/b.json")), Some("json"));
        assert_eq!(file_extension(Path::new("/a/archive.tar.gz")), Some("gz"));
        assert_eq!(file_extension(Path::new("/a/Makefile")), None);
        assert_eq!(file_extension(Path::new("/a/.bashrc")), Some("bashrc"));
        assert_eq!(file_extension(Path::new("/a/.config.yaml")), Some("yaml"));
        assert_eq!(file_extension(Path::new("/a.d/Makefile")), None);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("/a/b/c.json")), "c.json");
        assert_eq!(base_name(Path::new("/")), "");
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(expand_path("/tmp/data"), PathBuf::from("/tmp/data"));
        assert_eq!(expand_path("relative"), PathBuf::from("relative"));
    }
}
