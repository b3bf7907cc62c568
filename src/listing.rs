//! Directory listing and hidden-file filtering.
//!
//! Produces the set of candidate file names for one sorting run. Entries are
//! re-read on every invocation; nothing is cached between runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a directory listing cannot be produced.
#[derive(Debug)]
pub struct ListError {
    /// The directory that could not be read.
    pub path: PathBuf,
    /// The underlying IO error.
    pub source: io::Error,
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to read directory {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for ListError {}

/// Returns true if a file name denotes a hidden entry.
///
/// A name is hidden iff its first character is the extension separator (`.`).
///
/// # Examples
///
/// ```
/// use dirsort::listing::is_hidden;
///
/// assert!(is_hidden(".bashrc"));
/// assert!(!is_hidden("notes.txt"));
/// assert!(!is_hidden("archive.tar.gz"));
/// ```
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lists the regular files directly inside `dir`.
///
/// Hidden entries are excluded unless `include_hidden` is set. Directories
/// and other non-file entries are never returned, so category folders left
/// over from a previous run are not candidates for relocation. The order of
/// the returned names is whatever the filesystem yields and carries no
/// meaning; callers must treat the result as an unordered set.
pub fn list_entries(dir: &Path, include_hidden: bool) -> Result<Vec<String>, ListError> {
    let entries = fs::read_dir(dir).map_err(|e| ListError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut listing = Vec::new();
    for entry in entries.flatten() {
        if let Ok(file_type) = entry.file_type()
            && file_type.is_file()
        {
            let name = entry.file_name().to_string_lossy().to_string();
            // Empty names must never reach the classifier.
            if name.is_empty() {
                continue;
            }
            if !include_hidden && is_hidden(&name) {
                continue;
            }
            listing.push(name);
        }
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_hidden_dotfiles() {
        assert!(is_hidden(".DS_Store"));
        assert!(is_hidden(".hidden"));
        assert!(is_hidden("."));
    }

    #[test]
    fn test_is_hidden_regular_names() {
        assert!(!is_hidden("photo.jpg"));
        assert!(!is_hidden("README"));
        assert!(!is_hidden("a.tar.gz"));
    }

    #[test]
    fn test_list_excludes_hidden_by_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "h").unwrap();

        let mut listing = list_entries(temp_dir.path(), false).expect("Listing failed");
        listing.sort();
        assert_eq!(listing, vec!["a.txt"]);
    }

    #[test]
    fn test_list_includes_hidden_on_request() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join(".hidden"), "h").unwrap();

        let mut listing = list_entries(temp_dir.path(), true).expect("Listing failed");
        listing.sort();
        assert_eq!(listing, vec![".hidden", "a.txt"]);
    }

    #[test]
    fn test_list_skips_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("subdir.ext")).unwrap();

        let listing = list_entries(temp_dir.path(), false).expect("Listing failed");
        assert_eq!(listing, vec!["a.txt"]);
    }

    #[test]
    fn test_list_unreadable_directory() {
        let result = list_entries(Path::new("/non/existent/path"), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let listing = list_entries(temp_dir.path(), false).expect("Listing failed");
        assert!(listing.is_empty());
    }
}
