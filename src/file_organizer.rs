/// Folder provisioning and file relocation.
///
/// This module performs the two filesystem mutations this tool makes:
/// creating destination folders and renaming files into them. Provisioning
/// and moving are deliberately separate steps so that every destination
/// folder of a run exists before the first file is moved into it.
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while provisioning folders or moving files.
#[derive(Debug)]
pub enum SortError {
    /// Failed to create a destination folder.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file into its destination folder.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// The target directory is missing or unusable.
    InvalidBasePath {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::InvalidBasePath { path, source } => {
                write!(f, "Invalid base path {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SortError {}

/// Result type for sorting operations.
pub type SortResult<T> = Result<T, SortError>;

/// Moves files into their destination folders within a base directory.
pub struct FileRelocator;

impl FileRelocator {
    /// Ensures a destination folder exists under `base`.
    ///
    /// Any needed parent segments are created and a pre-existing folder is
    /// not an error. Returns the folder's full path.
    pub fn provision(base: &Path, folder: &str) -> SortResult<PathBuf> {
        if !base.exists() {
            return Err(SortError::InvalidBasePath {
                path: base.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "base path does not exist",
                ),
            });
        }

        let folder_path = base.join(folder);
        fs::create_dir_all(&folder_path).map_err(|e| SortError::DirectoryCreationFailed {
            path: folder_path.clone(),
            source: e,
        })?;

        Ok(folder_path)
    }

    /// Moves `base/file_name` into `base/folder/file_name`.
    ///
    /// The destination folder must already have been provisioned. A file of
    /// the same name already at the destination is overwritten; the last
    /// move wins. Returns the file's new path.
    pub fn relocate(base: &Path, file_name: &str, folder: &str) -> SortResult<PathBuf> {
        let source = base.join(file_name);
        let destination = base.join(folder).join(file_name);

        fs::rename(&source, &destination).map_err(|e| SortError::FileMoveFailure {
            source: source.clone(),
            destination: destination.clone(),
            source_error: e,
        })?;

        Ok(destination)
    }
}
