//! Run configuration and the home-directory safeguard.
//!
//! Every knob for one sorting run lives in an immutable [`SortConfig`] built
//! once at startup: the resolved target directory, the classification
//! strategy, and whether hidden files participate. Construction performs the
//! single validation gate this tool has: it refuses to operate on the
//! user's home directory, before anything is listed or moved.

use crate::file_category::SortMode;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while building the run configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The target directory is the user's home directory.
    HomeDirectoryTarget(PathBuf),
    /// The user's home directory could not be determined.
    HomeNotResolved,
    /// The current working directory could not be determined.
    CurrentDirUnresolved(io::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::HomeDirectoryTarget(path) => {
                write!(
                    f,
                    "Refusing to sort the home directory: {}",
                    path.display()
                )
            }
            ConfigError::HomeNotResolved => {
                write!(f, "Could not determine the home directory")
            }
            ConfigError::CurrentDirUnresolved(e) => {
                write!(f, "Could not determine the current directory: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable configuration for a single sorting run.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// The directory whose top-level files get sorted.
    pub target: PathBuf,
    /// The classification strategy in effect.
    pub mode: SortMode,
    /// Whether hidden files are eligible for sorting. Off by default.
    pub include_hidden: bool,
}

impl SortConfig {
    /// Builds a configuration from the process environment.
    ///
    /// Resolves the home directory and, when `dir` is the default `.`
    /// placeholder, the current working directory, then applies the
    /// safeguard via [`SortConfig::resolve`].
    pub fn from_environment(dir: PathBuf, mode: SortMode) -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotResolved)?;
        let cwd = env::current_dir().map_err(ConfigError::CurrentDirUnresolved)?;
        Self::resolve(dir, mode, &home, &cwd)
    }

    /// Builds a configuration against an explicit home and working
    /// directory, refusing a target that equals the home directory.
    ///
    /// The default `.` placeholder is resolved to `cwd` before the
    /// comparison; any other path is compared literally, without
    /// canonicalization.
    pub fn resolve(
        dir: PathBuf,
        mode: SortMode,
        home: &Path,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        let target = if dir == Path::new(".") {
            cwd.to_path_buf()
        } else {
            dir
        };

        if target == home {
            return Err(ConfigError::HomeDirectoryTarget(target));
        }

        Ok(Self {
            target,
            mode,
            include_hidden: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_home_target_is_refused() {
        let home = Path::new("/home/somebody");
        let cwd = Path::new("/home/somebody/downloads");

        let result = SortConfig::resolve(
            PathBuf::from("/home/somebody"),
            SortMode::ByCategory,
            home,
            cwd,
        );
        assert!(matches!(result, Err(ConfigError::HomeDirectoryTarget(_))));
    }

    #[test]
    fn test_default_placeholder_resolves_to_cwd() {
        let home = Path::new("/home/somebody");
        let cwd = Path::new("/home/somebody/downloads");

        let config =
            SortConfig::resolve(PathBuf::from("."), SortMode::ByCategory, home, cwd).unwrap();
        assert_eq!(config.target, cwd);
    }

    #[test]
    fn test_default_placeholder_in_home_is_refused() {
        let home = Path::new("/home/somebody");
        let cwd = Path::new("/home/somebody");

        let result = SortConfig::resolve(PathBuf::from("."), SortMode::ByExtension, home, cwd);
        assert!(matches!(result, Err(ConfigError::HomeDirectoryTarget(_))));
    }

    #[test]
    fn test_explicit_target_kept_literally() {
        let home = Path::new("/home/somebody");
        let cwd = Path::new("/home/somebody");

        // An explicit path is not rewritten to the working directory.
        let config = SortConfig::resolve(
            PathBuf::from("/tmp/downloads"),
            SortMode::ByExtension,
            home,
            cwd,
        )
        .unwrap();
        assert_eq!(config.target, Path::new("/tmp/downloads"));
        assert!(!config.include_hidden);
    }
}
