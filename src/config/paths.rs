//! Path resolution for tasksift configuration.
//!
//! All tasksift data lives in `~/.tasksift/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::SiftError;

/// Paths to tasksift configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tasksift/`
    pub root: PathBuf,
    /// Config file: `~/.tasksift/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SiftError> {
        let home = std::env::var("HOME")
            .map_err(|_| SiftError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tasksift")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), SiftError> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            SiftError::Config(format!(
                "Failed to create directory {}: {e}",
                self.root.display()
            ))
        })
    }
}
