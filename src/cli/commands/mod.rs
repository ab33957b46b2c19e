//! Command implementations for tasksift.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod parse;
mod validate;

pub use completions::{completion_install_instructions, completions, generate_completions};
pub use config::config;
pub use parse::parse;
pub use validate::{validate, ValidationReport};

use std::io::Read;
use std::path::Path;

use crate::error::SiftError;

/// Read command input from a file, or from stdin for `None` / `-`.
///
/// # Errors
///
/// Returns `SiftError::Io` if the file or stdin cannot be read.
pub fn read_input(file: Option<&Path>) -> Result<String, SiftError> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.txt");
        std::fs::write(&path, "• Meeting at 10am\n").unwrap();

        assert_eq!(read_input(Some(path.as_path())).unwrap(), "• Meeting at 10am\n");
    }

    #[test]
    fn test_read_input_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        assert!(matches!(read_input(Some(path.as_path())), Err(SiftError::Io(_))));
    }
}
