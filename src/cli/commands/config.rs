//! Config command implementation.

use std::path::Path;

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::SiftError;

/// Execute a config subcommand.
///
/// `config_path` is the `--config` override, if one was given.
///
/// # Errors
///
/// Returns an error if the config location cannot be resolved or written.
pub fn config(
    cmd: ConfigCommands,
    current: &Config,
    config_path: Option<&Path>,
) -> Result<String, SiftError> {
    match cmd {
        ConfigCommands::Show => current.to_yaml(),

        ConfigCommands::Path => Ok(resolve_path(config_path)?.display().to_string()),

        ConfigCommands::Init { force } => {
            let path = resolve_path(config_path)?;
            if path.exists() && !force {
                return Err(SiftError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }

            match config_path {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    Config::default().save_to_path(path)?;
                },
                None => Config::default().save()?,
            }

            Ok(format!("Wrote default configuration to {}", path.display()))
        },
    }
}

fn resolve_path(config_path: Option<&Path>) -> Result<std::path::PathBuf, SiftError> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::new()?.config_file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_show_prints_yaml() {
        let output = config(ConfigCommands::Show, &Config::default(), None).unwrap();
        assert!(output.contains("max_line_length: 200"));
        assert!(output.contains("bare_hour: afternoon"));
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("config.yaml");

        let output = config(
            ConfigCommands::Init { force: false },
            &Config::default(),
            Some(path.as_path()),
        )
        .unwrap();
        assert!(output.contains("Wrote default configuration"));
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());

        let again = config(
            ConfigCommands::Init { force: false },
            &Config::default(),
            Some(path.as_path()),
        );
        assert!(matches!(again, Err(SiftError::Config(_))));

        assert!(config(
            ConfigCommands::Init { force: true },
            &Config::default(),
            Some(path.as_path()),
        )
        .is_ok());
    }

    #[test]
    fn test_path_uses_override() {
        let path = Path::new("/tmp/custom.yaml");
        let output = config(ConfigCommands::Path, &Config::default(), Some(path)).unwrap();
        assert_eq!(output, "/tmp/custom.yaml");
    }
}
