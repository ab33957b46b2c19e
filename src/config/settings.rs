//! Configuration settings for tasksift.
//!
//! Settings are loaded from `~/.tasksift/config.yaml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::BareHourPolicy;
use crate::error::SiftError;
use crate::nlp::{ParserOptions, Priority, DEFAULT_MAX_LINE_LENGTH};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Parser settings.
    pub parser: ParserConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines longer than this many characters are treated as prose.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// How hours written without am/pm are read.
    #[serde(default)]
    pub bare_hour: BareHourPolicy,
    /// Priority given to tasks that don't state one. Unset keeps them empty.
    #[serde(default)]
    pub default_priority: Option<Priority>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            bare_hour: BareHourPolicy::default(),
            default_priority: None,
        }
    }
}

impl ParserConfig {
    /// Parser options described by this configuration.
    #[must_use]
    pub const fn options(&self) -> ParserOptions {
        ParserOptions {
            max_line_length: self.max_line_length,
            bare_hour: self.bare_hour,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, SiftError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, SiftError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SiftError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            SiftError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        if config.parser.max_line_length == 0 {
            return Err(SiftError::Config(format!(
                "parser.max_line_length must be positive in {}",
                path.display()
            )));
        }

        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), SiftError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), SiftError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            SiftError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, SiftError> {
        serde_yaml::to_string(self)
            .map_err(|e| SiftError::Config(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.parser.max_line_length, 200);
        assert_eq!(config.parser.bare_hour, BareHourPolicy::Afternoon);
        assert_eq!(config.parser.default_priority, None);
        assert_eq!(config.parser.options(), ParserOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.general.default_output = OutputFormat::Json;
        config.parser.bare_hour = BareHourPolicy::TwentyFourHour;
        config.parser.default_priority = Some(Priority::Medium);

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
parser:
  bare_hour: twenty-four-hour
  default_priority: low
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom values should be loaded
        assert_eq!(config.parser.bare_hour, BareHourPolicy::TwentyFourHour);
        assert_eq!(config.parser.default_priority, Some(Priority::Low));
        // Defaults should be used for missing fields
        assert_eq!(config.parser.max_line_length, 200);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "parser:\n  bare_hour: sometimes\n").unwrap();
        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(SiftError::Config(_))
        ));

        std::fs::write(&config_path, "parser:\n  max_line_length: 0\n").unwrap();
        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(SiftError::Config(_))
        ));
    }
}
