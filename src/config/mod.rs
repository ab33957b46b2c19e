//! Configuration management for tasksift.
//!
//! This module handles loading and saving configuration from `~/.tasksift/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ParserConfig};
