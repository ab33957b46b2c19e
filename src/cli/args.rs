use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::BareHourPolicy;
use crate::nlp::Priority;

#[derive(Parser)]
#[command(name = "tasksift")]
#[command(about = "Extract structured tasks from AI planning output")]
#[command(long_about = "tasksift - structured tasks from free-text plans

Reads the kind of text an AI assistant writes when asked to plan a day
(bullet lists, numbered lists, prose around them) and turns every task line
into a record with a title, start/end time, duration and priority.

QUICK START:
  tasksift parse plan.txt                 Parse a saved response
  pbpaste | tasksift parse                Parse from stdin
  tasksift parse plan.txt -o json         Machine-readable output
  tasksift parse -o json plan.txt | tasksift validate
                                          Check the parsed tasks

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tasksift <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file (default: ~/.tasksift/config.yaml)
    #[arg(long, global = true, env = "TASKSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log parser decisions to stderr
    ///
    /// Overridden by the TASKSIFT_LOG environment variable, which takes a
    /// tracing filter such as "tasksift=trace".
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse tasks out of planning text
    ///
    /// Reads a file (or stdin) and prints one task per recognized line.
    /// Headers, questions and conversational prose are skipped.
    ///
    /// # Examples
    ///
    ///   tasksift parse plan.txt
    ///   echo "• Meeting at 10am" | tasksift parse
    ///   tasksift parse plan.txt --validated-only -o json
    ///   tasksift parse plan.txt --default-priority medium
    ///
    /// # Supported Patterns
    ///
    ///   Lists:      • item, - item, * item, 1. item, 1) item
    ///   Times:      10am, 12:30pm, 14:00, at 6, 3-4pm, from 9 to 11am
    ///   Durations:  for 30 minutes, for 2 hours, for 1 hour 30 minutes
    ///   Priority:   (high priority), [low priority], (priority: medium)
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Validate tasks given as JSON
    ///
    /// Accepts a single task object, an array of tasks, or the JSON output
    /// of `tasksift parse`. Exits with status 1 if any task is rejected.
    ///
    /// # Examples
    ///
    ///   tasksift validate tasks.json
    ///   echo '{"title": "ab"}' | tasksift validate
    #[command(alias = "v")]
    Validate(ValidateArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   tasksift completions zsh > ~/.zsh/completions/_tasksift
    ///   tasksift completions bash --install
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead of the script
        #[arg(long)]
        install: bool,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// File to read; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Only print tasks that pass validation
    #[arg(long)]
    pub validated_only: bool,

    /// Priority for tasks that don't state one
    #[arg(long, value_enum)]
    pub default_priority: Option<Priority>,

    /// How to read hours written without am/pm
    #[arg(long, value_enum)]
    pub bare_hour: Option<BareHourPolicy>,

    /// Skip lines longer than this many characters
    #[arg(long)]
    pub max_line_length: Option<usize>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// JSON file to read; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
