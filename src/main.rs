use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tasksift::cli::args::{Cli, Commands};
use tasksift::cli::commands;
use tasksift::config::{ColorSetting, Config};

fn main() {
    match run() {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        },
    }
}

/// Run the CLI. Returns `Ok(false)` when the command succeeded but reported
/// a failure, such as a rejected task.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let mut success = true;

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(args, &config, format)?,
        Commands::Validate(args) => {
            let report = commands::validate(args, format)?;
            success = report.all_valid;
            report.output
        },
        Commands::Config(args) => commands::config(args.command, &config, cli.config.as_deref())?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }
    Ok(success)
}

/// Log to stderr, filtered by `TASKSIFT_LOG` when set.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "tasksift=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TASKSIFT_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
