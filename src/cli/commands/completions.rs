//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::SiftError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell, install: bool) -> Result<String, SiftError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, SiftError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tasksift", &mut buf);
    String::from_utf8(buf).map_err(|e| SiftError::Input(format!("UTF-8 error: {e}")))
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(tasksift completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
tasksift completions zsh > ~/.zsh/completions/_tasksift
# Then add to ~/.zshrc (before compinit):
fpath=(~/.zsh/completions $fpath)
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
tasksift completions fish > ~/.config/fish/completions/tasksift.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile:
tasksift completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        _ => format!("# Generate with:\ntasksift completions {shell}\n"),
    }
}
