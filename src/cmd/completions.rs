//! Completions command implementation
//!
//! Handles the `pkg-size-report completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::Cli;

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// pkg-size-report completions bash > /etc/bash_completion.d/pkg-size-report
///
/// # Zsh
/// pkg-size-report completions zsh > ~/.zfunc/_pkg-size-report
///
/// # Fish
/// pkg-size-report completions fish > ~/.config/fish/completions/pkg-size-report.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}
