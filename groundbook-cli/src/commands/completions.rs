//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name from Cargo.toml package name
const BIN_NAME: &str = "groundbook";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        eprintln!("# Run the following command to enable completions:");

        match self.shell {
            Shell::Bash => {
                eprintln!(
                    "#   groundbook completions bash > ~/.local/share/bash-completion/completions/groundbook"
                );
                eprintln!("# Or source it directly in ~/.bashrc:");
                eprintln!("#   eval \"$(groundbook completions bash)\"");
            }
            Shell::Zsh => {
                eprintln!("#   groundbook completions zsh > ~/.zsh/completions/_groundbook");
                eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
                eprintln!("# Or add to ~/.zshrc:");
                eprintln!("#   eval \"$(groundbook completions zsh)\"");
            }
            Shell::Fish => {
                eprintln!(
                    "#   groundbook completions fish > ~/.config/fish/completions/groundbook.fish"
                );
                eprintln!("# Or add to config.fish:");
                eprintln!("#   groundbook completions fish | source");
            }
            Shell::PowerShell => {
                eprintln!("#   groundbook completions powershell > $PROFILE");
                eprintln!("# Or run:");
                eprintln!("#   groundbook completions powershell | Out-String | Invoke-Expression");
            }
            _ => {
                // Other shells need no custom instructions
            }
        }

        eprintln!();

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
