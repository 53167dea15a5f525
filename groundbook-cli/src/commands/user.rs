//! User management commands.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, Subcommand};

/// Manage users.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Add(UserAddCommand),
}

impl UserCommand {
    /// Execute the user subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self {
            Self::Add(cmd) => cmd.execute(global),
        }
    }
}

/// Register a new user.
#[derive(Args)]
pub struct UserAddCommand {
    /// Display name of the user
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl UserAddCommand {
    /// Execute the user add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let user = db.insert_user(&self.name).map_err(CliError::from)?;

        // Output just the id (shell-friendly) to stdout
        println!("{}", user.id());

        if !global.quiet {
            eprintln!("Registered user '{}'", user.name());
        }

        Ok(())
    }
}
