//! Ground management commands.
//!
//! This module implements the `ground add` and `ground list` commands for
//! maintaining the catalog of bookable grounds.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, Subcommand};
use groundbook::Database;

/// Manage grounds.
#[derive(Subcommand)]
pub enum GroundCommand {
    /// Register a new ground
    Add(GroundAddCommand),

    /// List registered grounds
    List(GroundListCommand),
}

impl GroundCommand {
    /// Execute the ground subcommand.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match self {
            Self::Add(cmd) => cmd.execute(global),
            Self::List(cmd) => cmd.execute(global),
        }
    }
}

/// Register a new ground.
#[derive(Args)]
pub struct GroundAddCommand {
    /// Display name of the ground
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Price per hour
    #[arg(long, value_name = "PRICE")]
    pub unit_price: i64,
}

impl GroundAddCommand {
    /// Execute the ground add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let ground = db
            .insert_ground(&self.name, self.unit_price)
            .map_err(CliError::from)?;

        // Output just the id (shell-friendly) to stdout
        println!("{}", ground.id());

        if !global.quiet {
            eprintln!(
                "Registered ground '{}' at {} per hour",
                ground.name(),
                ground.unit_price()
            );
        }

        Ok(())
    }
}

/// List registered grounds.
#[derive(Args)]
pub struct GroundListCommand {}

impl GroundListCommand {
    /// Execute the ground list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let grounds = Database::list_grounds(db.connection()).map_err(CliError::from)?;

        println!("ID\tNAME\tUNIT_PRICE");
        for ground in grounds {
            println!("{}\t{}\t{}", ground.id(), ground.name(), ground.unit_price());
        }

        Ok(())
    }
}
