//! Slots command implementation.
//!
//! Shows the upcoming occupied slots for a ground, soonest first. Rejected
//! reservations do not occupy their slot and are left out.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, GlobalOptions};
use clap::Args;
use groundbook::operations::query;
use groundbook::GroundId;
use std::io::Write;

/// Show upcoming occupied slots for a ground.
#[derive(Args)]
pub struct SlotsCommand {
    /// Ground id
    #[arg(long, value_name = "ID")]
    pub ground: i64,
}

impl SlotsCommand {
    /// Execute the slots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let slots = query::upcoming_slots(&db, GroundId(self.ground)).map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "START\tEND\tHOURS")?;
        for slot in slots {
            writeln!(
                handle,
                "{}\t{}\t{}",
                format_timestamp(slot.start()),
                format_timestamp(slot.end()),
                slot.hours(),
            )?;
        }

        Ok(())
    }
}
