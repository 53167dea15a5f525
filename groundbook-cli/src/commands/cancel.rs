//! Cancel command implementation.
//!
//! Cancellation deletes the reservation outright. Several ids can be given
//! at once; if any of them is unknown the whole command fails before
//! anything is deleted.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use groundbook::{CancelPlan, PlanExecutor, ReservationId};

/// Cancel one or more reservations.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation ids
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<i64>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let ids: Vec<ReservationId> = self.ids.into_iter().map(ReservationId).collect();
        let plan = CancelPlan::batch(ids).build_plan(&db).map_err(CliError::from)?;

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
            }
            return Ok(());
        }

        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if !global.quiet {
            for action in &result.actions_taken {
                eprintln!("{action}");
            }
        }

        Ok(())
    }
}
