//! Book command implementation.
//!
//! This module implements the `book` command, which books a time slot on a
//! ground for a user. The new reservation starts in pending review.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_start_time, GlobalOptions};
use clap::Args;
use groundbook::{BookingOptions, BookingPlan, GroundId, PlanExecutor, TimeSlot, UserId};

/// Book a time slot on a ground.
#[derive(Args)]
pub struct BookCommand {
    /// Ground id
    #[arg(long, value_name = "ID")]
    pub ground: i64,

    /// User id
    #[arg(long, value_name = "ID", env = "GROUNDBOOK_USER")]
    pub user: i64,

    /// Slot start time (RFC 3339, 'YYYY-MM-DD HH:MM', or unix seconds)
    #[arg(long, value_name = "TIME")]
    pub start: String,

    /// Slot length in whole hours
    #[arg(long, value_name = "HOURS")]
    pub hours: u32,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Parse the requested slot
        let start = parse_start_time(&self.start)?;
        let slot = TimeSlot::new(start, self.hours)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        // 2. Load configuration
        let config = load_configuration(global)?;

        // 3. Open database
        let mut db = open_database(global, &config)?;

        // 4. Build plan
        let options = BookingOptions::new(GroundId(self.ground), UserId(self.user), slot);
        let plan = BookingPlan::new(options, &config)
            .build_plan(&db)
            .map_err(CliError::from)?;

        // 5. Execute or dry-run
        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
                if !plan.warnings.is_empty() {
                    eprintln!("Warnings:");
                    for warning in &plan.warnings {
                        eprintln!("  - {warning}");
                    }
                }
            }
            return Ok(());
        }

        let mut executor = PlanExecutor::new(&mut db);
        let result = executor.execute(&plan).map_err(CliError::from)?;

        // 6. Output just the reservation id (shell-friendly) to stdout
        if let Some(ref reservation) = result.reservation {
            println!("{}", reservation.id());

            if !global.quiet {
                eprintln!(
                    "Booked reservation {} at price {} (pending review)",
                    reservation.id(),
                    reservation.price()
                );
            }
        }

        // 7. Print warnings to stderr if any
        if !global.quiet && !result.warnings.is_empty() {
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }
}
