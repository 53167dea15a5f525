//! Approve and reject command implementations.
//!
//! Both commands plan a review through the library and execute it. Reviews
//! are idempotent; re-approving an approved reservation prints a warning
//! and exits successfully.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use groundbook::{AdminToken, PlanExecutor, ReservationId, ReviewPlan};

/// Approve a pending reservation.
#[derive(Args)]
pub struct ApproveCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl ApproveCommand {
    /// Execute the approve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let plan = ReviewPlan::approve(ReservationId(self.id));
        run_review(plan, global)
    }
}

/// Reject a reservation, freeing its slot.
#[derive(Args)]
pub struct RejectCommand {
    /// Reservation id
    #[arg(value_name = "ID")]
    pub id: i64,
}

impl RejectCommand {
    /// Execute the reject command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let plan = ReviewPlan::reject(ReservationId(self.id));
        run_review(plan, global)
    }
}

fn run_review(review: ReviewPlan, global: &GlobalOptions) -> Result<(), CliError> {
    let config = load_configuration(global)?;
    let mut db = open_database(global, &config)?;

    let plan = review
        .build_plan(&db, &AdminToken::new())
        .map_err(CliError::from)?;

    let result = PlanExecutor::new(&mut db)
        .execute(&plan)
        .map_err(CliError::from)?;

    if !global.quiet {
        for action in &result.actions_taken {
            eprintln!("{action}");
        }
        for warning in &result.warnings {
            eprintln!("Warning: {warning}");
        }
    }

    Ok(())
}
