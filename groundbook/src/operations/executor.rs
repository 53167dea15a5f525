//! Plan execution.
//!
//! The executor takes an [`OperationPlan`] and applies its actions to the
//! database. In dry-run mode the plan is described but nothing is written,
//! which lets callers preview an operation safely.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::Reservation;

use super::plan::{OperationPlan, PlanAction};

/// The result of executing an operation plan.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Whether every action completed.
    pub success: bool,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Descriptions of the actions that were taken (or would be taken).
    pub actions_taken: Vec<String>,

    /// Warnings carried over from the plan.
    pub warnings: Vec<String>,

    /// The reservation created by a booking action, if any.
    pub reservation: Option<Reservation>,
}

/// Executes operation plans against a database.
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new executor for the given database.
    pub fn new(db: &'a mut Database) -> Self {
        Self { db, dry_run: false }
    }

    /// Switches the executor to dry-run mode.
    ///
    /// A dry run reports what would happen without touching the database.
    #[must_use]
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// Booking actions re-check for conflicts inside the insert transaction,
    /// so a plan built a moment ago can still fail here if a competing
    /// booking landed in between. That failure is reported as an error, not
    /// as a partially applied plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. A delete action covering
    /// several reservations runs in one transaction, so it applies fully or
    /// not at all.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult {
            success: true,
            dry_run: self.dry_run,
            actions_taken: Vec::new(),
            warnings: plan.warnings.clone(),
            reservation: None,
        };

        for action in &plan.actions {
            result.actions_taken.push(action.description());

            if self.dry_run {
                continue;
            }

            match action {
                PlanAction::Book(request) => {
                    let reservation = self.db.try_insert_booking(request)?;
                    result.reservation = Some(reservation);
                }
                PlanAction::SetReviewStatus { id, status } => {
                    if !self.db.set_review_status(*id, *status)? {
                        return Err(Error::NotFound {
                            resource: format!("reservation {id}"),
                        });
                    }
                }
                PlanAction::DeleteReservations(ids) => match ids.as_slice() {
                    [id] => {
                        if !self.db.delete_reservation(*id)? {
                            return Err(Error::NotFound {
                                resource: format!("reservation {id}"),
                            });
                        }
                    }
                    ids => {
                        self.db.batch_delete_reservations(ids)?;
                    }
                },
            }
        }

        Ok(result)
    }
}
