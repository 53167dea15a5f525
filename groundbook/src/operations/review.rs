//! Review operation planning.
//!
//! Approving or rejecting a reservation requires an [`AdminToken`], which
//! callers obtain through whatever authentication layer sits above this
//! crate. Reviewing a reservation that is already in the requested status
//! is not an error; the plan carries a warning instead.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{ReservationId, ReviewStatus};

use super::plan::{OperationPlan, PlanAction};

/// Capability token required for review operations.
///
/// The token carries no data; it exists so that review endpoints cannot be
/// reached without the caller explicitly asserting administrative intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminToken;

impl AdminToken {
    /// Creates a new admin token.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Plans a review operation on a single reservation.
pub struct ReviewPlan {
    id: ReservationId,
    target: ReviewStatus,
}

impl ReviewPlan {
    /// Plans approval of the given reservation.
    #[must_use]
    pub const fn approve(id: ReservationId) -> Self {
        Self {
            id,
            target: ReviewStatus::Approved,
        }
    }

    /// Plans rejection of the given reservation.
    #[must_use]
    pub const fn reject(id: ReservationId) -> Self {
        Self {
            id,
            target: ReviewStatus::Rejected,
        }
    }

    /// Builds the operation plan for this review.
    ///
    /// A reservation that is already in the target status produces an empty
    /// plan with a warning. A rejected reservation cannot be approved; its
    /// slot may already have been rebooked by someone else.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation does not exist, if a rejected
    /// reservation would be approved, or if a database operation fails.
    pub fn build_plan(&self, db: &Database, _token: &AdminToken) -> Result<OperationPlan> {
        let Some(reservation) = Database::get_reservation(db.connection(), self.id)? else {
            return Err(Error::NotFound {
                resource: format!("reservation {}", self.id),
            });
        };

        let plan = OperationPlan::new(format!("Mark reservation {} as {}", self.id, self.target));

        if reservation.status() == self.target {
            return Ok(plan.add_warning(format!(
                "Reservation {} is already {} (no change needed)",
                self.id, self.target
            )));
        }

        if self.target == ReviewStatus::Approved && reservation.status() == ReviewStatus::Rejected {
            return Err(Error::Validation {
                field: "status".to_string(),
                message: format!(
                    "cannot approve reservation {}: it has been rejected and its slot may be rebooked",
                    self.id
                ),
            });
        }

        Ok(plan.add_action(PlanAction::SetReviewStatus {
            id: self.id,
            status: self.target,
        }))
    }
}
