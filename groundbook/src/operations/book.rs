//! Booking operation planning.
//!
//! Planning validates the request against the current database state and
//! configuration. The conflict check performed here is advisory; the
//! authoritative check happens inside the insert transaction when the plan
//! is executed, so two concurrent bookings for the same slot cannot both
//! succeed.

use crate::catalog::{GroundId, UserId};
use crate::config::Config;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::BookingRequest;
use crate::slot::{first_conflict, TimeSlot};

use super::plan::{OperationPlan, PlanAction};

/// Options for a booking operation.
#[derive(Debug, Clone)]
pub struct BookingOptions {
    /// The ground to book.
    pub ground: GroundId,
    /// The user making the booking.
    pub user: UserId,
    /// The requested time slot.
    pub slot: TimeSlot,
}

impl BookingOptions {
    /// Creates booking options for the given ground, user and slot.
    #[must_use]
    pub const fn new(ground: GroundId, user: UserId, slot: TimeSlot) -> Self {
        Self { ground, user, slot }
    }
}

/// Plans a booking operation.
pub struct BookingPlan<'a> {
    options: BookingOptions,
    config: &'a Config,
}

impl<'a> BookingPlan<'a> {
    /// Creates a new booking plan with the given options and configuration.
    #[must_use]
    pub const fn new(options: BookingOptions, config: &'a Config) -> Self {
        Self { options, config }
    }

    /// Builds the operation plan for this booking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ground or user does not exist
    /// - The slot exceeds the configured maximum booking length
    /// - The slot overlaps an existing non-rejected reservation
    /// - A database operation fails
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let conn = db.connection();

        if !Database::ground_exists(conn, self.options.ground)? {
            return Err(Error::NotFound {
                resource: format!("ground {}", self.options.ground),
            });
        }

        if !Database::user_exists(conn, self.options.user)? {
            return Err(Error::NotFound {
                resource: format!("user {}", self.options.user),
            });
        }

        if let Some(max_hours) = self
            .config
            .booking
            .as_ref()
            .and_then(|booking| booking.max_hours)
        {
            if self.options.slot.hours() > max_hours {
                return Err(Error::Validation {
                    field: "hours".to_string(),
                    message: format!(
                        "slot length {} exceeds the configured maximum of {max_hours} hour(s)",
                        self.options.slot.hours()
                    ),
                });
            }
        }

        // Advisory check only. The insert transaction repeats it under a
        // write lock before committing.
        let existing = Database::ground_slots(conn, self.options.ground)?;
        if let Some(taken) = first_conflict(&existing, &self.options.slot) {
            return Err(Error::SlotConflict {
                ground: self.options.ground,
                details: format!(
                    "requested slot overlaps an existing booking of {} hour(s)",
                    taken.hours()
                ),
            });
        }

        let request =
            BookingRequest::new(self.options.ground, self.options.user, self.options.slot);

        let plan = OperationPlan::new(format!(
            "Book ground {} for user {}",
            self.options.ground, self.options.user
        ))
        .add_action(PlanAction::Book(request));

        Ok(plan)
    }
}
