//! Cancellation planning.
//!
//! Cancelling removes the reservation row entirely. The freed id is never
//! reassigned, so a cancelled reservation cannot be confused with a later
//! one.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationId;

use super::plan::{OperationPlan, PlanAction};

/// Plans the cancellation of one or more reservations.
pub struct CancelPlan {
    ids: Vec<ReservationId>,
}

impl CancelPlan {
    /// Plans cancellation of a single reservation.
    #[must_use]
    pub fn new(id: ReservationId) -> Self {
        Self { ids: vec![id] }
    }

    /// Plans cancellation of several reservations at once.
    #[must_use]
    pub fn batch(ids: Vec<ReservationId>) -> Self {
        Self { ids }
    }

    /// Builds the operation plan for this cancellation.
    ///
    /// Every id must name an existing reservation; a missing id fails the
    /// whole plan so that a typo cannot silently cancel only part of a
    /// batch. The ids are emitted as one action so execution deletes them
    /// in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any reservation does not exist or if a database
    /// operation fails.
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let conn = db.connection();
        let plan = OperationPlan::new(match self.ids.as_slice() {
            [id] => format!("Cancel reservation {id}"),
            ids => format!("Cancel {} reservations", ids.len()),
        });

        for &id in &self.ids {
            if Database::get_reservation(conn, id)?.is_none() {
                return Err(Error::NotFound {
                    resource: format!("reservation {id}"),
                });
            }
        }

        Ok(plan.add_action(PlanAction::DeleteReservations(self.ids.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_ground, seed_user, slot_at};
    use crate::reservation::BookingRequest;

    #[test]
    fn test_cancel_existing() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);
        let reservation = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();

        let plan = CancelPlan::new(reservation.id()).build_plan(&db).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.actions[0],
            PlanAction::DeleteReservations(vec![reservation.id()])
        );
    }

    #[test]
    fn test_cancel_missing() {
        let db = create_test_database();

        let err = CancelPlan::new(ReservationId(7)).build_plan(&db).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_batch_cancel_fails_on_any_missing() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);
        let reservation = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();

        let err = CancelPlan::batch(vec![reservation.id(), ReservationId(999)])
            .build_plan(&db)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_batch_cancel_is_one_action() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);
        let r1 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        let r2 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(14, 2)))
            .unwrap();

        let plan = CancelPlan::batch(vec![r1.id(), r2.id()])
            .build_plan(&db)
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(
            plan.actions[0],
            PlanAction::DeleteReservations(vec![r1.id(), r2.id()])
        );
    }
}
