//! Read-only query operations.
//!
//! Queries take effect immediately rather than going through the plan and
//! execute cycle, since they never modify the database.

use std::time::SystemTime;

use crate::catalog::{Ground, GroundId, User, UserId};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};
use crate::slot::TimeSlot;

use super::review::AdminToken;

/// Fetches a single reservation by id.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the reservation does not exist, or a
/// database error if the query fails.
pub fn reservation(db: &Database, id: ReservationId) -> Result<Reservation> {
    Database::get_reservation(db.connection(), id)?.ok_or_else(|| Error::NotFound {
        resource: format!("reservation {id}"),
    })
}

/// Lists every reservation in the system, ordered by id.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn all_reservations(db: &Database) -> Result<Vec<Reservation>> {
    Database::list_all_reservations(db.connection())
}

/// Lists all reservations made by the given user.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the user does not exist, or a database
/// error if the query fails.
pub fn reservations_for_user(db: &Database, user: UserId) -> Result<Vec<Reservation>> {
    let conn = db.connection();
    if !Database::user_exists(conn, user)? {
        return Err(Error::NotFound {
            resource: format!("user {user}"),
        });
    }
    Database::list_reservations_by_user(conn, user)
}

/// Lists all reservations on the given ground, rejected ones included.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the ground does not exist, or a database
/// error if the query fails.
pub fn reservations_for_ground(db: &Database, ground: GroundId) -> Result<Vec<Reservation>> {
    let conn = db.connection();
    if !Database::ground_exists(conn, ground)? {
        return Err(Error::NotFound {
            resource: format!("ground {ground}"),
        });
    }
    Database::list_reservations_by_ground(conn, ground)
}

/// Lists the upcoming occupied slots for a ground, soonest first.
///
/// A slot counts as upcoming when it starts at or after the current time.
/// Rejected reservations do not occupy their slot and are excluded.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the ground does not exist, or a database
/// error if the query fails.
pub fn upcoming_slots(db: &Database, ground: GroundId) -> Result<Vec<TimeSlot>> {
    upcoming_slots_at(db, ground, SystemTime::now())
}

/// Like [`upcoming_slots`], but relative to an explicit point in time.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the ground does not exist, or a database
/// error if the query fails.
pub fn upcoming_slots_at(db: &Database, ground: GroundId, now: SystemTime) -> Result<Vec<TimeSlot>> {
    let conn = db.connection();
    if !Database::ground_exists(conn, ground)? {
        return Err(Error::NotFound {
            resource: format!("ground {ground}"),
        });
    }
    Database::upcoming_slots(conn, ground, now)
}

/// Lists all reservations awaiting review, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn pending_review(db: &Database, _token: &AdminToken) -> Result<Vec<Reservation>> {
    Database::list_pending_reservations(db.connection())
}

/// Lists every registered ground.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub fn all_grounds(db: &Database) -> Result<Vec<Ground>> {
    Database::list_grounds(db.connection())
}

/// Fetches a single user by id.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the user does not exist, or a database
/// error if the query fails.
pub fn user(db: &Database, id: UserId) -> Result<User> {
    Database::get_user(db.connection(), id)?.ok_or_else(|| Error::NotFound {
        resource: format!("user {id}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_ground, seed_user, slot_at};
    use crate::reservation::{BookingRequest, ReviewStatus};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_reservation_not_found() {
        let db = create_test_database();
        let err = reservation(&db, ReservationId(1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reservations_for_unknown_user() {
        let db = create_test_database();
        let err = reservations_for_user(&db, UserId(5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_reservations_for_unknown_ground() {
        let db = create_test_database();
        let err = reservations_for_ground(&db, GroundId(5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_upcoming_excludes_past_and_rejected() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let past = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(2, 2)))
            .unwrap();
        let rejected = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(12, 2)))
            .unwrap();
        db.set_review_status(rejected.id(), ReviewStatus::Rejected)
            .unwrap();
        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(20, 2)))
            .unwrap();

        let now = UNIX_EPOCH + Duration::from_secs(10 * 3600);
        let upcoming = upcoming_slots_at(&db, ground, now).unwrap();

        assert_eq!(upcoming, vec![slot_at(20, 2)]);
        assert!(!upcoming.contains(&past.slot()));
    }

    #[test]
    fn test_pending_review_lists_only_pending() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let approved = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        db.set_review_status(approved.id(), ReviewStatus::Approved)
            .unwrap();
        let pending = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(14, 2)))
            .unwrap();

        let listed = pending_review(&db, &AdminToken::new()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), pending.id());
    }
}
