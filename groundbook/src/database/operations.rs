//! Database CRUD operations for grounds, users and reservations.
//!
//! This module implements all create, read, update, and delete operations
//! for the reservation store, including the atomic booking path that
//! re-checks slot conflicts inside a write transaction.

use std::time::{Duration, SystemTime};

use rusqlite::{params, Connection, TransactionBehavior};

use crate::catalog::{Ground, GroundId, User, UserId};
use crate::error::{Error, Result};
use crate::reservation::{BookingRequest, Reservation, ReservationId, ReviewStatus};
use crate::slot::{first_conflict, TimeSlot};

use super::connection::Database;
use super::schema::{DELETE_RESERVATION, INSERT_RESERVATION};

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: `reservation_id`, `ground_id`,
/// `user_id`, `start_time`, `hours`, `price`, `review_status`, `created_at`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let ground_id: i64 = row.get(1)?;
    let user_id: i64 = row.get(2)?;
    let start_secs: i64 = row.get(3)?;
    let hours: u32 = row.get(4)?;
    let price: i64 = row.get(5)?;
    let status_str: String = row.get(6)?;
    let created_secs: i64 = row.get(7)?;

    let slot = TimeSlot::new(unix_secs_to_systemtime(start_secs), hours)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    let status = ReviewStatus::parse(&status_str).map_err(|e| {
        rusqlite::Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e,
        )))
    })?;

    Reservation::builder(
        ReservationId(id),
        GroundId(ground_id),
        UserId(user_id),
        slot,
    )
    .price(price)
    .status(status)
    .created_at(unix_secs_to_systemtime(created_secs))
    .build()
    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

// SQL statements for CRUD operations
const INSERT_GROUND: &str = "INSERT INTO grounds (name, unit_price) VALUES (?, ?)";

const SELECT_GROUND: &str = "SELECT name, unit_price FROM grounds WHERE ground_id = ?";

const LIST_GROUNDS: &str = "SELECT ground_id, name, unit_price FROM grounds ORDER BY ground_id";

const INSERT_USER: &str = "INSERT INTO users (name) VALUES (?)";

const SELECT_USER: &str = "SELECT name FROM users WHERE user_id = ?";

const SELECT_RESERVATION: &str = r"
    SELECT reservation_id, ground_id, user_id, start_time, hours, price, review_status, created_at
    FROM reservations
    WHERE reservation_id = ?
";

const LIST_RESERVATIONS: &str = r"
    SELECT reservation_id, ground_id, user_id, start_time, hours, price, review_status, created_at
    FROM reservations
    ORDER BY reservation_id
";

const LIST_BY_USER: &str = r"
    SELECT reservation_id, ground_id, user_id, start_time, hours, price, review_status, created_at
    FROM reservations
    WHERE user_id = ?
    ORDER BY reservation_id
";

const LIST_BY_GROUND: &str = r"
    SELECT reservation_id, ground_id, user_id, start_time, hours, price, review_status, created_at
    FROM reservations
    WHERE ground_id = ?
    ORDER BY reservation_id
";

const LIST_PENDING: &str = r"
    SELECT reservation_id, ground_id, user_id, start_time, hours, price, review_status, created_at
    FROM reservations
    WHERE review_status = 'pending'
    ORDER BY reservation_id
";

const SELECT_GROUND_SLOTS: &str = r"
    SELECT start_time, hours, review_status
    FROM reservations
    WHERE ground_id = ?
";

const SELECT_UPCOMING_SLOTS: &str = r"
    SELECT start_time, hours
    FROM reservations
    WHERE ground_id = ? AND review_status != 'rejected' AND start_time >= ?
    ORDER BY start_time
";

const UPDATE_REVIEW_STATUS: &str = r"
    UPDATE reservations
    SET review_status = ?
    WHERE reservation_id = ?
";

impl Database {
    /// Registers a new ground and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or price is invalid, or if the insert
    /// fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use groundbook::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/groundbook.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let ground = db.insert_ground("north pitch", 50).unwrap();
    /// println!("registered ground {}", ground.id());
    /// ```
    pub fn insert_ground(&mut self, name: &str, unit_price: i64) -> Result<Ground> {
        // Validate before touching the database
        let probe = Ground::new(GroundId(0), name, unit_price)?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(INSERT_GROUND, params![probe.name(), unit_price])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(Ground::new(GroundId(id), probe.name(), unit_price)?)
    }

    /// Retrieves a ground by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ground))` if the ground exists
    /// - `Ok(None)` if the ground doesn't exist
    /// - `Err(_)` if a database error occurs
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_ground(conn: &Connection, id: GroundId) -> Result<Option<Ground>> {
        let mut stmt = conn.prepare(SELECT_GROUND)?;

        match stmt.query_row(params![id.0], |row| {
            let name: String = row.get(0)?;
            let unit_price: i64 = row.get(1)?;
            Ok((name, unit_price))
        }) {
            Ok((name, unit_price)) => Ok(Some(Ground::new(id, name, unit_price)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all registered grounds ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_grounds(conn: &Connection) -> Result<Vec<Ground>> {
        let mut stmt = conn.prepare(LIST_GROUNDS)?;

        let rows = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let name: String = row.get(1)?;
                let unit_price: i64 = row.get(2)?;
                Ok((id, name, unit_price))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        rows.into_iter()
            .map(|(id, name, unit_price)| Ok(Ground::new(GroundId(id), name, unit_price)?))
            .collect()
    }

    /// Registers a new user and returns them with their assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or the insert fails.
    pub fn insert_user(&mut self, name: &str) -> Result<User> {
        let probe = User::new(UserId(0), name)?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(INSERT_USER, params![probe.name()])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(User::new(UserId(id), probe.name())?)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` if the user exists
    /// - `Ok(None)` if the user doesn't exist
    /// - `Err(_)` if a database error occurs
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        let mut stmt = conn.prepare(SELECT_USER)?;

        match stmt.query_row(params![id.0], |row| row.get::<_, String>(0)) {
            Ok(name) => Ok(Some(User::new(id, name)?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Checks whether a ground exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn ground_exists(conn: &Connection, id: GroundId) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM grounds WHERE ground_id = ?",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Checks whether a user exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn user_exists(conn: &Connection, id: UserId) -> Result<bool> {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM users WHERE user_id = ?",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Returns every slot booked on a ground together with its review status.
    ///
    /// Used for advisory conflict checks at planning time. The
    /// authoritative check happens again inside `try_insert_booking`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn ground_slots(conn: &Connection, ground: GroundId) -> Result<Vec<(TimeSlot, ReviewStatus)>> {
        let mut stmt = conn.prepare(SELECT_GROUND_SLOTS)?;

        let slots = stmt
            .query_map(params![ground.0], |row| {
                let start_secs: i64 = row.get(0)?;
                let hours: u32 = row.get(1)?;
                let status_str: String = row.get(2)?;

                let slot = TimeSlot::new(unix_secs_to_systemtime(start_secs), hours)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                let status = ReviewStatus::parse(&status_str).map_err(|e| {
                    rusqlite::Error::ToSqlConversionFailure(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        e,
                    )))
                })?;
                Ok((slot, status))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(slots)
    }

    /// Atomically books a slot on a ground.
    ///
    /// The conflict check and insert run inside an IMMEDIATE transaction,
    /// which takes the write lock before the check. Two concurrent
    /// bookings for overlapping slots on the same ground therefore
    /// serialize, and exactly one of them succeeds.
    ///
    /// The price is computed as `hours * unit_price` of the ground. The
    /// new reservation starts in `Pending` review status.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ground or user does not exist (`NotFound`)
    /// - The slot overlaps an existing non-rejected reservation
    ///   (`SlotConflict`)
    /// - The transaction fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use groundbook::database::{Database, DatabaseConfig};
    /// use groundbook::{BookingRequest, GroundId, TimeSlot, UserId};
    ///
    /// let config = DatabaseConfig::new("/tmp/groundbook.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let slot = TimeSlot::new(UNIX_EPOCH + Duration::from_secs(36_000), 2).unwrap();
    /// let request = BookingRequest::new(GroundId(1), UserId(1), slot);
    /// let reservation = db.try_insert_booking(&request).unwrap();
    /// println!("booked as reservation {}", reservation.id());
    /// ```
    pub fn try_insert_booking(&mut self, request: &BookingRequest) -> Result<Reservation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let ground = Self::get_ground(&tx, request.ground)?.ok_or_else(|| Error::NotFound {
            resource: format!("ground {}", request.ground),
        })?;

        if !Self::user_exists(&tx, request.user)? {
            return Err(Error::NotFound {
                resource: format!("user {}", request.user),
            });
        }

        // Authoritative conflict check, performed under the write lock.
        let existing = Self::ground_slots(&tx, request.ground)?;
        if let Some(conflicting) = first_conflict(&existing, &request.slot) {
            let start = systemtime_to_unix_secs(conflicting.start())?;
            return Err(Error::SlotConflict {
                ground: request.ground,
                details: format!(
                    "requested slot overlaps an existing booking starting at epoch {start} for {} hour(s)",
                    conflicting.hours()
                ),
            });
        }

        let price = i64::from(request.slot.hours()) * ground.unit_price();
        let created_at = SystemTime::now();

        tx.execute(
            INSERT_RESERVATION,
            params![
                request.ground.0,
                request.user.0,
                systemtime_to_unix_secs(request.slot.start())?,
                request.slot.hours(),
                price,
                ReviewStatus::Pending.as_str(),
                systemtime_to_unix_secs(created_at)?,
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        Ok(Reservation::builder(
            ReservationId(id),
            request.ground,
            request.user,
            request.slot,
        )
        .price(price)
        .created_at(created_at)
        .build()?)
    }

    /// Retrieves a reservation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(reservation))` if the reservation exists
    /// - `Ok(None)` if the reservation doesn't exist
    /// - `Err(_)` if a database error occurs
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use groundbook::database::{Database, DatabaseConfig};
    /// use groundbook::ReservationId;
    ///
    /// let config = DatabaseConfig::new("/tmp/groundbook.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// let reservation = Database::get_reservation(db.connection(), ReservationId(1)).unwrap();
    /// ```
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_RESERVATION)?;

        match stmt.query_row(params![id.0], row_to_reservation) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all reservations in the database, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any reservation
    /// cannot be deserialized.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;

        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }

    /// Lists all reservations placed by a user, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_by_user(conn: &Connection, user: UserId) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_BY_USER)?;

        let reservations = stmt
            .query_map(params![user.0], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }

    /// Lists all reservations on a ground, ordered by id.
    ///
    /// Includes rejected reservations; callers that want only the
    /// occupied calendar should use `upcoming_slots` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_by_ground(
        conn: &Connection,
        ground: GroundId,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_BY_GROUND)?;

        let reservations = stmt
            .query_map(params![ground.0], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }

    /// Lists all reservations awaiting review, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_pending_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_PENDING)?;

        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }

    /// Lists the occupied upcoming slots on a ground, sorted by start time.
    ///
    /// A slot is upcoming if it starts at or after `now`. Rejected
    /// reservations are excluded since their slots are free again.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn upcoming_slots(
        conn: &Connection,
        ground: GroundId,
        now: SystemTime,
    ) -> Result<Vec<TimeSlot>> {
        let now_secs = systemtime_to_unix_secs(now)?;
        let mut stmt = conn.prepare(SELECT_UPCOMING_SLOTS)?;

        let slots = stmt
            .query_map(params![ground.0, now_secs], |row| {
                let start_secs: i64 = row.get(0)?;
                let hours: u32 = row.get(1)?;
                TimeSlot::new(unix_secs_to_systemtime(start_secs), hours)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(slots)
    }

    /// Sets the review status of a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if the reservation was not found
    pub fn set_review_status(&mut self, id: ReservationId, status: ReviewStatus) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(UPDATE_REVIEW_STATUS, params![status.as_str(), id.0])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes a reservation from the database.
    ///
    /// This is a hard delete; the freed id is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or delete fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and deleted
    /// - `Ok(false)` if the reservation was not found
    pub fn delete_reservation(&mut self, id: ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let rows_affected = tx.execute(DELETE_RESERVATION, params![id.0])?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes a reservation using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction
    /// context. Unlike `delete_reservation`, it does not create its own
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion fails.
    pub fn delete_reservation_simple(conn: &Connection, id: ReservationId) -> Result<bool> {
        let rows_affected = conn.execute(DELETE_RESERVATION, params![id.0])?;
        Ok(rows_affected > 0)
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    pub fn verify_integrity(&mut self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_ground, seed_user, slot_at};

    #[test]
    fn test_insert_and_get_ground() {
        let mut db = create_test_database();
        let ground = db.insert_ground("north pitch", 50).unwrap();

        let loaded = Database::get_ground(db.connection(), ground.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.name(), "north pitch");
        assert_eq!(loaded.unit_price(), 50);
    }

    #[test]
    fn test_get_ground_not_found() {
        let db = create_test_database();
        let loaded = Database::get_ground(db.connection(), GroundId(99)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_insert_ground_rejects_bad_input() {
        let mut db = create_test_database();
        assert!(db.insert_ground("  ", 50).is_err());
        assert!(db.insert_ground("pitch", -1).is_err());
    }

    #[test]
    fn test_list_grounds_sorted_by_id() {
        let mut db = create_test_database();
        db.insert_ground("alpha", 10).unwrap();
        db.insert_ground("beta", 20).unwrap();

        let grounds = Database::list_grounds(db.connection()).unwrap();
        assert_eq!(grounds.len(), 2);
        assert_eq!(grounds[0].name(), "alpha");
        assert_eq!(grounds[1].name(), "beta");
    }

    #[test]
    fn test_insert_and_get_user() {
        let mut db = create_test_database();
        let user = db.insert_user("alice").unwrap();

        let loaded = Database::get_user(db.connection(), user.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.name(), "alice");
    }

    #[test]
    fn test_try_insert_booking_assigns_price_and_pending() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let request = BookingRequest::new(ground, user, slot_at(10, 2));
        let reservation = db.try_insert_booking(&request).unwrap();

        assert_eq!(reservation.price(), 40);
        assert_eq!(reservation.status(), ReviewStatus::Pending);
        assert_eq!(reservation.ground(), ground);
        assert_eq!(reservation.user(), user);
    }

    #[test]
    fn test_try_insert_booking_unknown_ground() {
        let mut db = create_test_database();
        let user = seed_user(&mut db);

        let request = BookingRequest::new(GroundId(99), user, slot_at(10, 2));
        let err = db.try_insert_booking(&request).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_try_insert_booking_unknown_user() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);

        let request = BookingRequest::new(ground, UserId(99), slot_at(10, 2));
        let err = db.try_insert_booking(&request).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_try_insert_booking_conflict() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();

        let err = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(11, 1)))
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_touching_slots_both_succeed() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        // [12, 13) touches [10, 12) only at the boundary.
        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(12, 1)))
            .unwrap();
    }

    #[test]
    fn test_same_slot_on_other_ground_succeeds() {
        let mut db = create_test_database();
        let ground_a = seed_ground(&mut db, 20);
        let ground_b = seed_ground(&mut db, 30);
        let user = seed_user(&mut db);

        db.try_insert_booking(&BookingRequest::new(ground_a, user, slot_at(10, 2)))
            .unwrap();
        db.try_insert_booking(&BookingRequest::new(ground_b, user, slot_at(10, 2)))
            .unwrap();
    }

    #[test]
    fn test_rejected_slot_can_be_rebooked() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let first = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        db.set_review_status(first.id(), ReviewStatus::Rejected)
            .unwrap();

        let second = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_get_reservation_round_trip() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let created = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();

        let loaded = Database::get_reservation(db.connection(), created.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.id(), created.id());
        assert_eq!(loaded.slot(), created.slot());
        assert_eq!(loaded.price(), created.price());
        assert_eq!(loaded.status(), ReviewStatus::Pending);
    }

    #[test]
    fn test_get_reservation_not_found() {
        let db = create_test_database();
        let loaded = Database::get_reservation(db.connection(), ReservationId(42)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_list_filters() {
        let mut db = create_test_database();
        let ground_a = seed_ground(&mut db, 20);
        let ground_b = seed_ground(&mut db, 30);
        let alice = seed_user(&mut db);
        let bob = seed_user(&mut db);

        db.try_insert_booking(&BookingRequest::new(ground_a, alice, slot_at(10, 2)))
            .unwrap();
        db.try_insert_booking(&BookingRequest::new(ground_b, alice, slot_at(10, 2)))
            .unwrap();
        db.try_insert_booking(&BookingRequest::new(ground_a, bob, slot_at(14, 2)))
            .unwrap();

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all.len(), 3);

        let by_alice = Database::list_reservations_by_user(db.connection(), alice).unwrap();
        assert_eq!(by_alice.len(), 2);

        let on_a = Database::list_reservations_by_ground(db.connection(), ground_a).unwrap();
        assert_eq!(on_a.len(), 2);
    }

    #[test]
    fn test_list_by_ground_includes_rejected() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let r = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        db.set_review_status(r.id(), ReviewStatus::Rejected).unwrap();

        let on_ground = Database::list_reservations_by_ground(db.connection(), ground).unwrap();
        assert_eq!(on_ground.len(), 1);
        assert_eq!(on_ground[0].status(), ReviewStatus::Rejected);
    }

    #[test]
    fn test_list_pending_reservations() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let r1 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        let r2 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(14, 2)))
            .unwrap();
        db.set_review_status(r1.id(), ReviewStatus::Approved).unwrap();

        let pending = Database::list_pending_reservations(db.connection()).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id(), r2.id());
    }

    #[test]
    fn test_upcoming_slots_sorted_and_filtered() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(20, 2)))
            .unwrap();
        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(12, 2)))
            .unwrap();
        let rejected = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(16, 2)))
            .unwrap();
        db.set_review_status(rejected.id(), ReviewStatus::Rejected)
            .unwrap();
        // In the past relative to the query time below.
        db.try_insert_booking(&BookingRequest::new(ground, user, slot_at(2, 2)))
            .unwrap();

        let now = std::time::UNIX_EPOCH + Duration::from_secs(10 * 3600);
        let upcoming = Database::upcoming_slots(db.connection(), ground, now).unwrap();

        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0], slot_at(12, 2));
        assert_eq!(upcoming[1], slot_at(20, 2));
    }

    #[test]
    fn test_set_review_status_missing() {
        let mut db = create_test_database();
        let updated = db
            .set_review_status(ReservationId(42), ReviewStatus::Approved)
            .unwrap();
        assert!(!updated);
    }

    #[test]
    fn test_delete_reservation() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let r = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();

        assert!(db.delete_reservation(r.id()).unwrap());
        assert!(Database::get_reservation(db.connection(), r.id())
            .unwrap()
            .is_none());

        // Second delete is a no-op
        assert!(!db.delete_reservation(r.id()).unwrap());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let first = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        db.delete_reservation(first.id()).unwrap();

        let second = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_verify_integrity() {
        let mut db = create_test_database();
        db.verify_integrity().unwrap();
    }
}
