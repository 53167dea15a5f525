//! Batch database operations executed in a single transaction.
//!
//! This module provides multi-row operations that either fully commit
//! or fully roll back.

use rusqlite::{params, TransactionBehavior};

use crate::error::{Error, Result};
use crate::reservation::ReservationId;

use super::connection::Database;
use super::schema::DELETE_RESERVATION;

impl Database {
    /// Deletes several reservations in one transaction.
    ///
    /// The batch is all-or-nothing: if any id names no reservation, the
    /// transaction rolls back and no row is removed. On success the return
    /// value equals `ids.len()`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for the first missing id, or a database error if
    /// the transaction cannot be started or committed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use groundbook::database::{Database, DatabaseConfig};
    /// use groundbook::ReservationId;
    ///
    /// let config = DatabaseConfig::new("/tmp/groundbook.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let removed = db
    ///     .batch_delete_reservations(&[ReservationId(1), ReservationId(2)])
    ///     .unwrap();
    /// println!("removed {removed} reservations");
    /// ```
    pub fn batch_delete_reservations(&mut self, ids: &[ReservationId]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(DELETE_RESERVATION)?;
            for id in ids {
                if stmt.execute(params![id.0])? == 0 {
                    // Dropping the transaction rolls back the earlier deletes.
                    return Err(Error::NotFound {
                        resource: format!("reservation {id}"),
                    });
                }
            }
        }

        tx.commit()?;
        Ok(ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_ground, seed_user, slot_at};
    use crate::reservation::BookingRequest;

    #[test]
    fn test_batch_delete() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let r1 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();
        let r2 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(14, 2)))
            .unwrap();

        let removed = db.batch_delete_reservations(&[r1.id(), r2.id()]).unwrap();
        assert_eq!(removed, 2);

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_batch_delete_missing_id_rolls_back() {
        let mut db = create_test_database();
        let ground = seed_ground(&mut db, 20);
        let user = seed_user(&mut db);

        let r1 = db
            .try_insert_booking(&BookingRequest::new(ground, user, slot_at(10, 2)))
            .unwrap();

        let err = db
            .batch_delete_reservations(&[r1.id(), ReservationId(999)])
            .unwrap_err();
        assert!(err.is_not_found());

        // The existing reservation survives the rolled-back batch.
        assert!(Database::get_reservation(db.connection(), r1.id())
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_batch_delete_empty() {
        let mut db = create_test_database();
        let removed = db.batch_delete_reservations(&[]).unwrap();
        assert_eq!(removed, 0);
    }
}
