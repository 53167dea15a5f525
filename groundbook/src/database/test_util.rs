//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::tempdir;

use crate::catalog::{GroundId, UserId};
use crate::database::{Database, DatabaseConfig};
use crate::slot::TimeSlot;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Registers a ground with a generated name and the given hourly price.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn seed_ground(db: &mut Database, unit_price: i64) -> GroundId {
    db.insert_ground("test ground", unit_price).unwrap().id()
}

/// Registers a user with a fixed name.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn seed_user(db: &mut Database) -> UserId {
    db.insert_user("test user").unwrap().id()
}

/// Builds a slot starting `start_hour` hours after the epoch.
///
/// # Panics
///
/// Panics if `hours` is zero.
#[must_use]
pub fn slot_at(start_hour: u64, hours: u32) -> TimeSlot {
    let start: SystemTime = UNIX_EPOCH + Duration::from_secs(start_hour * 3600);
    TimeSlot::new(start, hours).unwrap()
}
