//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the groundbook library.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

use groundbook::database::{Database, DatabaseConfig};
use groundbook::{Config, ConfigBuilder, GroundId, TimeSlot, UserId};

/// Creates a test database in a temporary directory.
///
/// The returned `TempDir` must be kept alive for as long as the database
/// is in use.
#[allow(dead_code)]
pub fn create_test_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let db_path = temp_dir.path().join("groundbook.db");
    let config = DatabaseConfig::new(&db_path);
    let db = Database::open(config).expect("failed to open test database");
    (temp_dir, db)
}

/// Builds a configuration that ignores config files and the environment.
#[allow(dead_code)]
pub fn test_config() -> Config {
    ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .build()
        .expect("failed to build test configuration")
}

/// Registers a ground and a user, returning their ids.
#[allow(dead_code)]
pub fn seed_catalog(db: &mut Database, unit_price: i64) -> (GroundId, UserId) {
    let ground = db
        .insert_ground("integration ground", unit_price)
        .expect("failed to insert ground")
        .id();
    let user = db
        .insert_user("integration user")
        .expect("failed to insert user")
        .id();
    (ground, user)
}

/// Builds a slot starting `start_hour` hours after the epoch.
#[allow(dead_code)]
pub fn slot_at(start_hour: u64, hours: u32) -> TimeSlot {
    let start: SystemTime = UNIX_EPOCH + Duration::from_secs(start_hour * 3600);
    TimeSlot::new(start, hours).expect("valid slot")
}
