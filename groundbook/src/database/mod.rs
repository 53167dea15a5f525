//! Database layer for persistent storage of ground reservations.
//!
//! This module provides a SQLite-based storage layer for managing ground
//! reservations, including connection management, schema versioning,
//! and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::{Duration, UNIX_EPOCH};
//! use groundbook::database::{Database, DatabaseConfig};
//! use groundbook::{BookingRequest, TimeSlot};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/groundbook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Register a ground and a user, then book a slot
//! let ground = db.insert_ground("north pitch", 50).unwrap();
//! let user = db.insert_user("alice").unwrap();
//!
//! let slot = TimeSlot::new(UNIX_EPOCH + Duration::from_secs(36_000), 2).unwrap();
//! let request = BookingRequest::new(ground.id(), user.id(), slot);
//! let reservation = db.try_insert_booking(&request).unwrap();
//!
//! // List all reservations
//! let all = Database::list_all_reservations(db.connection()).unwrap();
//! for reservation in all {
//!     println!("{:?}", reservation);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
