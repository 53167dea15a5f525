//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the groundbook reservation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the grounds table.
pub const CREATE_GROUNDS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS grounds (
        ground_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        unit_price INTEGER NOT NULL
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// AUTOINCREMENT forces SQLite to hand out monotonically increasing row
/// ids, so a deleted reservation's id is never reassigned.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        reservation_id INTEGER PRIMARY KEY AUTOINCREMENT,
        ground_id INTEGER NOT NULL REFERENCES grounds(ground_id),
        user_id INTEGER NOT NULL REFERENCES users(user_id),
        start_time INTEGER NOT NULL,
        hours INTEGER NOT NULL,
        price INTEGER NOT NULL,
        review_status TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the `ground_id` column.
///
/// This index speeds up per-ground conflict checks and filtered lists.
pub const CREATE_GROUND_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_ground ON reservations(ground_id)";

/// SQL statement to create an index on the `user_id` column.
pub const CREATE_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON reservations(user_id)";

/// SQL statement to create an index on the `review_status` column.
///
/// This index speeds up the pending-review queue query.
pub const CREATE_STATUS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_status ON reservations(review_status)";

/// SQL statement to create an index on the `start_time` column.
pub const CREATE_START_TIME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_start ON reservations(start_time)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
///
/// Used by the single booking path. The id is assigned by SQLite.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (ground_id, user_id, start_time, hours, price, review_status, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to delete a reservation by id.
///
/// Used by both single and batch delete operations.
pub const DELETE_RESERVATION: &str = r"
    DELETE FROM reservations
    WHERE reservation_id = ?
";
