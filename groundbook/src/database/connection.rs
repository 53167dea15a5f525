//! The `Database` handle and connection setup.
//!
//! Opening a database applies the pragmas the booking workload relies on:
//! WAL so readers never block behind a writer, `synchronous = NORMAL`, and
//! a busy timeout so contended writes wait instead of failing immediately.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// An open groundbook database.
///
/// All store operations take a `Database` (or its connection); nothing in
/// the library holds global state.
///
/// # Examples
///
/// ```no_run
/// use groundbook::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/groundbook.db")).unwrap();
/// let grounds = Database::list_grounds(db.connection()).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    #[allow(dead_code)]
    config: DatabaseConfig,
}

fn open_flags(config: &DatabaseConfig) -> OpenFlags {
    if config.read_only {
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
    } else if config.auto_create {
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX
    } else {
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}

impl Database {
    /// Opens the database described by `config`.
    ///
    /// Creates the parent directory and the database file when
    /// `auto_create` is set, applies the connection pragmas, and checks
    /// that the on-disk schema version matches this build (initializing a
    /// fresh database as needed).
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its parent directory cannot be
    /// created or opened, a pragma fails, or the schema version is
    /// unsupported.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(&config.path, open_flags(&config))?;

        // PRAGMA journal_mode returns the resulting mode as a row.
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn, config })
    }

    /// The underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Mutable access to the connection, needed to start transactions.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
