//! Error types for groundbook operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::GroundId;
use crate::slot::ValidationError;

/// Result type alias using the groundbook error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during groundbook operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A domain value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested slot overlaps an existing non-rejected reservation.
    #[error("slot conflict on ground {ground}: {details}")]
    SlotConflict {
        /// The ground whose calendar is contended.
        ground: GroundId,
        /// A description of the conflicting reservation.
        details: String,
    },

    /// A referenced record does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// A description of the missing record.
        resource: String,
    },

    /// A database operation failed.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database stayed locked past the configured busy timeout.
    #[error("timed out waiting for the database lock")]
    LockTimeout,

    /// The data directory does not exist and auto-creation is disabled.
    #[error("data directory not found: {path}")]
    DataDirectoryNotFound {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// The database contents are inconsistent.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// A description of the inconsistency.
        details: String,
    },

    /// The on-disk schema version is not supported by this build.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The schema version this build understands.
        expected: i64,
        /// The schema version found in the database.
        found: i64,
    },
}

impl Error {
    /// Returns true if this error means a referenced record was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this error is a slot conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::SlotConflict { .. })
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(inner, _)
                if matches!(
                    inner.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                ) =>
            {
                Self::LockTimeout
            }
            other => Self::Database(other),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = Error::Validation {
            field: "hours".to_string(),
            message: "duration must be at least one hour".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "validation error for 'hours': duration must be at least one hour"
        );
    }

    #[test]
    fn test_slot_conflict_display() {
        let err = Error::SlotConflict {
            ground: GroundId(3),
            details: "overlaps reservation 7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "slot conflict on ground 3: overlaps reservation 7"
        );
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound {
            resource: "reservation 42".to_string(),
        };
        assert_eq!(err.to_string(), "not found: reservation 42");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_lock_timeout_display() {
        let err = Error::LockTimeout;
        assert_eq!(err.to_string(), "timed out waiting for the database lock");
    }

    #[test]
    fn test_busy_database_maps_to_lock_timeout() {
        let busy = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            Some("database is locked".to_string()),
        );
        let err: Error = busy.into();
        assert!(matches!(err, Error::LockTimeout));

        let other = rusqlite::Error::QueryReturnedNoRows;
        let err: Error = other.into();
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_schema_version_display() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported schema version: expected 1, found 2"
        );
    }

    #[test]
    fn test_from_validation_error() {
        let source = ValidationError {
            field: "name".into(),
            message: "must be non-empty".into(),
        };
        let err: Error = source.into();
        assert!(matches!(err, Error::Validation { .. }));
    }
}
