//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, time parsing, and
//! output formatting.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::CliError;
use groundbook::{Config, ConfigBuilder, Database, DatabaseConfig};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options and configuration.
fn resolve_database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    // Priority: global option > config file > default
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("groundbook.db"));
    }

    if let Some(ref data_dir) = config.data_dir {
        return Ok(data_dir.join("groundbook.db"));
    }

    // Default: ~/.groundbook/groundbook.db
    let home_dir = home::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;

    Ok(home_dir.join(".groundbook").join("groundbook.db"))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global, config)?;

    let disable_autoinit = global.disable_autoinit || config.disable_autoinit.unwrap_or(false);
    if !db_path.exists() && disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse a start time from user input.
///
/// Accepted formats, tried in order:
/// - RFC 3339 (`2026-03-01T10:00:00Z`)
/// - `YYYY-MM-DD HH:MM`, interpreted as UTC
/// - Plain unix seconds (`1772360400`)
pub fn parse_start_time(input: &str) -> Result<SystemTime, CliError> {
    use chrono::{DateTime, NaiveDateTime, Utc};

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc).into());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(naive.and_utc().into());
    }

    if let Ok(secs) = input.parse::<u64>() {
        return Ok(UNIX_EPOCH + Duration::from_secs(secs));
    }

    Err(CliError::InvalidArguments(format!(
        "could not parse start time '{input}' (expected RFC 3339, 'YYYY-MM-DD HH:MM', or unix seconds)"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_data_dir(data_dir: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir,
            busy_timeout: None,
            disable_autoinit: false,
        }
    }

    #[test]
    fn test_database_path_prefers_global_over_config() {
        let global = options_with_data_dir(Some(PathBuf::from("/cli/dir")));
        let config = Config {
            data_dir: Some(PathBuf::from("/config/dir")),
            ..Config::default()
        };

        let path = resolve_database_path(&global, &config).unwrap();
        assert_eq!(path, PathBuf::from("/cli/dir/groundbook.db"));
    }

    #[test]
    fn test_database_path_falls_back_to_config() {
        let global = options_with_data_dir(None);
        let config = Config {
            data_dir: Some(PathBuf::from("/config/dir")),
            ..Config::default()
        };

        let path = resolve_database_path(&global, &config).unwrap();
        assert_eq!(path, PathBuf::from("/config/dir/groundbook.db"));
    }

    #[test]
    fn test_config_can_disable_autoinit() {
        let dir = tempfile::tempdir().unwrap();
        let global = options_with_data_dir(Some(dir.path().join("missing")));
        let config = Config {
            disable_autoinit: Some(true),
            ..Config::default()
        };

        let err = open_database(&global, &config).unwrap_err();
        assert!(matches!(err, CliError::NoDataDirectory));
    }

    #[test]
    fn test_format_timestamp() {
        // 2024-01-15 10:30:45 UTC
        let st = UNIX_EPOCH + Duration::from_secs(1_705_314_645);
        let formatted = format_timestamp(st);
        assert!(formatted.contains("2024-01-15"));
    }

    #[test]
    fn test_parse_start_time_rfc3339() {
        let st = parse_start_time("1970-01-01T01:00:00Z").unwrap();
        assert_eq!(st, UNIX_EPOCH + Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_start_time_naive() {
        let st = parse_start_time("1970-01-01 02:00").unwrap();
        assert_eq!(st, UNIX_EPOCH + Duration::from_secs(7200));
    }

    #[test]
    fn test_parse_start_time_epoch_seconds() {
        let st = parse_start_time("3600").unwrap();
        assert_eq!(st, UNIX_EPOCH + Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_start_time_invalid() {
        let err = parse_start_time("tomorrow").unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }
}
