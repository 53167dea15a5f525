//! Stderr logging with three verbosity levels.
//!
//! Booking commands print their results on stdout; everything diagnostic
//! (conflict details, idempotent-operation warnings, plan previews) goes
//! through a [`Logger`] to stderr so the two streams can be consumed
//! separately.

use std::env;
use std::fmt;

/// How much diagnostic output a [`Logger`] emits.
///
/// Levels are totally ordered: `Quiet < Normal < Verbose`. A message is
/// printed when the logger's level is at least the level the message
/// requires.
///
/// # Examples
///
/// ```
/// use groundbook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing, not even errors.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug.
    Verbose,
}

impl LogLevel {
    /// The lowercase name of this level, as accepted by [`LogLevel::parse`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// Parses a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `quiet`, `normal`, or
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundbook::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("Quiet").unwrap(), LogLevel::Quiet);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes levelled diagnostic messages to stderr.
///
/// # Examples
///
/// ```
/// use groundbook::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("reservation 12 is already approved");
/// logger.debug("checking ground 3 for conflicting slots"); // suppressed
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger that emits messages up to `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, required: LogLevel, prefix: &str, message: &str) {
        if self.level >= required {
            eprintln!("{prefix}: {message}");
        }
    }

    /// Logs an error. Suppressed only at `Quiet`.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning. Suppressed only at `Quiet`.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message. Shown only at `Verbose`.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message. Shown only at `Verbose`.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from CLI flags and the environment.
///
/// The `verbose` and `quiet` flags win over the `GROUNDBOOK_LOG_MODE`
/// environment variable, which in turn wins over the `Normal` default.
/// If both flags are set, `verbose` wins. An unrecognized
/// `GROUNDBOOK_LOG_MODE` value falls back to `Normal`.
///
/// # Examples
///
/// ```
/// use groundbook::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(mode) = env::var("GROUNDBOOK_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&mode) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
