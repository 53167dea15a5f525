//! Configuration system for groundbook.
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (GROUNDBOOK_*)
//! 3. Private project config (`groundbook.local.yaml`)
//! 4. Project config (`groundbook.yaml`)
//! 5. User config (`~/.groundbook/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use groundbook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("Lock wait: {:?}", config.maximum_lock_wait_seconds);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use groundbook::config::{BookingConfig, Config, ConfigBuilder};
//!
//! let custom = Config {
//!     booking: Some(BookingConfig { max_hours: Some(8) }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.booking.unwrap().max_hours, Some(8));
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Complete configuration structure.
///
/// Every field is optional so that partial configuration files merge
/// cleanly. Unset fields fall back to built-in defaults at the point of
/// use.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the reservation database and user config.
    pub data_dir: Option<PathBuf>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Booking policy settings.
    pub booking: Option<BookingConfig>,
}

/// Booking policy configuration.
///
/// # Examples
///
/// ```
/// use groundbook::config::BookingConfig;
///
/// let config = BookingConfig { max_hours: Some(12) };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Maximum duration a single booking may span, in hours.
    pub max_hours: Option<u32>,
}

impl Config {
    /// Merges `other` into `self`, with `other` taking precedence.
    ///
    /// Fields set in `other` override fields in `self`; unset fields are
    /// left alone. Nested sections merge field by field.
    #[must_use]
    pub fn merged_with(mut self, other: Self) -> Self {
        if other.data_dir.is_some() {
            self.data_dir = other.data_dir;
        }
        if other.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = other.maximum_lock_wait_seconds;
        }
        if other.disable_autoinit.is_some() {
            self.disable_autoinit = other.disable_autoinit;
        }
        self.booking = match (self.booking, other.booking) {
            (Some(mut base), Some(over)) => {
                if over.max_hours.is_some() {
                    base.max_hours = over.max_hours;
                }
                Some(base)
            }
            (base, over) => over.or(base),
        };
        self
    }

    /// Validates the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting has an out-of-range value.
    pub fn validate(&self) -> Result<()> {
        if self.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".to_string(),
                message: "lock wait must be at least one second".to_string(),
            });
        }
        if let Some(booking) = &self.booking {
            if booking.max_hours == Some(0) {
                return Err(Error::Validation {
                    field: "booking.max_hours".to_string(),
                    message: "maximum booking duration must be at least one hour".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Configuration source with its precedence level.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files on disk.
///
/// # Examples
///
/// ```no_run
/// use groundbook::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.groundbook/config.yaml` (precedence 1)
    /// 2. Project `groundbook.yaml` files walking up from `working_dir` (precedence 2)
    /// 3. Project `groundbook.local.yaml` files (precedence 3)
    ///
    /// The `data_dir` parameter allows overriding where the user config
    /// is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be
    /// read or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        let project_configs = Self::discover_project_configs(working_dir)?;
        sources.extend(project_configs);

        // Sort by precedence (higher precedence last for easier processing)
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = if let Some(dir) = data_dir {
            dir.join("config.yaml")
        } else {
            crate::database::default_data_dir()?.join("config.yaml")
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `groundbook.yaml`
    /// or `groundbook.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            let mut found_any = false;

            let project_yaml = current.join("groundbook.yaml");
            if project_yaml.exists() {
                let config = Self::load_file(&project_yaml)?;
                configs.push(ConfigSource {
                    path: project_yaml,
                    precedence: 2,
                    config,
                });
                found_any = true;
            }

            let local_yaml = current.join("groundbook.local.yaml");
            if local_yaml.exists() {
                let config = Self::load_file(&local_yaml)?;
                configs.push(ConfigSource {
                    path: local_yaml,
                    precedence: 3,
                    config,
                });
                found_any = true;
            }

            if found_any || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

/// Configuration loaded from GROUNDBOOK_* environment variables.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Reads recognized environment variables into a partial config.
    ///
    /// Recognizes `GROUNDBOOK_DATA_DIR`, `GROUNDBOOK_MAX_LOCK_WAIT`,
    /// `GROUNDBOOK_DISABLE_AUTOINIT` and `GROUNDBOOK_MAX_HOURS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn load() -> Result<Config> {
        let mut config = Config::default();

        if let Ok(dir) = env::var("GROUNDBOOK_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(value) = env::var("GROUNDBOOK_MAX_LOCK_WAIT") {
            let seconds = value.parse().map_err(|_| Error::Validation {
                field: "GROUNDBOOK_MAX_LOCK_WAIT".to_string(),
                message: format!("expected a number of seconds, got '{value}'"),
            })?;
            config.maximum_lock_wait_seconds = Some(seconds);
        }

        if let Ok(value) = env::var("GROUNDBOOK_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(parse_bool(&value).ok_or_else(|| Error::Validation {
                field: "GROUNDBOOK_DISABLE_AUTOINIT".to_string(),
                message: format!("expected true or false, got '{value}'"),
            })?);
        }

        if let Ok(value) = env::var("GROUNDBOOK_MAX_HOURS") {
            let max_hours = value.parse().map_err(|_| Error::Validation {
                field: "GROUNDBOOK_MAX_HOURS".to_string(),
                message: format!("expected a number of hours, got '{value}'"),
            })?;
            config.booking = Some(BookingConfig {
                max_hours: Some(max_hours),
            });
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Builder assembling the effective configuration from all sources.
///
/// # Examples
///
/// ```
/// use groundbook::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(config.booking.is_none());
/// ```
#[derive(Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder with all sources enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory from which project config discovery starts.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Overrides the directory the user config is loaded from.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Skips loading configuration files from disk.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading GROUNDBOOK_* environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merges all enabled sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be loaded or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            for source in ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())? {
                config = config.merged_with(source.config);
            }
        }

        if !self.skip_env {
            config = config.merged_with(EnvironmentConfig::load()?);
        }

        if let Some(overrides) = self.overrides {
            config = config.merged_with(overrides);
        }

        config.validate()?;
        Ok(config)
    }
}
