#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # groundbook
//!
//! A library for managing ground reservations.
//!
//! This library provides core types and functionality for booking time
//! slots on sports grounds, reviewing bookings, and querying the
//! reservation ledger.
//!
//! ## Core Types
//!
//! - [`Ground`], [`User`] and their id newtypes: the catalog entities
//! - [`TimeSlot`]: a half-open interval of whole hours
//! - [`Reservation`] and [`ReviewStatus`]: booking records and their review state
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::time::{Duration, UNIX_EPOCH};
//! use groundbook::TimeSlot;
//!
//! // A two hour slot starting ten hours after the epoch
//! let slot = TimeSlot::new(UNIX_EPOCH + Duration::from_secs(36_000), 2).unwrap();
//!
//! // Slots that merely touch do not overlap
//! let next = TimeSlot::new(slot.end(), 1).unwrap();
//! assert!(!slot.overlaps(&next));
//! ```

pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod reservation;
pub mod slot;

// Re-export key types at crate root for convenience
pub use catalog::{Ground, GroundId, User, UserId};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    AdminToken, BookingOptions, BookingPlan, CancelPlan, ExecutionResult, OperationPlan,
    PlanAction, PlanExecutor, ReviewPlan,
};
pub use reservation::{BookingRequest, Reservation, ReservationId, ReviewStatus};
pub use slot::{first_conflict, has_conflict, TimeSlot, ValidationError};
