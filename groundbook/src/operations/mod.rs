//! High-level reservation operations.
//!
//! Mutating operations follow a plan and execute cycle: a plan type
//! inspects the database and produces an [`OperationPlan`], which a
//! [`PlanExecutor`] then applies. Plans can be executed in dry-run mode to
//! preview their effect. Read-only operations live in [`query`] and run
//! directly.
//!
//! # Examples
//!
//! ```no_run
//! use std::time::{Duration, UNIX_EPOCH};
//! use groundbook::config::ConfigBuilder;
//! use groundbook::database::{Database, DatabaseConfig};
//! use groundbook::operations::{BookingOptions, BookingPlan, PlanExecutor};
//! use groundbook::TimeSlot;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/groundbook.db")).unwrap();
//! let config = ConfigBuilder::new().build().unwrap();
//!
//! let ground = db.insert_ground("north pitch", 50).unwrap();
//! let user = db.insert_user("alice").unwrap();
//! let slot = TimeSlot::new(UNIX_EPOCH + Duration::from_secs(36_000), 2).unwrap();
//!
//! let plan = BookingPlan::new(BookingOptions::new(ground.id(), user.id(), slot), &config)
//!     .build_plan(&db)
//!     .unwrap();
//! let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
//!
//! let reservation = result.reservation.unwrap();
//! println!("booked reservation {} at price {}", reservation.id(), reservation.price());
//! ```

pub mod book;
pub mod cancel;
pub mod executor;
pub mod init;
pub mod plan;
pub mod query;
pub mod review;

pub use book::{BookingOptions, BookingPlan};
pub use cancel::CancelPlan;
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use review::{AdminToken, ReviewPlan};
