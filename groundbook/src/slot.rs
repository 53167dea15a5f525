//! Time slot types and the interval conflict checker.
//!
//! A [`TimeSlot`] is a half-open interval `[start, start + hours)` on the
//! wall clock. The conflict checker decides whether a candidate slot
//! overlaps any existing non-rejected slot on the same ground. It is pure:
//! no I/O, no side effects, independently testable against synthetic
//! interval lists.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::reservation::ReviewStatus;

/// Number of seconds in one booking hour.
const SECS_PER_HOUR: u64 = 3600;

/// A half-open booking interval `[start, start + hours)`.
///
/// Touching endpoints do not overlap: a slot ending at 12:00 and a slot
/// starting at 12:00 are compatible.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use groundbook::TimeSlot;
///
/// let ten = UNIX_EPOCH + Duration::from_secs(10 * 3600);
/// let slot = TimeSlot::new(ten, 2).unwrap();
/// assert_eq!(slot.hours(), 2);
/// assert_eq!(slot.end(), ten + Duration::from_secs(2 * 3600));
///
/// // Zero-hour slots are invalid input.
/// assert!(TimeSlot::new(ten, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    start: SystemTime,
    hours: u32,
}

impl TimeSlot {
    /// Creates a new time slot starting at `start` and lasting `hours`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is zero.
    pub fn new(start: SystemTime, hours: u32) -> Result<Self, ValidationError> {
        if hours == 0 {
            return Err(ValidationError {
                field: "hours".into(),
                message: "duration must be at least one hour".into(),
            });
        }
        Ok(Self { start, hours })
    }

    /// Returns the start of the slot.
    #[must_use]
    pub const fn start(&self) -> SystemTime {
        self.start
    }

    /// Returns the duration of the slot in whole hours.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the exclusive end of the slot (`start + hours`).
    #[must_use]
    pub fn end(&self) -> SystemTime {
        self.start + Duration::from_secs(u64::from(self.hours) * SECS_PER_HOUR)
    }

    /// Checks whether two slots overlap.
    ///
    /// Uses the standard half-open test: `a` and `b` overlap iff
    /// `a.start < b.end && b.start < a.end`. The test is symmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use groundbook::TimeSlot;
    ///
    /// let at = |h: u64| UNIX_EPOCH + Duration::from_secs(h * 3600);
    ///
    /// let a = TimeSlot::new(at(10), 2).unwrap();
    /// let touching = TimeSlot::new(at(12), 1).unwrap();
    /// let inside = TimeSlot::new(at(11), 1).unwrap();
    ///
    /// assert!(!a.overlaps(&touching));
    /// assert!(a.overlaps(&inside));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Returns the first existing non-rejected slot that overlaps `candidate`.
///
/// Rejected entries are skipped: a rejected reservation frees its slot.
/// The scan short-circuits on the first overlapping match.
#[must_use]
pub fn first_conflict<'a>(
    existing: &'a [(TimeSlot, ReviewStatus)],
    candidate: &TimeSlot,
) -> Option<&'a TimeSlot> {
    existing
        .iter()
        .filter(|(_, status)| *status != ReviewStatus::Rejected)
        .map(|(slot, _)| slot)
        .find(|slot| slot.overlaps(candidate))
}

/// Checks whether `candidate` conflicts with any existing non-rejected slot.
///
/// An empty existing list never conflicts.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use groundbook::reservation::ReviewStatus;
/// use groundbook::slot::{has_conflict, TimeSlot};
///
/// let at = |h: u64| UNIX_EPOCH + Duration::from_secs(h * 3600);
/// let existing = vec![
///     (TimeSlot::new(at(10), 2).unwrap(), ReviewStatus::Pending),
///     (TimeSlot::new(at(14), 2).unwrap(), ReviewStatus::Rejected),
/// ];
///
/// // Overlaps the pending slot.
/// assert!(has_conflict(&existing, &TimeSlot::new(at(11), 1).unwrap()));
/// // The rejected slot is free for rebooking.
/// assert!(!has_conflict(&existing, &TimeSlot::new(at(14), 2).unwrap()));
/// ```
#[must_use]
pub fn has_conflict(existing: &[(TimeSlot, ReviewStatus)], candidate: &TimeSlot) -> bool {
    first_conflict(existing, candidate).is_some()
}

/// Error type for validation failures on domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
