//! Reservation records and the review state machine.
//!
//! A [`Reservation`] ties a user, a ground and a [`TimeSlot`] together
//! with a computed price and a [`ReviewStatus`]. Records are created
//! Pending and move through the administrative review workflow; a
//! Rejected reservation frees its slot for rebooking.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::catalog::{GroundId, UserId};
use crate::slot::{TimeSlot, ValidationError};

/// Identifier of a reservation.
///
/// Assigned by the store on insert and never reused after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ReservationId(pub i64);

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Administrative review state of a reservation.
///
/// Transitions: `Pending -> Approved`, `Pending -> Rejected`, and
/// `Approved -> Rejected`. Re-applying the current state is idempotent.
///
/// # Examples
///
/// ```
/// use groundbook::ReviewStatus;
///
/// assert_eq!(ReviewStatus::parse("approved").unwrap(), ReviewStatus::Approved);
/// assert_eq!(format!("{}", ReviewStatus::Pending), "pending");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// Awaiting administrative review.
    Pending,
    /// Accepted by an administrator; the slot stays occupied.
    Approved,
    /// Declined by an administrator; the slot is freed.
    Rejected,
}

impl ReviewStatus {
    /// Returns the canonical lowercase name used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a review status from its storage name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("invalid review status: {s}")),
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to book a ground for a time slot.
///
/// Carries no price and no status: both are determined by the store when
/// the booking commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The ground to book.
    pub ground: GroundId,
    /// The requesting user.
    pub user: UserId,
    /// The requested interval.
    pub slot: TimeSlot,
}

impl BookingRequest {
    /// Creates a new booking request.
    #[must_use]
    pub const fn new(ground: GroundId, user: UserId, slot: TimeSlot) -> Self {
        Self { ground, user, slot }
    }
}

/// A reservation of a ground for a time slot, with price and review state.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use groundbook::{GroundId, Reservation, ReservationId, ReviewStatus, TimeSlot, UserId};
///
/// let slot = TimeSlot::new(UNIX_EPOCH + Duration::from_secs(36_000), 2).unwrap();
/// let reservation = Reservation::builder(ReservationId(1), GroundId(1), UserId(1), slot)
///     .price(100)
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.status(), ReviewStatus::Pending);
/// assert_eq!(reservation.price(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    ground: GroundId,
    user: UserId,
    slot: TimeSlot,
    price: i64,
    status: ReviewStatus,
    created_at: SystemTime,
}

impl Reservation {
    /// Creates a new reservation builder.
    ///
    /// The builder defaults to a zero price, `Pending` status and the
    /// current time as creation timestamp.
    #[must_use]
    pub fn builder(
        id: ReservationId,
        ground: GroundId,
        user: UserId,
        slot: TimeSlot,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id,
            ground,
            user,
            slot,
            price: 0,
            status: ReviewStatus::Pending,
            created_at: None,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the booked ground.
    #[must_use]
    pub const fn ground(&self) -> GroundId {
        self.ground
    }

    /// Returns the booking user.
    #[must_use]
    pub const fn user(&self) -> UserId {
        self.user
    }

    /// Returns the booked time slot.
    #[must_use]
    pub const fn slot(&self) -> TimeSlot {
        self.slot
    }

    /// Returns the price computed at booking time.
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    /// Returns the current review status.
    #[must_use]
    pub const fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Checks whether this reservation still occupies its slot.
    ///
    /// Only non-rejected reservations participate in conflict checks.
    #[must_use]
    pub fn occupies_slot(&self) -> bool {
        self.status != ReviewStatus::Rejected
    }
}

/// Builder for creating [`Reservation`] instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    ground: GroundId,
    user: UserId,
    slot: TimeSlot,
    price: i64,
    status: ReviewStatus,
    created_at: Option<SystemTime>,
}

impl ReservationBuilder {
    /// Sets the price.
    #[must_use]
    pub const fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the review status.
    #[must_use]
    pub const fn status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is negative.
    pub fn build(self) -> Result<Reservation, ValidationError> {
        if self.price < 0 {
            return Err(ValidationError {
                field: "price".into(),
                message: "price must not be negative".into(),
            });
        }
        Ok(Reservation {
            id: self.id,
            ground: self.ground,
            user: self.user,
            slot: self.slot,
            price: self.price,
            status: self.status,
            created_at: self.created_at.unwrap_or_else(SystemTime::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn slot(start_hour: u64, hours: u32) -> TimeSlot {
        TimeSlot::new(UNIX_EPOCH + Duration::from_secs(start_hour * 3600), hours).unwrap()
    }

    #[test]
    fn test_review_status_round_trip() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            assert_eq!(ReviewStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_review_status_parse_case_insensitive() {
        assert_eq!(ReviewStatus::parse("APPROVED").unwrap(), ReviewStatus::Approved);
        assert_eq!(ReviewStatus::parse("Pending").unwrap(), ReviewStatus::Pending);
    }

    #[test]
    fn test_review_status_parse_invalid() {
        assert!(ReviewStatus::parse("cancelled").is_err());
        assert!(ReviewStatus::parse("").is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let r = Reservation::builder(ReservationId(1), GroundId(2), UserId(3), slot(10, 2))
            .build()
            .unwrap();
        assert_eq!(r.id(), ReservationId(1));
        assert_eq!(r.ground(), GroundId(2));
        assert_eq!(r.user(), UserId(3));
        assert_eq!(r.price(), 0);
        assert_eq!(r.status(), ReviewStatus::Pending);
    }

    #[test]
    fn test_builder_negative_price() {
        let result = Reservation::builder(ReservationId(1), GroundId(1), UserId(1), slot(10, 2))
            .price(-1)
            .build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "price");
    }

    #[test]
    fn test_occupies_slot() {
        let pending = Reservation::builder(ReservationId(1), GroundId(1), UserId(1), slot(10, 2))
            .build()
            .unwrap();
        assert!(pending.occupies_slot());

        let rejected = Reservation::builder(ReservationId(2), GroundId(1), UserId(1), slot(10, 2))
            .status(ReviewStatus::Rejected)
            .build()
            .unwrap();
        assert!(!rejected.occupies_slot());
    }

    #[test]
    fn test_reservation_serde() {
        let r = Reservation::builder(ReservationId(1), GroundId(2), UserId(3), slot(10, 2))
            .price(40)
            .status(ReviewStatus::Approved)
            .build()
            .unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_booking_request_new() {
        let request = BookingRequest::new(GroundId(1), UserId(2), slot(10, 2));
        assert_eq!(request.ground, GroundId(1));
        assert_eq!(request.user, UserId(2));
        assert_eq!(request.slot.hours(), 2);
    }
}
