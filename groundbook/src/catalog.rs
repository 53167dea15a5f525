//! Ground catalog and user registry types.
//!
//! Grounds (bookable venues) and users are collaborators of the
//! reservation core: the lifecycle operations only ever ask whether one
//! exists and what a ground charges per hour. They are kept in the same
//! store so that booking can validate references inside a single
//! transaction.

use serde::{Deserialize, Serialize};

use crate::slot::ValidationError;

/// Identifier of a bookable ground.
///
/// # Examples
///
/// ```
/// use groundbook::GroundId;
///
/// let id = GroundId(7);
/// assert_eq!(format!("{id}"), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GroundId(pub i64);

impl std::fmt::Display for GroundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a registered user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable venue with an hourly price.
///
/// # Examples
///
/// ```
/// use groundbook::{Ground, GroundId};
///
/// let ground = Ground::new(GroundId(1), "north pitch", 50).unwrap();
/// assert_eq!(ground.unit_price(), 50);
///
/// // Prices cannot be negative.
/// assert!(Ground::new(GroundId(1), "north pitch", -1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ground {
    id: GroundId,
    name: String,
    unit_price: i64,
}

impl Ground {
    /// Creates a ground record.
    ///
    /// The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or the unit
    /// price is negative.
    pub fn new(id: GroundId, name: impl Into<String>, unit_price: i64) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "ground name must be non-empty after trimming whitespace".into(),
            });
        }
        if unit_price < 0 {
            return Err(ValidationError {
                field: "unit_price".into(),
                message: "unit price must not be negative".into(),
            });
        }
        Ok(Self { id, name, unit_price })
    }

    /// Returns the ground identifier.
    #[must_use]
    pub const fn id(&self) -> GroundId {
        self.id
    }

    /// Returns the ground name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price charged per booked hour.
    #[must_use]
    pub const fn unit_price(&self) -> i64 {
        self.unit_price
    }
}

/// A registered user able to place reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Creates a user record. The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(id: UserId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "user name must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self { id, name })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
