//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::reservation::{BookingRequest, ReservationId, ReviewStatus};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation that will
/// be performed when the plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Book a slot on a ground, creating a new pending reservation.
    Book(BookingRequest),

    /// Set the review status of an existing reservation.
    SetReviewStatus {
        /// The reservation to review.
        id: ReservationId,
        /// The status to apply.
        status: ReviewStatus,
    },

    /// Delete one or more reservations in a single transaction.
    DeleteReservations(Vec<ReservationId>),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Book(request) => {
                format!(
                    "Book ground {} for user {} ({} hour slot)",
                    request.ground,
                    request.user,
                    request.slot.hours()
                )
            }
            Self::SetReviewStatus { id, status } => {
                format!("Mark reservation {id} as {status}")
            }
            Self::DeleteReservations(ids) => match ids.as_slice() {
                [id] => format!("Delete reservation {id}"),
                ids => format!("Delete {} reservations", ids.len()),
            },
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundbook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Book ground 1");
    /// assert_eq!(plan.description, "Book ground 1");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundbook::operations::{OperationPlan, PlanAction};
    /// use groundbook::ReservationId;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_action(PlanAction::DeleteReservations(vec![ReservationId(1)]));
    ///
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use groundbook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Test")
    ///     .add_warning("This is a warning");
    ///
    /// assert_eq!(plan.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GroundId, UserId};
    use crate::database::test_util::slot_at;

    #[test]
    fn test_plan_action_description() {
        let request = BookingRequest::new(GroundId(3), UserId(7), slot_at(10, 2));
        let desc = PlanAction::Book(request).description();
        assert!(desc.contains('3'));
        assert!(desc.contains('7'));
        assert!(desc.contains("2 hour"));

        let desc = PlanAction::SetReviewStatus {
            id: ReservationId(5),
            status: ReviewStatus::Approved,
        }
        .description();
        assert!(desc.contains('5'));
        assert!(desc.contains("approved"));
    }

    #[test]
    fn test_delete_description_counts_batch() {
        let single = PlanAction::DeleteReservations(vec![ReservationId(9)]).description();
        assert_eq!(single, "Delete reservation 9");

        let batch =
            PlanAction::DeleteReservations(vec![ReservationId(1), ReservationId(2)]).description();
        assert_eq!(batch, "Delete 2 reservations");
    }

    #[test]
    fn test_operation_plan_new() {
        let plan = OperationPlan::new("Test operation");
        assert_eq!(plan.description, "Test operation");
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_operation_plan_builder_pattern() {
        let plan = OperationPlan::new("Test")
            .add_action(PlanAction::DeleteReservations(vec![ReservationId(1)]))
            .add_warning("Warning 1")
            .add_warning("Warning 2")
            .add_action(PlanAction::SetReviewStatus {
                id: ReservationId(2),
                status: ReviewStatus::Rejected,
            });

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.warnings.len(), 2);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_warnings_preserve_order() {
        let plan = OperationPlan::new("Test")
            .add_warning("first")
            .add_warning("second");
        assert_eq!(plan.warnings, vec!["first", "second"]);
    }
}
