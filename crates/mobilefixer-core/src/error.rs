//! # Error Types
//!
//! Domain-specific error types for mobilefixer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mobilefixer-core errors (this file)                                   │
//! │  ├── CoreError        - Workflow and permission violations             │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  mobilefixer-store errors (separate crate)                             │
//! │  └── StoreError       - Missing records, integrity failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Front-end toast      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::approval::RequestStatus;
use crate::status::RepairStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the workflow modules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The repair lifecycle does not allow this move.
    ///
    /// ## When This Occurs
    /// - Skipping a stage (pending → delivered)
    /// - Leaving a terminal stage (delivered, cancelled)
    /// - "Moving" a repair to the stage it is already in
    #[error("Repair cannot move from {from} to {to}")]
    InvalidTransition { from: RepairStatus, to: RepairStatus },

    /// A repair cannot be opened directly in a terminal stage.
    #[error("Repair cannot be opened as {0}")]
    TerminalIntakeStatus(RepairStatus),

    /// An inventory update request was already approved or denied.
    ///
    /// ## User Workflow
    /// ```text
    /// Owner clicks "Approve" twice
    ///      │
    ///      ▼
    /// First click: pending → approved, quantity += delta
    ///      │
    ///      ▼
    /// Second click: AlreadyReviewed { status: Approved }
    ///      │
    ///      ▼
    /// Quantity is NOT changed a second time
    /// ```
    #[error("Request {request_id} was already {status}")]
    AlreadyReviewed {
        request_id: String,
        status: RequestStatus,
    },

    /// No request with this id is embedded in the item.
    #[error("Request {request_id} not found on item {item_id}")]
    RequestNotFound { item_id: String, request_id: String },

    /// The item already has a request waiting for review.
    #[error("Item {item_id} already has a pending update request")]
    RequestAlreadyPending { item_id: String },

    /// The acting user's role does not allow the operation.
    #[error("User {user_id} is not allowed to {action}")]
    PermissionDenied { user_id: String, action: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when text typed into a form cannot become a domain value.
/// They are raised before any store mutation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be zero.
    #[error("{field} must not be zero")]
    MustBeNonZero { field: String },

    /// Invalid format (e.g., "abc" typed into a price box).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::Required`].
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Shorthand for [`ValidationError::InvalidFormat`].
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidTransition {
            from: RepairStatus::Pending,
            to: RepairStatus::Delivered,
        };
        assert_eq!(err.to_string(), "Repair cannot move from pending to delivered");

        let err = CoreError::AlreadyReviewed {
            request_id: "req-1".to_string(),
            status: RequestStatus::Denied,
        };
        assert_eq!(err.to_string(), "Request req-1 was already denied");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("Mobile number").to_string(),
            "Mobile number is required"
        );
        assert_eq!(
            ValidationError::invalid("quantity", "must be a whole number").to_string(),
            "quantity has invalid format: must be a whole number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("reason").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
