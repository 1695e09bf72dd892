//! # Store Error Types
//!
//! Every mutation returns an explicit result, so callers can tell
//! "succeeded" from "target missing" from "already reviewed".
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (form text)      CoreError (workflow rules)            │
//! │            │                             │                              │
//! │            └──────────────┬──────────────┘                              │
//! │                           ▼                                              │
//! │  StoreError (this module) ← adds NotFound / Duplicate context           │
//! │                           │                                              │
//! │                           ▼                                              │
//! │  Front-end shows a toast; the store is unchanged                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mobilefixer_core::{CoreError, ValidationError};
use thiserror::Error;

/// Data store operation errors.
///
/// A failed operation never changes any collection or the revision counter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Addressed record does not exist.
    ///
    /// ## When This Occurs
    /// - Unknown repair / item / store / supplier id
    /// - Repair intake for a phone with no customer record
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A customer with this phone is already registered.
    #[error("Customer with phone '{phone}' already exists")]
    DuplicateCustomer { phone: String },

    /// Workflow rule violation (illegal transition, already reviewed, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Input rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::NotFound { .. } | StoreError::Core(CoreError::RequestNotFound { .. })
        )
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
