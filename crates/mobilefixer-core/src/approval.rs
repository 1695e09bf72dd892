//! # Inventory Approval Workflow
//!
//! Staff propose quantity changes; the owner approves or denies them.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Inventory Update Request                               │
//! │                                                                         │
//! │                      ┌──────────┐                                      │
//! │     staff submits ──►│ pending  │                                      │
//! │                      └────┬─────┘                                      │
//! │              approve      │      deny                                   │
//! │          ┌────────────────┴────────────────┐                           │
//! │          ▼                                 ▼                            │
//! │   ┌────────────┐                    ┌────────────┐                     │
//! │   │  approved  │ quantity += delta  │   denied   │ quantity untouched  │
//! │   └────────────┘ (clamped at 0)     └────────────┘                     │
//! │                                                                         │
//! │   Both outcomes are terminal. Reviewing again is AlreadyReviewed.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Clamping
//! A delta of -5 on a quantity of 3 leaves 0, not -2. The outcome reports
//! both the requested and the applied change so callers can see the
//! truncation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{InventoryItem, User};

// =============================================================================
// Request Status
// =============================================================================

/// Review state of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    /// Approved and denied requests are immutable.
    #[inline]
    pub const fn is_reviewed(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Denied => "denied",
        };
        f.write_str(s)
    }
}

/// The owner's verdict on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Deny,
}

impl ReviewDecision {
    fn resulting_status(self) -> RequestStatus {
        match self {
            ReviewDecision::Approve => RequestStatus::Approved,
            ReviewDecision::Deny => RequestStatus::Denied,
        }
    }
}

// =============================================================================
// Inventory Update Request
// =============================================================================

/// A proposed change to an item's quantity, embedded in its item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryUpdateRequest {
    pub id: String,
    /// User id of the requester.
    pub requested_by: String,
    /// Signed change: negative for parts used, positive for restock.
    pub quantity_change: i64,
    pub reason: String,
    pub status: RequestStatus,
    #[ts(as = "String")]
    pub requested_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

impl InventoryUpdateRequest {
    /// Builds a fresh pending request.
    pub fn pending(
        id: impl Into<String>,
        requested_by: impl Into<String>,
        quantity_change: i64,
        reason: impl Into<String>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        InventoryUpdateRequest {
            id: id.into(),
            requested_by: requested_by.into(),
            quantity_change,
            reason: reason.into(),
            status: RequestStatus::Pending,
            requested_at,
            reviewed_at: None,
            reviewed_by: None,
        }
    }

    /// Moves a pending request to its terminal state and stamps the reviewer.
    ///
    /// Reviewed requests are never touched again: the second call returns
    /// [`CoreError::AlreadyReviewed`] and keeps the first stamp.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        reviewer_id: &str,
        at: DateTime<Utc>,
    ) -> CoreResult<()> {
        if self.status.is_reviewed() {
            return Err(CoreError::AlreadyReviewed {
                request_id: self.id.clone(),
                status: self.status,
            });
        }

        self.status = decision.resulting_status();
        self.reviewed_at = Some(at);
        self.reviewed_by = Some(reviewer_id.to_string());
        Ok(())
    }
}

/// Input for submitting an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUpdateRequest {
    pub requested_by: String,
    pub quantity_change: i64,
    pub reason: String,
}

// =============================================================================
// Quantity Arithmetic
// =============================================================================

/// Applies a signed change to a quantity, clamping at zero (and at
/// `u32::MAX` on the other side).
///
/// ## Example
/// ```rust
/// use mobilefixer_core::approval::apply_quantity_change;
///
/// assert_eq!(apply_quantity_change(8, -5), 3);
/// assert_eq!(apply_quantity_change(3, -5), 0);
/// ```
pub fn apply_quantity_change(quantity: u32, change: i64) -> u32 {
    clamp_quantity(i64::from(quantity).saturating_add(change))
}

/// Clamps any signed quantity into the valid stock range.
pub fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(0)).unwrap_or(u32::MAX)
}

// =============================================================================
// Review on an Item
// =============================================================================

/// What an approval actually did to the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApprovalOutcome {
    pub item_id: String,
    pub request_id: String,
    /// Delta the requester asked for.
    pub requested_change: i64,
    /// Delta actually applied after clamping.
    pub applied_change: i64,
    /// Item quantity after the approval.
    pub quantity: u32,
}

impl ApprovalOutcome {
    /// True when clamping cut the requested change short.
    pub fn was_clamped(&self) -> bool {
        self.requested_change != self.applied_change
    }
}

/// Only the elevated role reviews requests.
pub fn ensure_can_review(reviewer: &User) -> CoreResult<()> {
    if reviewer.role.is_elevated() && reviewer.is_active {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied {
            user_id: reviewer.id.clone(),
            action: "review inventory requests".to_string(),
        })
    }
}

impl InventoryItem {
    /// Appends a new pending request.
    ///
    /// Refused while another request on this item awaits review.
    pub fn submit_request(&mut self, request: InventoryUpdateRequest) -> CoreResult<()> {
        if self.has_pending_request() {
            return Err(CoreError::RequestAlreadyPending {
                item_id: self.id.clone(),
            });
        }
        self.requested_updates.push(request);
        Ok(())
    }

    /// Approves a pending request and applies its delta.
    pub fn approve_request(
        &mut self,
        request_id: &str,
        reviewer: &User,
        at: DateTime<Utc>,
    ) -> CoreResult<ApprovalOutcome> {
        ensure_can_review(reviewer)?;

        let item_id = self.id.clone();
        let request = self.request_mut(request_id)?;
        request.review(ReviewDecision::Approve, &reviewer.id, at)?;
        let requested_change = request.quantity_change;

        let before = self.quantity;
        self.quantity = apply_quantity_change(before, requested_change);

        Ok(ApprovalOutcome {
            item_id,
            request_id: request_id.to_string(),
            requested_change,
            applied_change: i64::from(self.quantity) - i64::from(before),
            quantity: self.quantity,
        })
    }

    /// Denies a pending request. Quantity is never touched.
    pub fn deny_request(
        &mut self,
        request_id: &str,
        reviewer: &User,
        at: DateTime<Utc>,
    ) -> CoreResult<()> {
        ensure_can_review(reviewer)?;
        self.request_mut(request_id)?
            .review(ReviewDecision::Deny, &reviewer.id, at)
    }

    fn request_mut(&mut self, request_id: &str) -> CoreResult<&mut InventoryUpdateRequest> {
        let item_id = &self.id;
        self.requested_updates
            .iter_mut()
            .find(|req| req.id == request_id)
            .ok_or_else(|| CoreError::RequestNotFound {
                item_id: item_id.clone(),
                request_id: request_id.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
