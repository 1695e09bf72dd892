//! # Domain Types
//!
//! Core records used throughout MobileFixer Pro.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐   ┌─────────────────┐  │
//! │  │     Store       │◄───────│  InventoryItem  │──►│    Supplier     │  │
//! │  │  ─────────────  │  N:1   │  ─────────────  │   │  ─────────────  │  │
//! │  │  id             │        │  store_id       │   │  id, phone      │  │
//! │  │  owner_id       │        │  quantity (u32) │   └─────────────────┘  │
//! │  └────────▲────────┘        │  requested_     │                        │
//! │           │ N:1             │   updates ──────┼──► InventoryUpdate-    │
//! │  ┌────────┴────────┐        └─────────────────┘    Request (owned)     │
//! │  │     Repair      │                                                    │
//! │  │  ─────────────  │  N:1   ┌─────────────────┐                        │
//! │  │  customer_phone │───────►│    Customer     │                        │
//! │  │  status         │        │  phone (key)    │                        │
//! │  │  bill_amount    │        │  repair_history │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every record has a string `id`. Customers are additionally identified by
//! `phone`, which is what repairs reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::approval::{InventoryUpdateRequest, RequestStatus};
use crate::money::Money;
use crate::status::{CoarseStatus, RepairStatus};

// =============================================================================
// Users & Roles
// =============================================================================

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    /// Sees every store, reviews inventory requests, sees buy prices.
    Owner,
    /// Bound to one store; proposes inventory changes for review.
    Staff,
}

impl UserRole {
    /// Whether this role sees all stores unfiltered.
    #[inline]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, UserRole::Owner)
    }
}

/// A user as supplied by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Assigned store (staff only).
    pub store_id: Option<String>,
    pub is_active: bool,
}

// =============================================================================
// Store
// =============================================================================

/// A physical shop location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub location: String,
    pub owner_id: String,
    pub phone: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A spare-parts supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Input for registering a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSupplier {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

// =============================================================================
// Customer
// =============================================================================

/// A repair customer, keyed by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Ids of this customer's repairs, oldest first.
    pub repair_history: Vec<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Input for registering a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A stocked spare part at one store.
///
/// ## Invariants
/// - `quantity` is never negative (`u32`; every change is clamped at zero)
/// - `requested_updates` is append-only and ordered by request time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryItem {
    pub id: String,
    pub store_id: String,
    /// Display name, e.g. "Apple iPhone 14 Display".
    pub name: String,
    pub mobile_company: String,
    pub spare_part_type: String,
    pub spare_part_model: String,
    pub supplier_id: Option<String>,
    /// Supplier phone cached at intake.
    pub supplier_phone: Option<String>,
    #[ts(as = "Option<String>")]
    pub purchase_date: Option<DateTime<Utc>>,
    pub quantity: u32,
    pub reorder_level: u32,
    pub buy_price: Money,
    pub wholesale_price: Money,
    pub retail_price: Money,
    pub category: String,
    pub requested_updates: Vec<InventoryUpdateRequest>,
}

impl InventoryItem {
    /// Low stock is inclusive: at or below the reorder level.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// The request currently waiting for review, if any.
    pub fn pending_request(&self) -> Option<&InventoryUpdateRequest> {
        self.requested_updates
            .iter()
            .find(|req| req.status == RequestStatus::Pending)
    }

    /// Whether a request is waiting for review.
    pub fn has_pending_request(&self) -> bool {
        self.pending_request().is_some()
    }

    /// Finds an embedded request by id.
    pub fn request(&self, request_id: &str) -> Option<&InventoryUpdateRequest> {
        self.requested_updates.iter().find(|req| req.id == request_id)
    }

    /// Retail value of the units on hand.
    pub fn stock_value(&self) -> Money {
        self.retail_price * self.quantity
    }
}

/// Input for adding an inventory item.
///
/// The store fills in `id`, `supplier_phone` and the empty request list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewInventoryItem {
    pub store_id: String,
    pub name: String,
    pub mobile_company: String,
    pub spare_part_type: String,
    pub spare_part_model: String,
    pub supplier_id: Option<String>,
    #[ts(as = "Option<String>")]
    pub purchase_date: Option<DateTime<Utc>>,
    pub quantity: u32,
    pub reorder_level: u32,
    pub buy_price: Money,
    pub wholesale_price: Money,
    pub retail_price: Money,
    pub category: String,
}

// =============================================================================
// Repair
// =============================================================================

/// A repair job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Repair {
    pub id: String,
    pub store_id: String,
    /// References [`Customer::phone`].
    pub customer_phone: String,
    pub phone_company: String,
    pub phone_model: String,
    pub imei: Option<String>,
    pub issues: Vec<String>,
    pub status: RepairStatus,
    #[ts(as = "String")]
    pub received_date: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub completed_date: Option<DateTime<Utc>>,
    #[ts(as = "Option<String>")]
    pub delivery_date: Option<DateTime<Utc>>,
    pub assigned_staff_id: String,
    pub bill_amount: Money,
    #[ts(as = "Option<String>")]
    pub estimated_completion: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl Repair {
    /// Dashboard bucket derived from the fine status.
    #[inline]
    pub fn coarse_status(&self) -> Option<CoarseStatus> {
        self.status.coarse()
    }

    /// "Apple iPhone 14 Pro".
    pub fn device_label(&self) -> String {
        format!("{} {}", self.phone_company, self.phone_model)
            .trim()
            .to_string()
    }
}

/// Input for opening a repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewRepair {
    pub store_id: String,
    pub customer_phone: String,
    pub phone_company: String,
    pub phone_model: String,
    pub imei: Option<String>,
    pub issues: Vec<String>,
    pub status: RepairStatus,
    #[ts(as = "String")]
    pub received_date: DateTime<Utc>,
    pub assigned_staff_id: String,
    pub bill_amount: Money,
    #[ts(as = "Option<String>")]
    pub estimated_completion: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
