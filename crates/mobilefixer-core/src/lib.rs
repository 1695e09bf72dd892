//! # mobilefixer-core: Pure Business Logic for MobileFixer Pro
//!
//! Entity records, repair and approval workflows, view derivations and form
//! parsing for a mobile-repair shop admin tool. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      MobileFixer Pro Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web front-end (views)                        │   │
//! │  │   Dashboard ── Repairs ── Inventory ── Customers                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              mobilefixer-store (DataStore)                      │   │
//! │  │   owned collections, copy-on-write snapshots, seed data         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ mobilefixer-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────┐ ┌─────────┐   │   │
//! │  │   │  types  │ │ status  │ │ approval │ │ query │ │  forms  │   │   │
//! │  │   │ Repair  │ │ table   │ │ pending→ │ │ scope │ │ strings │   │   │
//! │  │   │ Item... │ │         │ │ approved │ │ search│ │ → input │   │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └───────┘ └─────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Store, Supplier, Customer, InventoryItem, Repair, User
//! - [`money`] - Integer money (minor units)
//! - [`status`] - Repair lifecycle and transition table
//! - [`approval`] - Inventory update requests and their review
//! - [`query`] - Role scoping, search, filters, review queue
//! - [`dashboard`] - Dashboard tiles and customer totals
//! - [`validation`] / [`forms`] - Form text → typed inputs
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use mobilefixer_core::approval::apply_quantity_change;
//! use mobilefixer_core::status::RepairStatus;
//!
//! // Stock never goes negative
//! assert_eq!(apply_quantity_change(3, -5), 0);
//!
//! // The lifecycle is forward-only
//! assert!(RepairStatus::Repaired.transition_to(RepairStatus::Delivered).is_ok());
//! assert!(RepairStatus::Delivered.transition_to(RepairStatus::Pending).is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod approval;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod money;
pub mod query;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use approval::{ApprovalOutcome, InventoryUpdateRequest, NewUpdateRequest, RequestStatus};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use status::{CoarseStatus, RepairStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Owner role id used by the sample data.
pub const SAMPLE_OWNER_ID: &str = "1";

/// Largest quantity change a single update request may propose.
///
/// ## Business Reason
/// Catches typos like "-200" for "-2" before they reach the owner's queue.
pub const MAX_QUANTITY_CHANGE: i64 = 10_000;

/// Largest bill amount or price a form may enter, in minor units
/// (₹10,00,00,000.00).
///
/// Keeps per-customer totals and stock valuations far below `i64::MAX`.
pub const MAX_PRICE_MINOR: i64 = 10_000_000_000;

/// Upper bound on the estimated repair duration.
pub const MAX_ESTIMATED_DAYS: u32 = 365;

/// Longest free-text field accepted from a form.
pub const MAX_TEXT_LEN: usize = 500;
