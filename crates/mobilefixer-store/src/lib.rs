//! # mobilefixer-store: In-Memory Data Layer for MobileFixer Pro
//!
//! Owns every entity collection for the lifetime of the process. There is
//! no persistence: each start is seeded from fixed sample data (or empty).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      MobileFixer Pro Data Flow                          │
//! │                                                                         │
//! │  Front-end view (Repairs tab, "Mark Repaired")                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 mobilefixer-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   DataStore   │    │  Repositories │    │  Seed / Cfg  │  │   │
//! │  │   │  (store.rs)   │    │ (repair.rs)   │    │              │  │   │
//! │  │   │               │    │               │    │ sample data  │  │   │
//! │  │   │ Arc<Vec<T>>   │◄───│ inventory.rs  │    │ AppConfig    │  │   │
//! │  │   │ revision      │    │ customer.rs   │    │ from_env     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mobilefixer-core: status table, approval rules, scoping, forms        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `DataStore` and its snapshots
//! - [`repository`] - Mutations and lookups per collection
//! - [`view`] - Role-scoped dashboard and lists
//! - [`seed`] - Fixed sample data
//! - [`config`] - `MOBILEFIXER_*` configuration
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use mobilefixer_core::RepairStatus;
//! use mobilefixer_store::DataStore;
//!
//! let mut store = DataStore::seeded();
//! let owner = store.user_by_email("owner@mobileshop.com").cloned().unwrap();
//!
//! store.update_repair_status("repair-1", RepairStatus::Repaired, None).unwrap();
//! let outcome = store.approve_inventory_request("inv-2", "req-1", &owner).unwrap();
//! assert_eq!(outcome.quantity, 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod repository;
pub mod seed;
pub mod store;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::AppConfig;
pub use error::{StoreError, StoreResult};
pub use repository::IntakeOutcome;
pub use store::{DataStore, Snapshot};
pub use view::DashboardView;
