//! # Repository Module
//!
//! Mutation and lookup operations on [`DataStore`](crate::DataStore),
//! grouped by collection.
//!
//! ## Operation Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Every Mutation                                       │
//! │                                                                         │
//! │  1. Locate the target           → StoreError::NotFound if absent       │
//! │  2. Check references            → store / customer / supplier exist    │
//! │  3. Apply rules to a CLONE      → CoreError on violation               │
//! │  4. Arc::make_mut + write back  → readers keep their old snapshot      │
//! │  5. revision += 1, debug! log                                          │
//! │                                                                         │
//! │  Steps 1-3 never write, so a failure leaves the store untouched.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod customer;
pub mod inventory;
pub mod repair;
pub mod supplier;

pub use repair::IntakeOutcome;
