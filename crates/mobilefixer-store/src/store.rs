//! # Data Store
//!
//! The single owner of every entity collection.
//!
//! ## Copy-on-Write Snapshots
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Mutation Works                                 │
//! │                                                                         │
//! │  View holds:   repairs() ──► Arc<Vec<Repair>> (rev 7)                  │
//! │                                                                         │
//! │  store.update_repair_status("repair-1", Repaired, None)                │
//! │       │                                                                 │
//! │       ├── lookup + rule checks on a cloned record                      │
//! │       │     └── any failure → Err, nothing written, rev stays 7        │
//! │       │                                                                 │
//! │       ├── Arc::make_mut(&mut self.repairs)                             │
//! │       │     └── Vec is shared with the view → cloned first             │
//! │       │                                                                 │
//! │       └── write record, rev 7 → 8                                       │
//! │                                                                         │
//! │  View still holds its rev-7 snapshot, unchanged.                        │
//! │  Next render calls repairs() again and sees rev 8.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mutation operations live in [`crate::repository`], one file per
//! collection.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mobilefixer_core::{Customer, InventoryItem, Repair, Store, Supplier, User};

use crate::config::AppConfig;
use crate::seed;

/// An immutable view of one collection at a point in time.
pub type Snapshot<T> = Arc<Vec<T>>;

/// In-memory store for stores, suppliers, customers, inventory, repairs and
/// the users supplied by the auth collaborator.
///
/// Newest records come first in every collection except users.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub(crate) stores: Snapshot<Store>,
    pub(crate) suppliers: Snapshot<Supplier>,
    pub(crate) customers: Snapshot<Customer>,
    pub(crate) inventory: Snapshot<InventoryItem>,
    pub(crate) repairs: Snapshot<Repair>,
    pub(crate) users: Snapshot<User>,
    revision: u64,
}

impl DataStore {
    /// A store with no records at all.
    pub fn empty() -> Self {
        DataStore::default()
    }

    /// A store holding the fixed sample data.
    pub fn seeded() -> Self {
        let store = DataStore {
            stores: Arc::new(seed::sample_stores()),
            suppliers: Arc::new(seed::sample_suppliers()),
            customers: Arc::new(seed::sample_customers()),
            inventory: Arc::new(seed::sample_inventory()),
            repairs: Arc::new(seed::sample_repairs()),
            users: Arc::new(seed::sample_users()),
            revision: 0,
        };

        info!(
            stores = store.stores.len(),
            inventory = store.inventory.len(),
            repairs = store.repairs.len(),
            customers = store.customers.len(),
            "Seeded data store with sample data"
        );

        store
    }

    /// Seeded or empty, per `MOBILEFIXER_SEED_SAMPLE_DATA`.
    pub fn from_config(config: &AppConfig) -> Self {
        if config.seed_sample_data {
            DataStore::seeded()
        } else {
            info!("Starting with an empty data store");
            DataStore::empty()
        }
    }

    /// Registers the users the auth collaborator knows about.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = Arc::new(users);
        self
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    pub fn stores(&self) -> Snapshot<Store> {
        Arc::clone(&self.stores)
    }

    pub fn suppliers(&self) -> Snapshot<Supplier> {
        Arc::clone(&self.suppliers)
    }

    pub fn customers(&self) -> Snapshot<Customer> {
        Arc::clone(&self.customers)
    }

    pub fn inventory(&self) -> Snapshot<InventoryItem> {
        Arc::clone(&self.inventory)
    }

    pub fn repairs(&self) -> Snapshot<Repair> {
        Arc::clone(&self.repairs)
    }

    pub fn users(&self) -> Snapshot<User> {
        Arc::clone(&self.users)
    }

    /// Bumped once per successful mutation.
    ///
    /// Views compare it with the revision they last rendered to decide
    /// whether to re-derive.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Case-insensitive, as typed on the login form.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }
}

/// `"repair"` → `"repair-5f0c…"`.
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

// =============================================================================
// Unit Tests
// =============================================================================
