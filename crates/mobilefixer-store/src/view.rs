//! # Role-Scoped Views
//!
//! What each screen shows for the signed-in user, derived from the current
//! snapshots. Nothing here mutates the store.

use serde::Serialize;

use mobilefixer_core::dashboard::{recent_repairs, CustomerSummary, DashboardStats};
use mobilefixer_core::query::{pending_requests, PendingRequest, Scope};
use mobilefixer_core::{InventoryItem, Repair, User};

use crate::store::DataStore;

/// Everything on the dashboard tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub recent_repairs: Vec<Repair>,
    pub low_stock: Vec<InventoryItem>,
    /// Only filled for users who can review requests.
    pub pending_requests: Vec<PendingRequest>,
}

impl DataStore {
    /// Repairs visible to `user`, in collection order.
    pub fn repairs_for(&self, user: &User) -> Vec<Repair> {
        Scope::for_user(user)
            .apply(self.repairs.as_slice())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Inventory visible to `user`, in collection order.
    pub fn inventory_for(&self, user: &User) -> Vec<InventoryItem> {
        Scope::for_user(user)
            .apply(self.inventory.as_slice())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn dashboard(&self, user: &User, recent_limit: usize) -> DashboardView {
        let scope = Scope::for_user(user);
        let repairs = scope.apply(self.repairs.as_slice());
        let inventory = scope.apply(self.inventory.as_slice());

        let pending_requests = if user.role.is_elevated() {
            pending_requests(inventory.iter().copied())
        } else {
            Vec::new()
        };

        DashboardView {
            stats: DashboardStats::compute(&repairs, &inventory, &self.customers),
            recent_repairs: recent_repairs(&repairs, recent_limit)
                .into_iter()
                .cloned()
                .collect(),
            low_stock: inventory
                .iter()
                .filter(|item| item.is_low_stock())
                .map(|item| (*item).clone())
                .collect(),
            pending_requests,
        }
    }

    /// One row per customer for the customers tab.
    pub fn customer_summaries(&self) -> Vec<CustomerSummary> {
        self.customers
            .iter()
            .map(|customer| CustomerSummary::build(customer, &self.repairs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobilefixer_core::{Money, RepairStatus};

    fn user(store: &DataStore, email: &str) -> User {
        store.user_by_email(email).cloned().unwrap()
    }

    #[test]
    fn test_staff_scope_preserves_order() {
        let mut store = DataStore::seeded();
        let staff = user(&store, "staff@mobileshop.com");
        let intake = mobilefixer_core::NewRepair {
            store_id: "store-1".to_string(),
            customer_phone: "(555) 333-4444".to_string(),
            phone_company: "Apple".to_string(),
            phone_model: "iPhone 12".to_string(),
            imei: None,
            issues: vec!["No sound".to_string()],
            status: RepairStatus::Pending,
            received_date: chrono::Utc::now(),
            assigned_staff_id: "2".to_string(),
            bill_amount: Money::from_minor(1500),
            estimated_completion: None,
            notes: None,
        };
        let added = store.add_repair(intake).unwrap();

        let visible = store.repairs_for(&staff);
        let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, [added.id.as_str(), "repair-1"]);
        assert!(visible.iter().all(|r| r.store_id == "store-1"));

        let owner = user(&store, "owner@mobileshop.com");
        assert_eq!(store.repairs_for(&owner).len(), 3);
    }

    #[test]
    fn test_owner_dashboard() {
        let store = DataStore::seeded();
        let owner = user(&store, "owner@mobileshop.com");

        let view = store.dashboard(&owner, 5);
        assert_eq!(view.stats.active_repairs.value, 1);
        assert_eq!(view.stats.pending_delivery.value, 1);
        assert_eq!(view.stats.low_stock_items.value, 2);
        assert_eq!(view.stats.total_customers.value, 2);
        assert_eq!(view.recent_repairs[0].id, "repair-1");
        assert_eq!(view.pending_requests.len(), 1);
        assert_eq!(view.pending_requests[0].item_id, "inv-2");
    }

    #[test]
    fn test_staff_dashboard_is_scoped() {
        let store = DataStore::seeded();
        let staff = user(&store, "staff2@mobileshop.com");

        let view = store.dashboard(&staff, 5);
        assert_eq!(view.stats.active_repairs.total, 1);
        assert_eq!(view.stats.pending_delivery.value, 1);
        assert_eq!(view.low_stock.len(), 1);
        assert_eq!(view.low_stock[0].id, "inv-3");
        assert!(view.pending_requests.is_empty());
        assert_eq!(store.inventory_for(&staff).len(), 1);
    }

    #[test]
    fn test_inactive_owner_sees_nothing() {
        let store = DataStore::seeded();
        let mut owner = user(&store, "owner@mobileshop.com");
        owner.is_active = false;

        assert!(store.repairs_for(&owner).is_empty());
        assert!(store.inventory_for(&owner).is_empty());
        let view = store.dashboard(&owner, 5);
        assert!(view.recent_repairs.is_empty());
        assert!(view.pending_requests.is_empty());
    }

    #[test]
    fn test_customer_summaries() {
        let store = DataStore::seeded();
        let summaries = store.customer_summaries();

        let alice = summaries.iter().find(|s| s.customer_id == "cust-1").unwrap();
        assert_eq!(alice.repair_count, 1);
        assert_eq!(alice.total_spent, Money::from_minor(29999));
        assert_eq!(alice.last_repair_id.as_deref(), Some("repair-1"));
    }

    #[test]
    fn test_customer_total_saturates_on_huge_bills() {
        let mut store = DataStore::seeded();
        for _ in 0..2 {
            store
                .add_repair(mobilefixer_core::NewRepair {
                    store_id: "store-1".to_string(),
                    customer_phone: "(555) 111-2222".to_string(),
                    phone_company: "Apple".to_string(),
                    phone_model: "iPhone 15".to_string(),
                    imei: None,
                    issues: vec!["Water damage".to_string()],
                    status: RepairStatus::Pending,
                    received_date: chrono::Utc::now(),
                    assigned_staff_id: "2".to_string(),
                    bill_amount: Money::from_minor(9_000_000_000_000_000_000),
                    estimated_completion: None,
                    notes: None,
                })
                .unwrap();
        }

        let summaries = store.customer_summaries();
        let alice = summaries.iter().find(|s| s.customer_id == "cust-1").unwrap();
        assert_eq!(alice.repair_count, 3);
        assert_eq!(alice.total_spent.minor(), i64::MAX);
    }
}
