//! # Inventory Repository
//!
//! Stock items, direct quantity changes, and the update-request review
//! workflow.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Staff: add_inventory_update_request(inv-2, -2, "Used for repair")      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  req-7 pending ─────────────┬───────────────────────┐                   │
//! │                             │                       │                   │
//! │  Owner: approve             ▼                       ▼  Owner: deny      │
//! │                       approved                  denied                  │
//! │                       qty 8 → 6                 qty unchanged           │
//! │                                                                         │
//! │  Reviewing again → AlreadyReviewed, nothing changes                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use mobilefixer_core::approval::{apply_quantity_change, clamp_quantity};
use mobilefixer_core::{
    ApprovalOutcome, InventoryItem, InventoryUpdateRequest, NewInventoryItem, NewUpdateRequest,
    User,
};

use crate::error::{StoreError, StoreResult};
use crate::store::{new_id, DataStore};

impl DataStore {
    /// Adds a stock item. Newest first.
    ///
    /// The supplier's phone is copied onto the item.
    ///
    /// ## Errors
    /// `NotFound` for an unknown store or supplier.
    pub fn add_inventory_item(&mut self, new: NewInventoryItem) -> StoreResult<InventoryItem> {
        if self.store(&new.store_id).is_none() {
            warn!(store_id = %new.store_id, "Rejected item for unknown store");
            return Err(StoreError::not_found("Store", new.store_id));
        }

        let supplier_phone = match &new.supplier_id {
            Some(supplier_id) => Some(
                self.supplier(supplier_id)
                    .map(|supplier| supplier.phone.clone())
                    .ok_or_else(|| StoreError::not_found("Supplier", supplier_id.clone()))?,
            ),
            None => None,
        };

        let item = InventoryItem {
            id: new_id("inv"),
            store_id: new.store_id,
            name: new.name,
            mobile_company: new.mobile_company,
            spare_part_type: new.spare_part_type,
            spare_part_model: new.spare_part_model,
            supplier_id: new.supplier_id,
            supplier_phone,
            purchase_date: new.purchase_date,
            quantity: new.quantity,
            reorder_level: new.reorder_level,
            buy_price: new.buy_price,
            wholesale_price: new.wholesale_price,
            retail_price: new.retail_price,
            category: new.category,
            requested_updates: Vec::new(),
        };

        Arc::make_mut(&mut self.inventory).insert(0, item.clone());
        self.touch();

        debug!(id = %item.id, name = %item.name, quantity = item.quantity, "Added inventory item");
        Ok(item)
    }

    /// Sets the quantity outright, clamping negatives to zero.
    ///
    /// Returns the stored quantity.
    pub fn update_inventory_quantity(&mut self, id: &str, quantity: i64) -> StoreResult<u32> {
        let index = self.inventory_index(id)?;
        let stored = clamp_quantity(quantity);

        Arc::make_mut(&mut self.inventory)[index].quantity = stored;
        self.touch();

        debug!(id, requested = quantity, stored, "Set inventory quantity");
        Ok(stored)
    }

    /// The owner's direct ±N adjustment, clamped at zero.
    ///
    /// Returns the stored quantity.
    pub fn adjust_inventory_quantity(&mut self, id: &str, delta: i64) -> StoreResult<u32> {
        let index = self.inventory_index(id)?;
        let stored = apply_quantity_change(self.inventory[index].quantity, delta);

        Arc::make_mut(&mut self.inventory)[index].quantity = stored;
        self.touch();

        debug!(id, delta, stored, "Adjusted inventory quantity");
        Ok(stored)
    }

    /// Appends a pending update request to an item.
    ///
    /// ## Errors
    /// - `NotFound` for an unknown item
    /// - `RequestAlreadyPending` while another request awaits review
    pub fn add_inventory_update_request(
        &mut self,
        item_id: &str,
        new: NewUpdateRequest,
    ) -> StoreResult<InventoryUpdateRequest> {
        let index = self.inventory_index(item_id)?;

        let request = InventoryUpdateRequest::pending(
            new_id("req"),
            new.requested_by,
            new.quantity_change,
            new.reason,
            Utc::now(),
        );

        let mut item = self.inventory[index].clone();
        item.submit_request(request.clone()).inspect_err(|err| {
            warn!(item_id, %err, "Rejected update request");
        })?;

        Arc::make_mut(&mut self.inventory)[index] = item;
        self.touch();

        debug!(
            item_id,
            request_id = %request.id,
            change = request.quantity_change,
            requested_by = %request.requested_by,
            "Added inventory update request"
        );
        Ok(request)
    }

    /// Approves a pending request and applies its change, clamped at zero.
    ///
    /// ## Errors
    /// - `NotFound` for an unknown item or request
    /// - `PermissionDenied` unless `reviewer` is an active owner
    /// - `AlreadyReviewed` for an approved or denied request
    pub fn approve_inventory_request(
        &mut self,
        item_id: &str,
        request_id: &str,
        reviewer: &User,
    ) -> StoreResult<ApprovalOutcome> {
        let index = self.inventory_index(item_id)?;

        let mut item = self.inventory[index].clone();
        let outcome = item
            .approve_request(request_id, reviewer, Utc::now())
            .inspect_err(|err| warn!(item_id, request_id, %err, "Rejected approval"))?;

        Arc::make_mut(&mut self.inventory)[index] = item;
        self.touch();

        if outcome.was_clamped() {
            warn!(
                item_id,
                request_id,
                requested = outcome.requested_change,
                applied = outcome.applied_change,
                "Approved change was clamped at zero stock"
            );
        }
        debug!(item_id, request_id, quantity = outcome.quantity, reviewer = %reviewer.id, "Approved update request");
        Ok(outcome)
    }

    /// Denies a pending request. The quantity is left alone.
    ///
    /// Same errors as [`DataStore::approve_inventory_request`].
    pub fn deny_inventory_request(
        &mut self,
        item_id: &str,
        request_id: &str,
        reviewer: &User,
    ) -> StoreResult<()> {
        let index = self.inventory_index(item_id)?;

        let mut item = self.inventory[index].clone();
        item.deny_request(request_id, reviewer, Utc::now())
            .inspect_err(|err| warn!(item_id, request_id, %err, "Rejected denial"))?;

        Arc::make_mut(&mut self.inventory)[index] = item;
        self.touch();

        debug!(item_id, request_id, reviewer = %reviewer.id, "Denied update request");
        Ok(())
    }

    pub fn inventory_item(&self, id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == id)
    }

    fn inventory_index(&self, id: &str) -> StoreResult<usize> {
        self.inventory
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found("InventoryItem", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mobilefixer_core::{CoreError, Money, NewSupplier, RequestStatus};

    fn owner(store: &DataStore) -> User {
        store.user_by_email("owner@mobileshop.com").cloned().unwrap()
    }

    fn staff(store: &DataStore) -> User {
        store.user_by_email("staff@mobileshop.com").cloned().unwrap()
    }

    fn change(by: &str, quantity_change: i64) -> NewUpdateRequest {
        NewUpdateRequest {
            requested_by: by.to_string(),
            quantity_change,
            reason: "Used for repair".to_string(),
        }
    }

    fn quantity(store: &DataStore, id: &str) -> u32 {
        store.inventory_item(id).unwrap().quantity
    }

    fn new_item(store_id: &str, supplier_id: Option<String>) -> NewInventoryItem {
        NewInventoryItem {
            store_id: store_id.to_string(),
            name: "Apple iPhone 15 Battery".to_string(),
            mobile_company: "Apple".to_string(),
            spare_part_type: "Battery".to_string(),
            spare_part_model: "iPhone 15".to_string(),
            supplier_id,
            purchase_date: Some(Utc::now()),
            quantity: 6,
            reorder_level: 2,
            buy_price: Money::from_minor(3000),
            wholesale_price: Money::from_minor(3500),
            retail_price: Money::from_minor(5500),
            category: "Batteries".to_string(),
        }
    }

    #[test]
    fn test_add_item_caches_supplier_phone() {
        let mut store = DataStore::seeded();
        let supplier = store
            .add_supplier(NewSupplier {
                name: "PartsHub".to_string(),
                phone: "(555) 200-3000".to_string(),
                address: None,
            })
            .unwrap();

        let item = store
            .add_inventory_item(new_item("store-2", Some(supplier.id.clone())))
            .unwrap();

        assert_eq!(item.supplier_phone.as_deref(), Some("(555) 200-3000"));
        assert_eq!(store.inventory()[0].id, item.id);
        assert!(item.requested_updates.is_empty());
    }

    #[test]
    fn test_add_item_rejects_unknown_references() {
        let mut store = DataStore::seeded();

        assert_eq!(
            store.add_inventory_item(new_item("store-7", None)).unwrap_err(),
            StoreError::not_found("Store", "store-7")
        );
        assert_eq!(
            store
                .add_inventory_item(new_item("store-1", Some("sup-x".to_string())))
                .unwrap_err(),
            StoreError::not_found("Supplier", "sup-x")
        );
        assert_eq!(store.inventory().len(), 3);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_update_quantity_clamps_at_zero() {
        let mut store = DataStore::seeded();

        assert_eq!(store.update_inventory_quantity("inv-1", -4).unwrap(), 0);
        assert_eq!(quantity(&store, "inv-1"), 0);
        assert_eq!(store.update_inventory_quantity("inv-1", 40).unwrap(), 40);

        assert!(store.update_inventory_quantity("inv-404", 1).unwrap_err().is_not_found());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_adjust_quantity() {
        let mut store = DataStore::seeded();

        assert_eq!(store.adjust_inventory_quantity("inv-3", 1).unwrap(), 4);
        assert_eq!(store.adjust_inventory_quantity("inv-3", -10).unwrap(), 0);
        assert_eq!(quantity(&store, "inv-3"), 0);
    }

    #[test]
    fn test_approve_applies_change() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        let request = store.add_inventory_update_request("inv-1", change("2", -5)).unwrap();
        store.update_inventory_quantity("inv-1", 8).unwrap();

        let outcome = store
            .approve_inventory_request("inv-1", &request.id, &owner)
            .unwrap();

        assert_eq!(outcome.quantity, 3);
        assert!(!outcome.was_clamped());
        assert_eq!(quantity(&store, "inv-1"), 3);

        let stored = store.inventory_item("inv-1").unwrap().request(&request.id).unwrap();
        assert_eq!(stored.status, RequestStatus::Approved);
        assert_eq!(stored.reviewed_by.as_deref(), Some("1"));
        assert!(stored.reviewed_at.is_some());
    }

    #[test]
    fn test_approve_clamps_at_zero() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        let request = store.add_inventory_update_request("inv-3", change("3", -5)).unwrap();
        let outcome = store
            .approve_inventory_request("inv-3", &request.id, &owner)
            .unwrap();

        assert_eq!(outcome.quantity, 0);
        assert_eq!(outcome.requested_change, -5);
        assert_eq!(outcome.applied_change, -3);
        assert_eq!(quantity(&store, "inv-3"), 0);
    }

    #[test]
    fn test_second_approval_does_not_reapply() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        store.approve_inventory_request("inv-2", "req-1", &owner).unwrap();
        assert_eq!(quantity(&store, "inv-2"), 6);
        let revision = store.revision();

        let err = store
            .approve_inventory_request("inv-2", "req-1", &owner)
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Core(CoreError::AlreadyReviewed {
                request_id: "req-1".to_string(),
                status: RequestStatus::Approved,
            })
        );
        assert_eq!(quantity(&store, "inv-2"), 6);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_deny_keeps_quantity_and_first_stamp() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        store.deny_inventory_request("inv-2", "req-1", &owner).unwrap();
        let first = store.inventory_item("inv-2").unwrap().request("req-1").cloned().unwrap();
        assert_eq!(first.status, RequestStatus::Denied);
        assert_eq!(quantity(&store, "inv-2"), 8);

        let before = store.inventory();
        assert!(store.deny_inventory_request("inv-2", "req-1", &owner).is_err());
        let second = store.inventory_item("inv-2").unwrap().request("req-1").cloned().unwrap();

        assert_eq!(second, first);
        assert!(Arc::ptr_eq(&before, &store.inventory()));
        assert_eq!(quantity(&store, "inv-2"), 8);
    }

    #[test]
    fn test_staff_cannot_review() {
        let mut store = DataStore::seeded();
        let staff = staff(&store);

        let err = store
            .approve_inventory_request("inv-2", "req-1", &staff)
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::PermissionDenied { .. })));
        assert!(store.deny_inventory_request("inv-2", "req-1", &staff).is_err());
        assert_eq!(quantity(&store, "inv-2"), 8);
        assert!(store.inventory_item("inv-2").unwrap().has_pending_request());
    }

    #[test]
    fn test_unknown_item_or_request() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        assert!(store
            .approve_inventory_request("inv-404", "req-1", &owner)
            .unwrap_err()
            .is_not_found());
        assert!(store
            .deny_inventory_request("inv-2", "req-404", &owner)
            .unwrap_err()
            .is_not_found());
        assert!(store
            .add_inventory_update_request("inv-404", change("2", 1))
            .unwrap_err()
            .is_not_found());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_one_pending_request_per_item() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        let err = store
            .add_inventory_update_request("inv-2", change("2", 4))
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Core(CoreError::RequestAlreadyPending {
                item_id: "inv-2".to_string()
            })
        );

        store.deny_inventory_request("inv-2", "req-1", &owner).unwrap();
        let request = store
            .add_inventory_update_request("inv-2", change("2", 4))
            .unwrap();

        let item = store.inventory_item("inv-2").unwrap();
        assert_eq!(item.requested_updates.len(), 2);
        assert_eq!(item.requested_updates[1].id, request.id);
        assert_eq!(item.pending_request().map(|r| r.id.as_str()), Some(request.id.as_str()));
    }

    #[test]
    fn test_quantity_never_negative_after_any_mutation() {
        let mut store = DataStore::seeded();
        let owner = owner(&store);

        store.update_inventory_quantity("inv-1", -100).unwrap();
        store.adjust_inventory_quantity("inv-2", -100).unwrap();
        let request = store
            .add_inventory_update_request("inv-3", change("3", -10_000))
            .unwrap();
        store
            .approve_inventory_request("inv-3", &request.id, &owner)
            .unwrap();

        assert!(store.inventory().iter().all(|item| item.quantity == 0));
    }
}
