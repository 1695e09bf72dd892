//! # Customer Repository
//!
//! Customers are identified by phone number. Each phone is registered once.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use mobilefixer_core::{Customer, NewCustomer};

use crate::error::{StoreError, StoreResult};
use crate::store::{new_id, DataStore};

impl DataStore {
    /// Registers a customer and returns the stored record.
    ///
    /// ## Errors
    /// `DuplicateCustomer` when the phone is already registered.
    pub fn add_customer(&mut self, new: NewCustomer) -> StoreResult<Customer> {
        if self.find_customer_by_phone(&new.phone).is_some() {
            warn!(phone = %new.phone, "Rejected duplicate customer");
            return Err(StoreError::DuplicateCustomer { phone: new.phone });
        }

        let customer = Customer {
            id: new_id("cust"),
            name: new.name,
            phone: new.phone,
            email: new.email,
            address: new.address,
            repair_history: Vec::new(),
            created_at: Utc::now(),
        };

        Arc::make_mut(&mut self.customers).insert(0, customer.clone());
        self.touch();

        debug!(id = %customer.id, phone = %customer.phone, "Added customer");
        Ok(customer)
    }

    /// Exact string match on the phone number.
    pub fn find_customer_by_phone(&self, phone: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.phone == phone)
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_customer(phone: &str) -> NewCustomer {
        NewCustomer {
            name: "Carol White".to_string(),
            phone: phone.to_string(),
            email: None,
            address: None,
        }
    }

    #[test]
    fn test_add_then_find_returns_same_record() {
        let mut store = DataStore::seeded();
        let added = store.add_customer(new_customer("555-0001")).unwrap();

        let found = store.find_customer_by_phone("555-0001").unwrap();
        assert_eq!(found, &added);
        assert!(found.repair_history.is_empty());
        assert!(added.id.starts_with("cust-"));
        assert_eq!(store.customers()[0].id, added.id);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_find_is_exact_match() {
        let mut store = DataStore::empty();
        store.add_customer(new_customer("555-0001")).unwrap();

        assert!(store.find_customer_by_phone("555-0001").is_some());
        assert!(store.find_customer_by_phone("5550001").is_none());
        assert!(store.find_customer_by_phone("555-000").is_none());
        assert!(store.find_customer_by_phone("").is_none());
    }

    #[test]
    fn test_duplicate_phone_rejected() {
        let mut store = DataStore::seeded();
        let before = store.customers();

        let err = store.add_customer(new_customer("(555) 111-2222")).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateCustomer {
                phone: "(555) 111-2222".to_string()
            }
        );
        assert!(Arc::ptr_eq(&before, &store.customers()));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = DataStore::seeded();
        assert_eq!(store.customer("cust-2").map(|c| c.name.as_str()), Some("Bob Johnson"));
        assert!(store.customer("cust-9").is_none());
    }
}
