//! # Supplier Repository

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use mobilefixer_core::{NewSupplier, Supplier};

use crate::error::StoreResult;
use crate::store::{new_id, DataStore};

impl DataStore {
    /// Registers a supplier. Newest first.
    pub fn add_supplier(&mut self, new: NewSupplier) -> StoreResult<Supplier> {
        let supplier = Supplier {
            id: new_id("sup"),
            name: new.name,
            phone: new.phone,
            address: new.address,
            created_at: Utc::now(),
        };

        Arc::make_mut(&mut self.suppliers).insert(0, supplier.clone());
        self.touch();

        debug!(id = %supplier.id, name = %supplier.name, "Added supplier");
        Ok(supplier)
    }

    pub fn supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|supplier| supplier.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_supplier_prepends() {
        let mut store = DataStore::empty();
        let first = store
            .add_supplier(NewSupplier {
                name: "PartsHub".to_string(),
                phone: "(555) 200-3000".to_string(),
                address: None,
            })
            .unwrap();
        let second = store
            .add_supplier(NewSupplier {
                name: "Screen World".to_string(),
                phone: "(555) 200-4000".to_string(),
                address: Some("12 Market Road".to_string()),
            })
            .unwrap();

        let suppliers = store.suppliers();
        assert_eq!(suppliers[0].id, second.id);
        assert_eq!(suppliers[1].id, first.id);
        assert_eq!(store.supplier(&first.id).map(|s| s.name.as_str()), Some("PartsHub"));
        assert_eq!(store.revision(), 2);
    }
}
