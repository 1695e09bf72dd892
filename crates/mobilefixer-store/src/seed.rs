//! # Sample Data
//!
//! Two stores, three parts, two customers with one repair each, and the
//! demo accounts from the login screen.
//!
//! ```text
//! store-1  Downtown Mobile Repair      store-2  Mall Mobile Center
//! ├── inv-1 iPhone 14 Screen    (15)   ├── inv-3 iPhone 13 Camera (3, low)
//! ├── inv-2 Galaxy S23 Battery  (8)    └── repair-2 Bob, repaired
//! │   └── req-1 -2 pending
//! └── repair-1 Alice, in-progress
//! ```
//!
//! Fixed ids are kept so demos and tests can address records directly.

use chrono::{DateTime, TimeZone, Utc};

use mobilefixer_core::{
    Customer, InventoryItem, InventoryUpdateRequest, Money, Repair, RepairStatus, Store,
    Supplier, User, UserRole, SAMPLE_OWNER_ID,
};

/// Midnight UTC on the given day.
fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn sample_stores() -> Vec<Store> {
    vec![
        Store {
            id: "store-1".to_string(),
            name: "Downtown Mobile Repair".to_string(),
            location: "123 Main St, Downtown".to_string(),
            owner_id: SAMPLE_OWNER_ID.to_string(),
            phone: Some("(555) 123-4567".to_string()),
            created_at: date(2024, 1, 15),
        },
        Store {
            id: "store-2".to_string(),
            name: "Mall Mobile Center".to_string(),
            location: "456 Shopping Mall, Suite 12".to_string(),
            owner_id: SAMPLE_OWNER_ID.to_string(),
            phone: Some("(555) 987-6543".to_string()),
            created_at: date(2024, 2, 20),
        },
    ]
}

/// No suppliers are registered up front.
pub fn sample_suppliers() -> Vec<Supplier> {
    Vec::new()
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    let part = |id: &str,
                store_id: &str,
                name: &str,
                company: &str,
                part_type: &str,
                model: &str,
                quantity: u32,
                reorder_level: u32,
                retail_minor: i64,
                category: &str| InventoryItem {
        id: id.to_string(),
        store_id: store_id.to_string(),
        name: name.to_string(),
        mobile_company: company.to_string(),
        spare_part_type: part_type.to_string(),
        spare_part_model: model.to_string(),
        supplier_id: None,
        supplier_phone: None,
        purchase_date: None,
        quantity,
        reorder_level,
        buy_price: Money::zero(),
        wholesale_price: Money::zero(),
        retail_price: Money::from_minor(retail_minor),
        category: category.to_string(),
        requested_updates: Vec::new(),
    };

    let mut battery = part(
        "inv-2",
        "store-1",
        "Samsung Galaxy S23 Battery",
        "Samsung",
        "Battery",
        "Galaxy S23",
        8,
        10,
        4599,
        "Batteries",
    );
    battery.requested_updates.push(InventoryUpdateRequest::pending(
        "req-1",
        "2",
        -2,
        "Used for repair #R001",
        Utc::now(),
    ));

    vec![
        part(
            "inv-1",
            "store-1",
            "iPhone 14 Screen",
            "Apple",
            "Screen",
            "iPhone 14",
            15,
            5,
            8999,
            "Screens",
        ),
        battery,
        part(
            "inv-3",
            "store-2",
            "iPhone 13 Camera Module",
            "Apple",
            "Camera Module",
            "iPhone 13",
            3,
            5,
            12599,
            "Cameras",
        ),
    ]
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust-1".to_string(),
            name: "Alice Brown".to_string(),
            phone: "(555) 111-2222".to_string(),
            email: Some("alice@email.com".to_string()),
            address: Some("789 Oak Street".to_string()),
            repair_history: vec!["repair-1".to_string()],
            created_at: date(2024, 6, 1),
        },
        Customer {
            id: "cust-2".to_string(),
            name: "Bob Johnson".to_string(),
            phone: "(555) 333-4444".to_string(),
            email: None,
            address: None,
            repair_history: vec!["repair-2".to_string()],
            created_at: date(2024, 6, 10),
        },
    ]
}

pub fn sample_repairs() -> Vec<Repair> {
    vec![
        Repair {
            id: "repair-1".to_string(),
            store_id: "store-1".to_string(),
            customer_phone: "(555) 111-2222".to_string(),
            phone_company: "Apple".to_string(),
            phone_model: "iPhone 14 Pro".to_string(),
            imei: None,
            issues: vec!["Cracked screen".to_string()],
            status: RepairStatus::InProgress,
            received_date: date(2024, 6, 15),
            completed_date: None,
            delivery_date: None,
            assigned_staff_id: "2".to_string(),
            bill_amount: Money::from_minor(29999),
            estimated_completion: Some(date(2024, 6, 18)),
            notes: Some("Waiting for customer approval on additional frame repair".to_string()),
        },
        Repair {
            id: "repair-2".to_string(),
            store_id: "store-2".to_string(),
            customer_phone: "(555) 333-4444".to_string(),
            phone_company: "Samsung".to_string(),
            phone_model: "Samsung Galaxy S23".to_string(),
            imei: None,
            issues: vec!["Battery not charging".to_string()],
            status: RepairStatus::Repaired,
            received_date: date(2024, 6, 12),
            completed_date: Some(date(2024, 6, 14)),
            delivery_date: None,
            assigned_staff_id: "3".to_string(),
            bill_amount: Money::from_minor(8999),
            estimated_completion: None,
            notes: None,
        },
    ]
}

/// Demo accounts offered on the login screen.
pub fn sample_users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role: UserRole, store_id: Option<&str>| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        store_id: store_id.map(str::to_string),
        is_active: true,
    };

    vec![
        user(SAMPLE_OWNER_ID, "Shop Owner", "owner@mobileshop.com", UserRole::Owner, None),
        user("2", "Downtown Staff", "staff@mobileshop.com", UserRole::Staff, Some("store-1")),
        user("3", "Mall Staff", "staff2@mobileshop.com", UserRole::Staff, Some("store-2")),
    ]
}
