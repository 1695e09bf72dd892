//! # Dashboard & Aggregation
//!
//! Totals shown on the dashboard and the customers screen. Inputs are
//! expected to be already role-scoped (see [`crate::query::Scope`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::status::CoarseStatus;
use crate::types::{Customer, InventoryItem, Repair};

/// One dashboard tile: a count out of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatCount {
    pub value: usize,
    pub total: usize,
}

/// The four dashboard tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    /// Repairs being worked on.
    pub active_repairs: StatCount,
    /// Items at or below their reorder level.
    pub low_stock_items: StatCount,
    pub total_customers: StatCount,
    /// Repaired, waiting for pickup.
    pub pending_delivery: StatCount,
}

impl DashboardStats {
    pub fn compute<'a>(
        repairs: &[&'a Repair],
        inventory: &[&'a InventoryItem],
        customers: &[Customer],
    ) -> Self {
        let count_coarse = |wanted: CoarseStatus| {
            repairs
                .iter()
                .filter(|r| r.coarse_status() == Some(wanted))
                .count()
        };

        DashboardStats {
            active_repairs: StatCount {
                value: count_coarse(CoarseStatus::InProgress),
                total: repairs.len(),
            },
            low_stock_items: StatCount {
                value: inventory.iter().filter(|i| i.is_low_stock()).count(),
                total: inventory.len(),
            },
            total_customers: StatCount {
                value: customers.len(),
                total: customers.len(),
            },
            pending_delivery: StatCount {
                value: count_coarse(CoarseStatus::Completed),
                total: repairs.len(),
            },
        }
    }
}

/// Most recently received repairs, newest first.
pub fn recent_repairs<'a>(repairs: &[&'a Repair], limit: usize) -> Vec<&'a Repair> {
    let mut sorted = repairs.to_vec();
    sorted.sort_by(|a, b| b.received_date.cmp(&a.received_date));
    sorted.truncate(limit);
    sorted
}

// =============================================================================
// Customer Aggregation
// =============================================================================

/// Repairs whose customer reference is this customer's phone.
pub fn customer_repairs<'a>(customer: &Customer, repairs: &'a [Repair]) -> Vec<&'a Repair> {
    repairs
        .iter()
        .filter(|r| r.customer_phone == customer.phone)
        .collect()
}

/// Sum of bill amounts over the customer's repairs.
pub fn total_spent(customer: &Customer, repairs: &[Repair]) -> Money {
    customer_repairs(customer, repairs)
        .into_iter()
        .map(|r| r.bill_amount)
        .sum()
}

/// The customer's repair with the latest received date.
pub fn last_repair<'a>(customer: &Customer, repairs: &'a [Repair]) -> Option<&'a Repair> {
    customer_repairs(customer, repairs)
        .into_iter()
        .max_by_key(|r| r.received_date)
}

/// A row on the customers screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub name: String,
    pub phone: String,
    pub repair_count: usize,
    pub total_spent: Money,
    pub last_repair_id: Option<String>,
    #[ts(as = "Option<String>")]
    pub last_repair_date: Option<DateTime<Utc>>,
}

impl CustomerSummary {
    pub fn build(customer: &Customer, repairs: &[Repair]) -> Self {
        let own = customer_repairs(customer, repairs);
        let last = own.iter().copied().max_by_key(|r| r.received_date);

        CustomerSummary {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            repair_count: own.len(),
            total_spent: own.iter().map(|r| r.bill_amount).sum(),
            last_repair_id: last.map(|r| r.id.clone()),
            last_repair_date: last.map(|r| r.received_date),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
