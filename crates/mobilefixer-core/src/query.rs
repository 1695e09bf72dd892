//! # Query & Filter Helpers
//!
//! Pure read-time derivations over store snapshots: role scoping, text
//! search, list filters and the owner's review queue.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How a list view is built                            │
//! │                                                                         │
//! │  Store snapshot (all stores)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Scope::for_user(user)      owner → everything                         │
//! │       │                     staff → store_id == user.store_id          │
//! │       ▼                                                                 │
//! │  RepairFilter / InventoryFilter / filter_customers                     │
//! │       │   case-insensitive substring over the view's fields            │
//! │       ▼                                                                 │
//! │  Rendered rows (relative order preserved)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scoping here is what a view shows. The store re-checks role rules on
//! mutations that need them (see `approval::ensure_can_review`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::approval::{InventoryUpdateRequest, RequestStatus};
use crate::money::Money;
use crate::status::RepairStatus;
use crate::types::{Customer, InventoryItem, Repair, Store, Supplier, User, UserRole};

// =============================================================================
// Role Scoping
// =============================================================================

/// Records that belong to one store.
pub trait StoreScoped {
    fn store_id(&self) -> &str;
}

impl StoreScoped for Repair {
    fn store_id(&self) -> &str {
        &self.store_id
    }
}

impl StoreScoped for InventoryItem {
    fn store_id(&self) -> &str {
        &self.store_id
    }
}

impl StoreScoped for Store {
    fn store_id(&self) -> &str {
        &self.id
    }
}

/// Which stores a user may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Elevated role: no filtering.
    AllStores,
    /// Scoped role bound to one store.
    Store(String),
    /// Deactivated users, and scoped roles without an assigned store, see
    /// nothing.
    Nothing,
}

impl Scope {
    /// Derives the scope from the acting user.
    pub fn for_user(user: &User) -> Self {
        if !user.is_active {
            return Scope::Nothing;
        }
        match (user.role, &user.store_id) {
            (UserRole::Owner, _) => Scope::AllStores,
            (UserRole::Staff, Some(store_id)) => Scope::Store(store_id.clone()),
            (UserRole::Staff, None) => Scope::Nothing,
        }
    }

    /// Whether records of `store_id` are visible.
    pub fn allows(&self, store_id: &str) -> bool {
        match self {
            Scope::AllStores => true,
            Scope::Store(own) => own == store_id,
            Scope::Nothing => false,
        }
    }

    /// Filters a collection, preserving relative order.
    ///
    /// ## Example
    /// ```rust
    /// use mobilefixer_core::query::{Scope, StoreScoped};
    ///
    /// struct Row(&'static str);
    /// impl StoreScoped for Row {
    ///     fn store_id(&self) -> &str { self.0 }
    /// }
    ///
    /// let rows = [Row("A"), Row("B"), Row("A")];
    /// let visible = Scope::Store("A".into()).apply(&rows);
    /// assert_eq!(visible.len(), 2);
    /// ```
    pub fn apply<'a, T: StoreScoped>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.allows(item.store_id())).collect()
    }
}

// =============================================================================
// Text Search
// =============================================================================

/// A normalized search term. Blank terms match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(text: &str) -> Self {
        SearchTerm(text.trim().to_lowercase())
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring match.
    pub fn matches(&self, field: &str) -> bool {
        self.is_blank() || field.to_lowercase().contains(&self.0)
    }

    /// True if any field matches.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_blank() || fields.into_iter().any(|field| self.matches(field))
    }
}

// =============================================================================
// Repair Filter
// =============================================================================

/// Search box plus status chips on the repairs screen.
#[derive(Debug, Clone, Default)]
pub struct RepairFilter {
    pub search: SearchTerm,
    /// `None` is the "All" chip.
    pub status: Option<RepairStatus>,
}

impl RepairFilter {
    /// Matches model, customer name, any issue text, or company.
    pub fn matches(&self, repair: &Repair, customer: Option<&Customer>) -> bool {
        if self.status.is_some_and(|status| status != repair.status) {
            return false;
        }

        let fields = [repair.phone_model.as_str(), repair.phone_company.as_str()]
            .into_iter()
            .chain(customer.map(|c| c.name.as_str()))
            .chain(repair.issues.iter().map(String::as_str));
        self.search.matches_any(fields)
    }

    /// Applies the filter, resolving each repair's customer by phone.
    pub fn apply<'a>(
        &self,
        repairs: impl IntoIterator<Item = &'a Repair>,
        customers: &[Customer],
    ) -> Vec<&'a Repair> {
        repairs
            .into_iter()
            .filter(|repair| {
                let customer = customers.iter().find(|c| c.phone == repair.customer_phone);
                self.matches(repair, customer)
            })
            .collect()
    }
}

// =============================================================================
// Inventory Filter
// =============================================================================

/// Search box plus company and supplier dropdowns on the inventory screen.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub search: SearchTerm,
    pub company: Option<String>,
    pub supplier_id: Option<String>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if self
            .company
            .as_deref()
            .is_some_and(|company| company != item.mobile_company)
        {
            return false;
        }
        if self
            .supplier_id
            .as_deref()
            .is_some_and(|supplier| Some(supplier) != item.supplier_id.as_deref())
        {
            return false;
        }

        self.search.matches_any([
            item.name.as_str(),
            item.mobile_company.as_str(),
            item.spare_part_type.as_str(),
            item.spare_part_model.as_str(),
        ])
    }

    pub fn apply<'a>(
        &self,
        items: impl IntoIterator<Item = &'a InventoryItem>,
    ) -> Vec<&'a InventoryItem> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// Distinct non-empty companies, in first-seen order.
pub fn companies<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        let company = item.mobile_company.as_str();
        if !company.is_empty() && !seen.contains(&company) {
            seen.push(company);
        }
    }
    seen
}

/// Suppliers referenced by at least one item, in first-seen order.
pub fn suppliers_in_use<'a, 'b>(
    items: impl IntoIterator<Item = &'a InventoryItem>,
    suppliers: &'b [Supplier],
) -> Vec<&'b Supplier> {
    let mut used: Vec<&Supplier> = Vec::new();
    for supplier_id in items.into_iter().filter_map(|i| i.supplier_id.as_deref()) {
        if used.iter().any(|s| s.id == supplier_id) {
            continue;
        }
        if let Some(supplier) = suppliers.iter().find(|s| s.id == supplier_id) {
            used.push(supplier);
        }
    }
    used
}

// =============================================================================
// Customer Filter
// =============================================================================

/// Matches name, phone, or email.
pub fn filter_customers<'a>(customers: &'a [Customer], search: &SearchTerm) -> Vec<&'a Customer> {
    customers
        .iter()
        .filter(|c| {
            search.matches_any(
                [c.name.as_str(), c.phone.as_str()]
                    .into_iter()
                    .chain(c.email.as_deref()),
            )
        })
        .collect()
}

// =============================================================================
// Review Queue
// =============================================================================

/// A pending request with its item, for the owner's approval list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PendingRequest {
    pub item_id: String,
    pub item_name: String,
    pub request: InventoryUpdateRequest,
}

/// All pending requests across the given items.
pub fn pending_requests<'a>(
    items: impl IntoIterator<Item = &'a InventoryItem>,
) -> Vec<PendingRequest> {
    items
        .into_iter()
        .flat_map(|item| {
            item.requested_updates
                .iter()
                .filter(|req| req.status == RequestStatus::Pending)
                .map(move |req| PendingRequest {
                    item_id: item.id.clone(),
                    item_name: item.name.clone(),
                    request: req.clone(),
                })
        })
        .collect()
}

// =============================================================================
// Price Visibility
// =============================================================================

/// Prices an inventory row shows: staff only see retail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceView {
    pub buy: Option<Money>,
    pub wholesale: Option<Money>,
    pub retail: Money,
}

impl PriceView {
    pub fn for_role(item: &InventoryItem, role: UserRole) -> Self {
        if role.is_elevated() {
            PriceView {
                buy: Some(item.buy_price),
                wholesale: Some(item.wholesale_price),
                retail: item.retail_price,
            }
        } else {
            PriceView {
                buy: None,
                wholesale: None,
                retail: item.retail_price,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
