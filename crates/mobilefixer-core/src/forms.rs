//! # Forms
//!
//! Raw form input (all strings) and its conversion into store inputs.
//! Every check here runs before the store is touched.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::approval::NewUpdateRequest;
use crate::money::Money;
use crate::status::RepairStatus;
use crate::types::{NewCustomer, NewInventoryItem, NewRepair};
use crate::validation::{
    optional, parse_days, parse_optional_price, parse_price, parse_quantity,
    parse_quantity_change, require, validate_issues, validate_phone, ValidationResult,
};

/// Defaults for fields a form may leave blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub reorder_level: u32,
    pub estimated_days: u32,
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            reorder_level: 10,
            estimated_days: 3,
        }
    }
}

// =============================================================================
// Repair Intake
// =============================================================================

/// The "Add New Repair" dialog, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RepairIntakeForm {
    pub customer_phone: String,
    pub customer_name: String,
    pub customer_email: String,
    pub phone_company: String,
    pub phone_model: String,
    pub imei: String,
    pub issues: Vec<String>,
    pub bill_amount: String,
    pub estimated_days: String,
    /// Blank means pending.
    pub order_status: String,
}

/// A validated intake: the customer to find or create plus the repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairIntake {
    pub customer: NewCustomer,
    pub phone_company: String,
    pub phone_model: String,
    pub imei: Option<String>,
    pub issues: Vec<String>,
    pub status: RepairStatus,
    pub bill_amount: Money,
    pub received_date: DateTime<Utc>,
    pub estimated_completion: Option<DateTime<Utc>>,
}

impl RepairIntakeForm {
    /// Validates the dialog. `now` becomes the received date.
    pub fn parse(&self, defaults: &FormDefaults, now: DateTime<Utc>) -> ValidationResult<RepairIntake> {
        let phone = validate_phone("Mobile number", &self.customer_phone)?;
        let name = require("Customer name", &self.customer_name)?;
        let phone_company = require("Phone company", &self.phone_company)?;
        let phone_model = require("Phone model", &self.phone_model)?;
        let bill_amount = parse_price("Repair cost", &self.bill_amount)?;
        let issues = validate_issues(&self.issues)?;
        let days = parse_days(&self.estimated_days, defaults.estimated_days)?;

        let status = if self.order_status.trim().is_empty() {
            RepairStatus::Pending
        } else {
            self.order_status.parse()?
        };

        Ok(RepairIntake {
            customer: NewCustomer {
                name,
                phone,
                email: optional(&self.customer_email),
                address: None,
            },
            phone_company,
            phone_model,
            imei: optional(&self.imei),
            issues,
            status,
            bill_amount,
            received_date: now,
            estimated_completion: Some(now + Duration::days(i64::from(days))),
        })
    }
}

impl RepairIntake {
    /// The repair half of the intake, once the store and staff are known.
    pub fn to_new_repair(&self, store_id: &str, assigned_staff_id: &str) -> NewRepair {
        NewRepair {
            store_id: store_id.to_string(),
            customer_phone: self.customer.phone.clone(),
            phone_company: self.phone_company.clone(),
            phone_model: self.phone_model.clone(),
            imei: self.imei.clone(),
            issues: self.issues.clone(),
            status: self.status,
            received_date: self.received_date,
            assigned_staff_id: assigned_staff_id.to_string(),
            bill_amount: self.bill_amount,
            estimated_completion: self.estimated_completion,
            notes: None,
        }
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// The "Add Inventory Item" dialog, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryForm {
    /// Composed from company, model and part type when blank.
    pub name: String,
    pub mobile_company: String,
    pub spare_part_type: String,
    pub spare_part_model: String,
    pub supplier_id: String,
    pub quantity: String,
    pub reorder_level: String,
    pub buy_price: String,
    pub wholesale_price: String,
    pub retail_price: String,
    /// Defaults to the part type.
    pub category: String,
}

impl InventoryForm {
    pub fn parse(
        &self,
        defaults: &FormDefaults,
        store_id: &str,
        now: DateTime<Utc>,
    ) -> ValidationResult<NewInventoryItem> {
        let mobile_company = require("Mobile company", &self.mobile_company)?;
        let spare_part_type = require("Spare part type", &self.spare_part_type)?;
        let spare_part_model = self.spare_part_model.trim().to_string();
        let quantity = parse_quantity("Quantity", &self.quantity)?;
        let buy_price = parse_price("Buy price", &self.buy_price)?;
        let retail_price = parse_price("Retail price", &self.retail_price)?;
        let wholesale_price = parse_optional_price("Wholesale price", &self.wholesale_price)?;

        let reorder_level = if self.reorder_level.trim().is_empty() {
            defaults.reorder_level
        } else {
            parse_quantity("Reorder level", &self.reorder_level)?
        };

        let name = optional(&self.name).unwrap_or_else(|| {
            compose_item_name(&mobile_company, &spare_part_model, &spare_part_type)
        });
        let category = optional(&self.category).unwrap_or_else(|| spare_part_type.clone());

        Ok(NewInventoryItem {
            store_id: store_id.to_string(),
            name,
            mobile_company,
            spare_part_type,
            spare_part_model,
            supplier_id: optional(&self.supplier_id),
            purchase_date: Some(now),
            quantity,
            reorder_level,
            buy_price,
            wholesale_price,
            retail_price,
            category,
        })
    }
}

/// "Apple" + "iPhone 14" + "Display" → "Apple iPhone 14 Display".
pub fn compose_item_name(company: &str, model: &str, part_type: &str) -> String {
    [company, model, part_type]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Update Request
// =============================================================================

/// Staff's "Request Update" inline form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateRequestForm {
    pub quantity_change: String,
    pub reason: String,
}

impl UpdateRequestForm {
    pub fn parse(&self, requested_by: &str) -> ValidationResult<NewUpdateRequest> {
        let quantity_change = parse_quantity_change(&self.quantity_change)?;
        let reason = require("Reason", &self.reason)?;

        Ok(NewUpdateRequest {
            requested_by: requested_by.to_string(),
            quantity_change,
            reason,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn intake_form() -> RepairIntakeForm {
        RepairIntakeForm {
            customer_phone: "(555) 111-2222".to_string(),
            customer_name: "Alice Brown".to_string(),
            customer_email: "".to_string(),
            phone_company: "Apple".to_string(),
            phone_model: "iPhone 14 Pro".to_string(),
            imei: " ".to_string(),
            issues: vec!["Cracked screen".to_string(), "".to_string()],
            bill_amount: "299.99".to_string(),
            estimated_days: "".to_string(),
            order_status: "".to_string(),
        }
    }

    #[test]
    fn test_repair_intake_parses() {
        let now = Utc::now();
        let intake = intake_form().parse(&FormDefaults::default(), now).unwrap();

        assert_eq!(intake.customer.phone, "(555) 111-2222");
        assert_eq!(intake.customer.email, None);
        assert_eq!(intake.imei, None);
        assert_eq!(intake.issues, ["Cracked screen"]);
        assert_eq!(intake.bill_amount, Money::from_minor(29999));
        assert_eq!(intake.status, RepairStatus::Pending);
        assert_eq!(intake.estimated_completion, Some(now + Duration::days(3)));

        let repair = intake.to_new_repair("store-1", "2");
        assert_eq!(repair.customer_phone, "(555) 111-2222");
        assert_eq!(repair.received_date, now);
    }

    #[test]
    fn test_repair_intake_rejects_bad_input() {
        let defaults = FormDefaults::default();

        let mut form = intake_form();
        form.customer_name = " ".to_string();
        assert_eq!(
            form.parse(&defaults, Utc::now()).unwrap_err(),
            ValidationError::required("Customer name")
        );

        let mut form = intake_form();
        form.bill_amount = "lots".to_string();
        assert!(matches!(
            form.parse(&defaults, Utc::now()),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let mut form = intake_form();
        form.issues = vec!["  ".to_string()];
        assert!(form.parse(&defaults, Utc::now()).is_err());

        let mut form = intake_form();
        form.order_status = "lost".to_string();
        assert!(matches!(
            form.parse(&defaults, Utc::now()),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_inventory_form_defaults() {
        let form = InventoryForm {
            mobile_company: "Apple".to_string(),
            spare_part_type: "Display".to_string(),
            spare_part_model: "iPhone 14".to_string(),
            quantity: "15".to_string(),
            buy_price: "60".to_string(),
            retail_price: "89.99".to_string(),
            ..InventoryForm::default()
        };

        let item = form
            .parse(&FormDefaults::default(), "store-1", Utc::now())
            .unwrap();
        assert_eq!(item.name, "Apple iPhone 14 Display");
        assert_eq!(item.category, "Display");
        assert_eq!(item.reorder_level, 10);
        assert_eq!(item.wholesale_price, Money::zero());
        assert_eq!(item.supplier_id, None);
        assert_eq!(item.quantity, 15);
    }

    #[test]
    fn test_inventory_form_rejects_non_numeric_quantity() {
        let form = InventoryForm {
            mobile_company: "Apple".to_string(),
            spare_part_type: "Display".to_string(),
            quantity: "a dozen".to_string(),
            buy_price: "60".to_string(),
            retail_price: "89.99".to_string(),
            ..InventoryForm::default()
        };
        assert!(form
            .parse(&FormDefaults::default(), "store-1", Utc::now())
            .is_err());
    }

    #[test]
    fn test_compose_item_name_skips_blanks() {
        assert_eq!(compose_item_name("Samsung", "", "Battery"), "Samsung Battery");
    }

    #[test]
    fn test_update_request_form() {
        let form = UpdateRequestForm {
            quantity_change: "-2".to_string(),
            reason: "Used for repair #R001".to_string(),
        };
        let request = form.parse("2").unwrap();
        assert_eq!(request.quantity_change, -2);
        assert_eq!(request.requested_by, "2");

        let blank_reason = UpdateRequestForm {
            quantity_change: "3".to_string(),
            reason: "".to_string(),
        };
        assert!(blank_reason.parse("2").is_err());
    }
}
