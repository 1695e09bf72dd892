//! # Repair Repository
//!
//! Repair intake and lifecycle moves.
//!
//! ## Intake Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RepairIntakeForm (strings)                                             │
//! │       │ parse (mobilefixer-core::forms)                                 │
//! │       ▼                                                                 │
//! │  RepairIntake ──► intake_repair(&intake, &user)                         │
//! │                     ├── store: user's store, or first store for owner  │
//! │                     ├── customer: found by phone, created if new       │
//! │                     └── add_repair: prepend, link to customer history  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

use mobilefixer_core::forms::RepairIntake;
use mobilefixer_core::query::Scope;
use mobilefixer_core::{CoreError, Customer, NewRepair, Repair, RepairStatus, User};

use crate::error::{StoreError, StoreResult};
use crate::store::{new_id, DataStore};

/// Result of a repair intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeOutcome {
    pub repair: Repair,
    pub customer: Customer,
    /// The phone was new and a customer record was created.
    pub customer_created: bool,
}

impl DataStore {
    /// Opens a repair. Newest first.
    ///
    /// ## Errors
    /// - `NotFound` for an unknown store or customer phone
    /// - `TerminalIntakeStatus` for a delivered or cancelled intake status
    pub fn add_repair(&mut self, new: NewRepair) -> StoreResult<Repair> {
        if self.store(&new.store_id).is_none() {
            warn!(store_id = %new.store_id, "Rejected repair for unknown store");
            return Err(StoreError::not_found("Store", new.store_id));
        }

        if new.status.is_terminal() {
            return Err(CoreError::TerminalIntakeStatus(new.status).into());
        }

        let customer_index = self
            .customers
            .iter()
            .position(|customer| customer.phone == new.customer_phone)
            .ok_or_else(|| {
                warn!(phone = %new.customer_phone, "Rejected repair for unknown customer");
                StoreError::not_found("Customer", new.customer_phone.clone())
            })?;

        let now = Utc::now();
        let repair = Repair {
            id: new_id("repair"),
            store_id: new.store_id,
            customer_phone: new.customer_phone,
            phone_company: new.phone_company,
            phone_model: new.phone_model,
            imei: new.imei,
            issues: new.issues,
            status: new.status,
            received_date: new.received_date,
            completed_date: (new.status == RepairStatus::Repaired).then_some(now),
            delivery_date: None,
            assigned_staff_id: new.assigned_staff_id,
            bill_amount: new.bill_amount,
            estimated_completion: new.estimated_completion,
            notes: new.notes,
        };

        Arc::make_mut(&mut self.repairs).insert(0, repair.clone());
        Arc::make_mut(&mut self.customers)[customer_index]
            .repair_history
            .push(repair.id.clone());
        self.touch();

        debug!(
            id = %repair.id,
            store_id = %repair.store_id,
            status = %repair.status,
            bill = %repair.bill_amount,
            "Added repair"
        );
        Ok(repair)
    }

    /// The "Add New Repair" dialog flow: finds or registers the customer,
    /// then opens the repair at the acting user's store.
    ///
    /// Staff open repairs at their assigned store; the owner at the first
    /// store they see. An existing customer record is kept as is.
    pub fn intake_repair(&mut self, intake: &RepairIntake, actor: &User) -> StoreResult<IntakeOutcome> {
        let store_id = Scope::for_user(actor)
            .apply(self.stores.as_slice())
            .first()
            .map(|store| store.id.clone())
            .ok_or_else(|| CoreError::PermissionDenied {
                user_id: actor.id.clone(),
                action: "open repairs without an active store assignment".to_string(),
            })?;

        if intake.status.is_terminal() {
            return Err(CoreError::TerminalIntakeStatus(intake.status).into());
        }

        let (customer_created, customer) = match self.find_customer_by_phone(&intake.customer.phone) {
            Some(existing) => (false, existing.clone()),
            None => (true, self.add_customer(intake.customer.clone())?),
        };

        let repair = self.add_repair(intake.to_new_repair(&store_id, &actor.id))?;
        let customer = self.customer(&customer.id).cloned().unwrap_or(customer);

        Ok(IntakeOutcome {
            repair,
            customer,
            customer_created,
        })
    }

    /// Moves a repair along its lifecycle.
    ///
    /// Entering `repaired` stamps `completed_date`; entering `delivered`
    /// stamps `delivery_date`. `notes` replaces the existing notes only when
    /// given and not blank.
    ///
    /// ## Errors
    /// - `NotFound` for an unknown id
    /// - `InvalidTransition` when the table forbids the move
    pub fn update_repair_status(
        &mut self,
        id: &str,
        status: RepairStatus,
        notes: Option<&str>,
    ) -> StoreResult<Repair> {
        let index = self
            .repairs
            .iter()
            .position(|repair| repair.id == id)
            .ok_or_else(|| StoreError::not_found("Repair", id))?;

        let mut repair = self.repairs[index].clone();
        repair.status = repair.status.transition_to(status).inspect_err(|err| {
            warn!(id, %err, "Rejected repair status change");
        })?;

        let now = Utc::now();
        match status {
            RepairStatus::Repaired => repair.completed_date = Some(now),
            RepairStatus::Delivered => repair.delivery_date = Some(now),
            _ => {}
        }

        if let Some(notes) = notes.map(str::trim).filter(|notes| !notes.is_empty()) {
            repair.notes = Some(notes.to_string());
        }

        Arc::make_mut(&mut self.repairs)[index] = repair.clone();
        self.touch();

        debug!(id, status = %status, "Updated repair status");
        Ok(repair)
    }

    pub fn repair(&self, id: &str) -> Option<&Repair> {
        self.repairs.iter().find(|repair| repair.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
