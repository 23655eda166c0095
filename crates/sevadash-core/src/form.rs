//! Form Binder: raw text-input state to typed create payloads.
//!
//! Coercion rules shared across all entity kinds:
//! - numeric-optional field: empty or whitespace-only input is omitted from
//!   the payload; unparseable input is also treated as "not provided" rather
//!   than rejected (deliberate leniency, never NaN);
//! - checkbox state maps directly to `true`/`false` and is always present;
//! - derived fields (closing balances) use the numeric-or-zero reading of
//!   each input and are submitted as ordinary data.
//!
//! Submission precondition: organization selection and record date must both
//! be non-empty, otherwise `payload()` fails with a local validation error
//! and no network call is made.

use crate::error::{Error, Result};
use crate::service::{
    AttendancePayload, MedicineStockPayload, NutritionStockPayload, PatientsPayload,
};

/// Coerce a raw numeric input. Empty, whitespace-only, and malformed strings
/// all become `None`.
pub fn numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Numeric-or-zero reading for derived-field arithmetic.
pub fn numeric_or_zero(raw: &str) -> f64 {
    numeric(raw).unwrap_or(0.0)
}

fn require_scope(organization_id: &str, record_date: &str) -> Result<(i64, String)> {
    let org = organization_id.trim();
    if org.is_empty() {
        return Err(Error::Validation("organization is required".to_string()));
    }
    let date = record_date.trim();
    if date.is_empty() {
        return Err(Error::Validation("record date is required".to_string()));
    }
    let org_id = org
        .parse::<i64>()
        .map_err(|_| Error::Validation("organization is required".to_string()))?;
    Ok((org_id, date.to_string()))
}

// =============================================================================
// ATTENDANCE
// =============================================================================

/// Raw input state for the attendance form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceForm {
    pub organization_id: String,
    pub record_date: String,
    pub staff_present_count: String,
    pub doctor_present: bool,
}

impl AttendanceForm {
    /// Build the create payload, validating the required scope fields first.
    pub fn payload(&self) -> Result<AttendancePayload> {
        let (organization_id, record_date) =
            require_scope(&self.organization_id, &self.record_date)?;
        Ok(AttendancePayload {
            organization_id,
            record_date,
            staff_present_count: numeric(&self.staff_present_count),
            doctor_present: self.doctor_present,
        })
    }

    /// After a successful submit: clear entity fields, keep organization and
    /// date to speed multi-row entry for the same org/date.
    pub fn clear_entity_fields(&mut self) {
        self.staff_present_count.clear();
        self.doctor_present = false;
    }
}

// =============================================================================
// MEDICINE STOCK
// =============================================================================

/// Raw input state for the medicine stock form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineStockForm {
    pub organization_id: String,
    pub record_date: String,
    pub medicine_name: String,
    pub opening_balance: String,
    pub received: String,
    pub issued: String,
}

impl MedicineStockForm {
    /// Derived closing balance, recomputed reactively as
    /// `opening + received − issued` and rendered read-only.
    pub fn closing_balance(&self) -> f64 {
        numeric_or_zero(&self.opening_balance) + numeric_or_zero(&self.received)
            - numeric_or_zero(&self.issued)
    }

    pub fn payload(&self) -> Result<MedicineStockPayload> {
        let (organization_id, record_date) =
            require_scope(&self.organization_id, &self.record_date)?;
        Ok(MedicineStockPayload {
            organization_id,
            record_date,
            medicine_name: self.medicine_name.trim().to_string(),
            opening_balance: numeric(&self.opening_balance),
            received: numeric(&self.received),
            issued: numeric(&self.issued),
            closing_balance: self.closing_balance(),
        })
    }

    pub fn clear_entity_fields(&mut self) {
        self.medicine_name.clear();
        self.opening_balance.clear();
        self.received.clear();
        self.issued.clear();
    }
}

// =============================================================================
// NUTRITION STOCK
// =============================================================================

/// Raw input state for the nutrition stock form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionStockForm {
    pub organization_id: String,
    pub record_date: String,
    pub item_name: String,
    pub opening_stock: String,
    pub received: String,
    pub distributed: String,
}

impl NutritionStockForm {
    /// Derived closing stock: `opening + received − distributed`.
    pub fn closing_stock(&self) -> f64 {
        numeric_or_zero(&self.opening_stock) + numeric_or_zero(&self.received)
            - numeric_or_zero(&self.distributed)
    }

    pub fn payload(&self) -> Result<NutritionStockPayload> {
        let (organization_id, record_date) =
            require_scope(&self.organization_id, &self.record_date)?;
        Ok(NutritionStockPayload {
            organization_id,
            record_date,
            item_name: self.item_name.trim().to_string(),
            opening_stock: numeric(&self.opening_stock),
            received: numeric(&self.received),
            distributed: numeric(&self.distributed),
            closing_stock: self.closing_stock(),
        })
    }

    pub fn clear_entity_fields(&mut self) {
        self.item_name.clear();
        self.opening_stock.clear();
        self.received.clear();
        self.distributed.clear();
    }
}

// =============================================================================
// PATIENTS
// =============================================================================

/// Raw input state for the patient services form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientsForm {
    pub organization_id: String,
    pub record_date: String,
    pub opd_count: String,
    pub ipd_count: String,
    pub surgeries: String,
    pub deliveries: String,
}

impl PatientsForm {
    pub fn payload(&self) -> Result<PatientsPayload> {
        let (organization_id, record_date) =
            require_scope(&self.organization_id, &self.record_date)?;
        Ok(PatientsPayload {
            organization_id,
            record_date,
            opd_count: numeric(&self.opd_count),
            ipd_count: numeric(&self.ipd_count),
            surgeries: numeric(&self.surgeries),
            deliveries: numeric(&self.deliveries),
        })
    }

    pub fn clear_entity_fields(&mut self) {
        self.opd_count.clear();
        self.ipd_count.clear();
        self.surgeries.clear();
        self.deliveries.clear();
    }
}
