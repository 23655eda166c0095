//! Backend seam for record operations.
//!
//! The REST backend is the sole owner of persistence and validation; the
//! client consumes it through this trait so screens and tests can swap in a
//! mock implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{BulkImportResult, EntityKind, Organization, Record};
use crate::scope::Scope;

// =============================================================================
// CREATE PAYLOADS
// =============================================================================

/// Create payload for an attendance record.
///
/// Numeric-optional fields are `None` when the operator left the input empty
/// or unparseable, and are omitted from the JSON body entirely. Booleans are
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendancePayload {
    pub organization_id: i64,
    pub record_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_present_count: Option<f64>,
    pub doctor_present: bool,
}

/// Create payload for a medicine stock entry. `closing_balance` is derived
/// client-side and submitted as ordinary data; the backend does not recompute
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineStockPayload {
    pub organization_id: i64,
    pub record_date: String,
    pub medicine_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<f64>,
    pub closing_balance: f64,
}

/// Create/update payload for a nutrition stock entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionStockPayload {
    pub organization_id: i64,
    pub record_date: String,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed: Option<f64>,
    pub closing_stock: f64,
}

/// Create payload for a patient services record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientsPayload {
    pub organization_id: i64,
    pub record_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opd_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipd_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surgeries: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<f64>,
}

/// Tagged union over the four create payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreatePayload {
    Attendance(AttendancePayload),
    MedicineStock(MedicineStockPayload),
    NutritionStock(NutritionStockPayload),
    Patients(PatientsPayload),
}

impl CreatePayload {
    pub fn kind(&self) -> EntityKind {
        match self {
            CreatePayload::Attendance(_) => EntityKind::Attendance,
            CreatePayload::MedicineStock(_) => EntityKind::MedicineStock,
            CreatePayload::NutritionStock(_) => EntityKind::NutritionStock,
            CreatePayload::Patients(_) => EntityKind::Patients,
        }
    }
}

// =============================================================================
// SERVICE TRAIT
// =============================================================================

/// Record operations against the department backend.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// List records for a scope. Organization scopes hit
    /// `GET /{entity}?organization_id=&limit=`, department scopes hit
    /// `GET /{entity}/department?limit=`.
    async fn list_records(&self, scope: &Scope, limit: u32) -> Result<Vec<Record>>;

    /// Create one record; returns the created row.
    async fn create_record(&self, payload: CreatePayload) -> Result<Record>;

    /// Update an existing nutrition stock entry.
    async fn update_nutrition(&self, id: i64, payload: NutritionStockPayload) -> Result<Record>;

    /// Delete a nutrition stock entry.
    async fn delete_nutrition(&self, id: i64) -> Result<()>;

    /// Upload a filled CSV template for server-side validated ingestion.
    /// The backend is the sole validator of row contents.
    async fn bulk_import(
        &self,
        kind: EntityKind,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<BulkImportResult>;

    /// List the organizations visible to the caller, for name resolution and
    /// the organization selector.
    async fn list_organizations(&self) -> Result<Vec<Organization>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_omits_absent_numeric_fields() {
        let payload = AttendancePayload {
            organization_id: 5,
            record_date: "2026-03-01".to_string(),
            staff_present_count: None,
            doctor_present: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("staff_present_count"));
        assert_eq!(obj["doctor_present"], serde_json::json!(true));
        assert_eq!(obj["organization_id"], serde_json::json!(5));
    }

    #[test]
    fn test_medicine_payload_always_carries_closing_balance() {
        let payload = MedicineStockPayload {
            organization_id: 5,
            record_date: "2026-03-01".to_string(),
            medicine_name: "Paracetamol".to_string(),
            opening_balance: None,
            received: None,
            issued: None,
            closing_balance: 0.0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("closing_balance"));
        assert!(!obj.contains_key("opening_balance"));
    }

    #[test]
    fn test_create_payload_kind() {
        let payload = CreatePayload::Patients(PatientsPayload {
            organization_id: 12,
            record_date: "2026-02-20".to_string(),
            opd_count: Some(40.0),
            ipd_count: None,
            surgeries: None,
            deliveries: None,
        });
        assert_eq!(payload.kind(), EntityKind::Patients);
    }
}
