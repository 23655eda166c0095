//! Core data models for the sevadash dashboard.
//!
//! Every admin screen works over the same uniform record shape: a stable
//! integer `id`, an `organization_id` foreign key, an ISO `record_date`
//! string, plus entity-specific fields. The parallel record types are held
//! together by the [`Record`] tagged union, which is matched exhaustively at
//! the single rendering boundary instead of probing fields defensively.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// ENTITY KINDS
// =============================================================================

/// One of the parallel record types sharing the CRUD + bulk-import shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Daily staff attendance (schools, health facilities).
    Attendance,
    /// Medicine stock ledger entries.
    MedicineStock,
    /// Supplementary nutrition stock entries (Anganwadi centres).
    NutritionStock,
    /// Patient services counts (OPD/IPD, surgeries, deliveries).
    Patients,
}

impl EntityKind {
    /// All entity kinds, in tab display order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Attendance,
        EntityKind::MedicineStock,
        EntityKind::NutritionStock,
        EntityKind::Patients,
    ];

    /// Endpoint path segment and template file stem for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Attendance => "attendance",
            EntityKind::MedicineStock => "medicine_stock",
            EntityKind::NutritionStock => "nutrition_stock",
            EntityKind::Patients => "patients",
        }
    }

    /// Whether this kind supports edit/delete of existing rows.
    pub fn supports_edit(&self) -> bool {
        matches!(self, EntityKind::NutritionStock)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Daily attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub organization_id: i64,
    pub record_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_present_count: Option<f64>,
    pub doctor_present: bool,
}

/// Medicine stock ledger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineStockRecord {
    pub id: i64,
    pub organization_id: i64,
    pub record_date: String,
    pub medicine_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_balance: Option<f64>,
}

/// Supplementary nutrition stock record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionStockRecord {
    pub id: i64,
    pub organization_id: i64,
    pub record_date: String,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_stock: Option<f64>,
}

/// Patient services record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientsRecord {
    pub id: i64,
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

/// Tagged union over the four record types.
///
/// The active-tab discriminator selects which variant a screen holds; the
/// rendering boundary in [`crate::table`] matches this exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Attendance(AttendanceRecord),
    MedicineStock(MedicineStockRecord),
    NutritionStock(NutritionStockRecord),
    Patients(PatientsRecord),
}

impl Record {
    /// Stable, unique-per-entity-kind record id.
    pub fn id(&self) -> i64 {
        match self {
            Record::Attendance(r) => r.id,
            Record::MedicineStock(r) => r.id,
            Record::NutritionStock(r) => r.id,
            Record::Patients(r) => r.id,
        }
    }

    /// Foreign key to the owning organization.
    pub fn organization_id(&self) -> i64 {
        match self {
            Record::Attendance(r) => r.organization_id,
            Record::MedicineStock(r) => r.organization_id,
            Record::NutritionStock(r) => r.organization_id,
            Record::Patients(r) => r.organization_id,
        }
    }

    /// Raw record date string as the backend sent it.
    pub fn record_date(&self) -> &str {
        match self {
            Record::Attendance(r) => &r.record_date,
            Record::MedicineStock(r) => &r.record_date,
            Record::NutritionStock(r) => &r.record_date,
            Record::Patients(r) => &r.record_date,
        }
    }

    /// Calendar date used for sorting, filtering, and display: the first 10
    /// characters (`YYYY-MM-DD`). Time-of-day, if the backend sends one, is
    /// ignored.
    pub fn display_date(&self) -> &str {
        let date = self.record_date();
        date.get(..10).unwrap_or(date)
    }

    /// Which entity kind this record belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Attendance(_) => EntityKind::Attendance,
            Record::MedicineStock(_) => EntityKind::MedicineStock,
            Record::NutritionStock(_) => EntityKind::NutritionStock,
            Record::Patients(_) => EntityKind::Patients,
        }
    }
}

impl From<AttendanceRecord> for Record {
    fn from(r: AttendanceRecord) -> Self {
        Record::Attendance(r)
    }
}

impl From<MedicineStockRecord> for Record {
    fn from(r: MedicineStockRecord) -> Self {
        Record::MedicineStock(r)
    }
}

impl From<NutritionStockRecord> for Record {
    fn from(r: NutritionStockRecord) -> Self {
        Record::NutritionStock(r)
    }
}

impl From<PatientsRecord> for Record {
    fn from(r: PatientsRecord) -> Self {
        Record::Patients(r)
    }
}

// =============================================================================
// ORGANIZATIONS
// =============================================================================

/// Organization reference loaded separately from records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

/// Lookup from organization id to display name.
///
/// No referential integrity is enforced client-side: an unresolved id
/// displays as the raw numeric id.
#[derive(Debug, Clone, Default)]
pub struct OrgDirectory {
    by_id: HashMap<i64, String>,
}

impl OrgDirectory {
    /// Build a directory from a fetched organization list.
    pub fn from_list(orgs: impl IntoIterator<Item = Organization>) -> Self {
        Self {
            by_id: orgs.into_iter().map(|o| (o.id, o.name)).collect(),
        }
    }

    /// Display name for an organization id, falling back to the raw id.
    pub fn display_name(&self, id: i64) -> String {
        match self.by_id.get(&id) {
            Some(name) => name.clone(),
            None => id.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// =============================================================================
// BULK IMPORT
// =============================================================================

/// Outcome of a CSV bulk upload, as reported by the backend.
///
/// Transient: exists only for the duration of displaying the post-upload
/// summary. `errors` entries are one-line, human-readable, and may reference
/// a source row number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkImportResult {
    pub imported: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}
