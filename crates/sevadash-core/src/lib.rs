//! # sevadash-core
//!
//! Core types, record store, and form logic for the sevadash department
//! dashboard client.
//!
//! This crate holds everything that does not touch the network: the typed
//! record models shared by every admin screen, the per-scope record store
//! with its sorted/filtered/paginated view derivation, the form binder that
//! turns raw input state into create payloads, the CSV bulk-import template
//! and summary logic, and the persisted language preference.

pub mod bulk;
pub mod defaults;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod prefs;
pub mod scope;
pub mod service;
pub mod store;
pub mod table;

// Re-export commonly used types at crate root
pub use bulk::{require_file_selected, CsvTemplate, FileDisposition, ImportSummary};
pub use error::{Error, Result};
pub use form::{
    numeric, numeric_or_zero, AttendanceForm, MedicineStockForm, NutritionStockForm, PatientsForm,
};
pub use models::{
    AttendanceRecord, BulkImportResult, EntityKind, MedicineStockRecord, NutritionStockRecord,
    OrgDirectory, Organization, PatientsRecord, Record,
};
pub use prefs::{Language, PrefStore, SetOutcome};
pub use scope::{FilterState, OrgScope, Scope};
pub use service::{
    AttendancePayload, CreatePayload, MedicineStockPayload, NutritionStockPayload,
    PatientsPayload, RecordService,
};
pub use store::{LoadState, LoadToken, RecordStore, TableView};
pub use table::{render_rows, sequence_number, TableRow};
