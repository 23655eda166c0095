//! CSV Bulk-Import Pipeline: template generation and result reporting.
//!
//! The admin downloads a template, fills it offline, and uploads it for
//! server-side validated ingestion. The client performs no pre-parsing or
//! schema checks on the uploaded CSV; the backend is the sole validator of
//! row contents. What lives here is the pure half of the pipeline: template
//! text generation and the post-upload summary.

use chrono::Utc;

use crate::defaults::MAX_ERRORS_SHOWN;
use crate::error::{Error, Result};
use crate::models::{BulkImportResult, EntityKind};

/// A downloadable CSV template: a fixed header row whose column names and
/// order match the create-payload field names, plus exactly one example data
/// row with plausible sample values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTemplate {
    /// `<entity_kind>_template.csv`
    pub filename: String,
    /// Header line, newline, example line, trailing newline.
    pub content: String,
}

impl CsvTemplate {
    /// Generate the template for an entity kind. Pure, no network call.
    pub fn generate(kind: EntityKind, sample_organization_id: i64) -> Self {
        let date = Utc::now().date_naive().format("%Y-%m-%d");
        let org = sample_organization_id;
        let (header, example) = match kind {
            EntityKind::Attendance => (
                "organization_id,record_date,staff_present_count,doctor_present",
                format!("{org},{date},15,true"),
            ),
            EntityKind::MedicineStock => (
                "organization_id,record_date,medicine_name,opening_balance,received,issued,closing_balance",
                format!("{org},{date},Paracetamol,100,50,30,120"),
            ),
            EntityKind::NutritionStock => (
                "organization_id,record_date,item_name,opening_stock,received,distributed,closing_stock",
                format!("{org},{date},Rice,80,20,25,75"),
            ),
            EntityKind::Patients => (
                "organization_id,record_date,opd_count,ipd_count,surgeries,deliveries",
                format!("{org},{date},40,12,3,2"),
            ),
        };
        Self {
            filename: format!("{}_template.csv", kind.as_str()),
            content: format!("{header}\n{example}\n"),
        }
    }
}

/// What to do with the file input after an upload attempt.
///
/// A completed attempt (success, with or without row errors) clears the
/// selection so the same file is not accidentally re-submitted; a pure
/// transport failure retains it so the user can retry without reselecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDisposition {
    Clear,
    Retain,
}

impl FileDisposition {
    pub fn for_outcome(outcome: &Result<BulkImportResult>) -> Self {
        match outcome {
            Ok(_) => FileDisposition::Clear,
            Err(_) => FileDisposition::Retain,
        }
    }
}

/// Display-ready summary of a bulk upload outcome.
///
/// Shows at most [`MAX_ERRORS_SHOWN`] error lines verbatim and elides the
/// rest with a count; errors are never discarded outright. Partial success
/// is not a hard failure: the caller refreshes the store either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: u64,
    pub shown_errors: Vec<String>,
    pub elided_count: usize,
}

impl ImportSummary {
    pub fn from_result(result: &BulkImportResult) -> Self {
        let shown: Vec<String> = result
            .errors
            .iter()
            .take(MAX_ERRORS_SHOWN)
            .cloned()
            .collect();
        let elided = result.errors.len().saturating_sub(shown.len());
        Self {
            imported: result.imported,
            shown_errors: shown,
            elided_count: elided,
        }
    }

    /// One-line banner text for the post-upload notice.
    pub fn banner(&self) -> String {
        let mut banner = format!("Imported {}", self.imported);
        if !self.shown_errors.is_empty() {
            banner.push_str(&format!(
                ". {} row(s) failed: {}",
                self.shown_errors.len() + self.elided_count,
                self.shown_errors.join("; ")
            ));
            if self.elided_count > 0 {
                banner.push_str(&format!(" … and {} more", self.elided_count));
            }
        }
        banner
    }
}

/// Validate the local precondition before an upload is attempted: a file must
/// be selected. Reported inline, no network call made.
pub fn require_file_selected(file_name: Option<&str>) -> Result<&str> {
    match file_name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(Error::Validation("select a CSV file first".to_string())),
    }
}
