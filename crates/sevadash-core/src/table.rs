//! Table Pagination & Filtering View: the pure rendering contract.
//!
//! One exhaustive match over the [`Record`] union turns each visible record
//! into display cells; an empty view renders a single placeholder row
//! spanning all columns, never an empty table body. Sequence numbers are
//! view-relative, not derived from record ids.

use crate::defaults::PAGE_SIZE;
use crate::models::{EntityKind, OrgDirectory, Record};
use crate::store::TableView;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Sequence number plus display cells for one record.
    Data { seq: usize, cells: Vec<String> },
    /// "No records" placeholder spanning all columns.
    Placeholder { span: usize },
}

/// 1-based, view-relative row number:
/// `(clamped_page - 1) * PAGE_SIZE + local_index + 1`.
pub fn sequence_number(clamped_page: u32, local_index: usize) -> usize {
    (clamped_page as usize - 1) * PAGE_SIZE + local_index + 1
}

/// Column headers for an entity kind, in display order. The leading column
/// is the sequence number.
pub fn column_headers(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Attendance => vec!["#", "Organization", "Date", "Staff Present", "Doctor"],
        EntityKind::MedicineStock => vec![
            "#",
            "Organization",
            "Date",
            "Medicine",
            "Opening",
            "Received",
            "Issued",
            "Closing",
        ],
        EntityKind::NutritionStock => vec![
            "#",
            "Organization",
            "Date",
            "Item",
            "Opening",
            "Received",
            "Distributed",
            "Closing",
        ],
        EntityKind::Patients => vec![
            "#",
            "Organization",
            "Date",
            "OPD",
            "IPD",
            "Surgeries",
            "Deliveries",
        ],
    }
}

fn count_cell(value: Option<f64>) -> String {
    match value {
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => format!("{n}"),
        None => "-".to_string(),
    }
}

fn bool_cell(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Display cells for one record, organization name resolved against the
/// directory (raw id when unresolved), date truncated to `YYYY-MM-DD`.
pub fn record_cells(record: &Record, orgs: &OrgDirectory) -> Vec<String> {
    let org = orgs.display_name(record.organization_id());
    let date = record.display_date().to_string();
    match record {
        Record::Attendance(r) => vec![
            org,
            date,
            count_cell(r.staff_present_count),
            bool_cell(r.doctor_present),
        ],
        Record::MedicineStock(r) => vec![
            org,
            date,
            r.medicine_name.clone(),
            count_cell(r.opening_balance),
            count_cell(r.received),
            count_cell(r.issued),
            count_cell(r.closing_balance),
        ],
        Record::NutritionStock(r) => vec![
            org,
            date,
            r.item_name.clone(),
            count_cell(r.opening_stock),
            count_cell(r.received),
            count_cell(r.distributed),
            count_cell(r.closing_stock),
        ],
        Record::Patients(r) => vec![
            org,
            date,
            count_cell(r.opd_count),
            count_cell(r.ipd_count),
            count_cell(r.surgeries),
            count_cell(r.deliveries),
        ],
    }
}

/// Render a derived view into table rows. Empty views yield exactly one
/// placeholder row.
pub fn render_rows(kind: EntityKind, view: &TableView, orgs: &OrgDirectory) -> Vec<TableRow> {
    if view.visible_rows.is_empty() {
        return vec![TableRow::Placeholder {
            span: column_headers(kind).len(),
        }];
    }
    view.visible_rows
        .iter()
        .enumerate()
        .map(|(i, record)| TableRow::Data {
            seq: sequence_number(view.clamped_page, i),
            cells: record_cells(record, orgs),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, Organization, PatientsRecord};

    fn directory() -> OrgDirectory {
        OrgDirectory::from_list(vec![Organization {
            id: 5,
            name: "PHC Rampur".to_string(),
        }])
    }

    fn view_of(rows: Vec<Record>, clamped_page: u32) -> TableView {
        let total = rows.len();
        TableView {
            visible_rows: rows,
            total_rows: total,
            total_pages: clamped_page.max(1),
            clamped_page,
        }
    }

    #[test]
    fn test_sequence_numbers_are_view_relative() {
        assert_eq!(sequence_number(1, 0), 1);
        assert_eq!(sequence_number(1, 9), 10);
        assert_eq!(sequence_number(2, 0), 11);
        assert_eq!(sequence_number(3, 4), 25);
    }

    #[test]
    fn test_empty_view_renders_single_placeholder() {
        let rows = render_rows(EntityKind::Attendance, &view_of(vec![], 1), &directory());
        assert_eq!(rows.len(), 1);
        match &rows[0] {
            TableRow::Placeholder { span } => {
                assert_eq!(*span, column_headers(EntityKind::Attendance).len())
            }
            other => panic!("Expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_data_rows_carry_resolved_org_and_truncated_date() {
        let record = Record::Attendance(AttendanceRecord {
            id: 1,
            organization_id: 5,
            record_date: "2026-03-01T09:00:00Z".to_string(),
            staff_present_count: Some(15.0),
            doctor_present: true,
        });
        let rows = render_rows(EntityKind::Attendance, &view_of(vec![record], 1), &directory());
        match &rows[0] {
            TableRow::Data { seq, cells } => {
                assert_eq!(*seq, 1);
                assert_eq!(cells, &vec!["PHC Rampur", "2026-03-01", "15", "Yes"]);
            }
            other => panic!("Expected data row, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_org_renders_raw_id() {
        let record = Record::Patients(PatientsRecord {
            id: 2,
            organization_id: 77,
            record_date: "2026-02-20".to_string(),
            opd_count: Some(40.0),
            ipd_count: None,
            surgeries: None,
            deliveries: Some(2.0),
        });
        let rows = render_rows(
            EntityKind::Patients,
            &view_of(vec![record], 1),
            &OrgDirectory::default(),
        );
        match &rows[0] {
            TableRow::Data { cells, .. } => {
                assert_eq!(cells[0], "77");
                assert_eq!(cells[3], "-");
            }
            other => panic!("Expected data row, got {:?}", other),
        }
    }

    #[test]
    fn test_second_page_sequence_continues() {
        let record = Record::Attendance(AttendanceRecord {
            id: 1,
            organization_id: 5,
            record_date: "2026-03-01".to_string(),
            staff_present_count: None,
            doctor_present: false,
        });
        let rows = render_rows(EntityKind::Attendance, &view_of(vec![record], 2), &directory());
        match &rows[0] {
            TableRow::Data { seq, .. } => assert_eq!(*seq, 11),
            other => panic!("Expected data row, got {:?}", other),
        }
    }

    #[test]
    fn test_headers_match_cell_counts() {
        // Sequence column + data cells must line up for every kind.
        let dir = directory();
        let samples: Vec<Record> = vec![
            Record::Attendance(AttendanceRecord {
                id: 1,
                organization_id: 5,
                record_date: "2026-03-01".to_string(),
                staff_present_count: None,
                doctor_present: false,
            }),
            Record::Patients(PatientsRecord {
                id: 2,
                organization_id: 5,
                record_date: "2026-03-01".to_string(),
                opd_count: None,
                ipd_count: None,
                surgeries: None,
                deliveries: None,
            }),
        ];
        for record in samples {
            let headers = column_headers(record.kind());
            let cells = record_cells(&record, &dir);
            assert_eq!(headers.len(), cells.len() + 1, "{}", record.kind());
        }
    }
}
