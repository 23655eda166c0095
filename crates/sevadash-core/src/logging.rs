//! Structured logging schema and field name constants for sevadash.
//!
//! Both crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across the
//! client.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Unusable page state, requires operator attention |
//! | WARN  | Recoverable issue (stale response discarded, failed reload with data retained) |
//! | INFO  | Client construction, preference changes |
//! | DEBUG | Operation completions, derived view shapes |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "core", "client"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "store", "api", "bulk", "prefs"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "list_records", "create_record", "bulk_import", "derive_view"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Entity kind path segment ("attendance", "medicine_stock", ...).
pub const ENTITY_KIND: &str = "entity_kind";

/// Organization id the operation is scoped to, when not department-wide.
pub const ORGANIZATION_ID: &str = "organization_id";

/// Record id for update/delete operations.
pub const RECORD_ID: &str = "record_id";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of records returned by a list call.
pub const RESULT_COUNT: &str = "result_count";

/// Number of rows imported by a bulk upload.
pub const IMPORTED_COUNT: &str = "imported_count";

/// Number of per-row errors reported by a bulk upload.
pub const ROW_ERROR_COUNT: &str = "row_error_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Boolean success/failure indicator.
pub const SUCCESS: &str = "success";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Set when a fenced store completion was discarded as stale.
pub const STALE: &str = "stale";
