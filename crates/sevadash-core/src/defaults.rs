//! Centralized default constants for the sevadash client.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// PAGINATION
// =============================================================================

/// Fixed page size for every entity-kind table. Not user-configurable.
pub const PAGE_SIZE: usize = 10;

/// Default `limit` query parameter for list endpoints.
pub const LIST_LIMIT: u32 = 500;

// =============================================================================
// BULK IMPORT
// =============================================================================

/// Maximum per-row error messages shown verbatim in the import banner.
/// Remaining errors are elided with a count, never discarded.
pub const MAX_ERRORS_SHOWN: usize = 3;

/// Multipart field name for the CSV upload.
pub const BULK_FILE_FIELD: &str = "file";

// =============================================================================
// BACKEND
// =============================================================================

/// Default backend origin. Overridden via `SEVADASH_API_BASE`.
pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Timeout for list/create/update/delete requests in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeout for CSV upload requests in seconds (server-side row validation
/// makes these slower than ordinary writes).
pub const UPLOAD_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// PREFERENCES
// =============================================================================

/// File name of the persisted language preference.
pub const PREF_FILE_NAME: &str = "language";
