//! Scope and filter state for the active admin screen.
//!
//! A scope is the (entity kind, organization-or-department) pair that
//! determines which backend list endpoint is called. Filter state lives for
//! one mounted tab: it resets to page 1 whenever the active entity kind or
//! organization selection changes and is discarded on navigation away.

use serde::{Deserialize, Serialize};

use crate::models::EntityKind;

/// Organization selection for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgScope {
    /// A single organization is selected.
    Organization(i64),
    /// No organization filter: the caller's whole department.
    Department,
}

/// The (entity kind, organization-or-department) pair driving list calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub kind: EntityKind,
    pub org: OrgScope,
}

impl Scope {
    pub fn organization(kind: EntityKind, organization_id: i64) -> Self {
        Self {
            kind,
            org: OrgScope::Organization(organization_id),
        }
    }

    pub fn department(kind: EntityKind) -> Self {
        Self {
            kind,
            org: OrgScope::Department,
        }
    }

    /// Organization id when a single organization is selected.
    pub fn organization_id(&self) -> Option<i64> {
        match self.org {
            OrgScope::Organization(id) => Some(id),
            OrgScope::Department => None,
        }
    }
}

/// Per-tab filter state: optional exact-date filter plus the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Exact calendar date (`YYYY-MM-DD`) to retain, when set.
    pub date_filter: Option<String>,
    /// 1-based requested page. Clamped during view derivation.
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            date_filter: None,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exact-date filter and return to page 1.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date_filter = Some(date.into());
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Reset on entity-kind or organization change: page 1, no date filter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_organization_id() {
        let scoped = Scope::organization(EntityKind::Attendance, 5);
        assert_eq!(scoped.organization_id(), Some(5));

        let dept = Scope::department(EntityKind::Attendance);
        assert_eq!(dept.organization_id(), None);
    }

    #[test]
    fn test_default_filter_is_page_one_no_date() {
        let filters = FilterState::default();
        assert_eq!(filters.page, 1);
        assert!(filters.date_filter.is_none());
    }

    #[test]
    fn test_with_date_returns_to_page_one() {
        let filters = FilterState::new().with_page(4).with_date("2026-03-01");
        assert_eq!(filters.page, 1);
        assert_eq!(filters.date_filter.as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut filters = FilterState::new().with_page(3);
        filters.date_filter = Some("2026-03-01".to_string());
        filters.reset();
        assert_eq!(filters, FilterState::default());
    }
}
