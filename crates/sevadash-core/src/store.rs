//! Record Store: the client-side holder of the last-fetched collection for
//! the active scope.
//!
//! The store owns the most recently fetched records for one (entity kind,
//! organization-or-department) pair and derives a display-ready, sorted,
//! filtered, paginated view from them. All mutation goes through the backend
//! followed by a re-fetch; the store never merges local edits.
//!
//! Loads are fenced: `begin_load` hands out a generation token and
//! `complete_load` discards any completion whose token no longer matches the
//! current scope and generation. This replaces the unguarded last-write-wins
//! behavior where a slow response for a previous tab could overwrite fresher
//! state after a scope switch.

use tracing::{debug, warn};

use crate::defaults::PAGE_SIZE;
use crate::models::Record;
use crate::scope::{FilterState, Scope};

/// Load lifecycle for one store.
///
/// `Idle → Loading → {Loaded, Failed}`, and `Loaded → Loading` again on any
/// subsequent load (tab switch, organization switch, post-submit refresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Fencing token for one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    scope: Scope,
    generation: u64,
}

impl LoadToken {
    pub fn scope(&self) -> Scope {
        self.scope
    }
}

/// Derived, display-ready slice of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Records visible on the clamped page, newest date first.
    pub visible_rows: Vec<Record>,
    /// Total records after date filtering, before pagination.
    pub total_rows: usize,
    /// Total pages; floors at 1 so an empty collection is page 1 of 1.
    pub total_pages: u32,
    /// Requested page clamped into `[1, total_pages]`.
    pub clamped_page: u32,
}

/// Holder of the last-fetched record collection for one scope.
#[derive(Debug, Clone)]
pub struct RecordStore {
    scope: Scope,
    state: LoadState,
    records: Vec<Record>,
    generation: u64,
    last_error: Option<String>,
}

impl RecordStore {
    /// Create an empty store for the given scope.
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            state: LoadState::Idle,
            records: Vec::new(),
            generation: 0,
            last_error: None,
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Full fetched collection, in backend order. Stale-but-available after a
    /// failed reload.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Error message from the most recent failed load, until the next
    /// successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a load for `scope`, switching the store to it.
    ///
    /// Bumps the fencing generation so any still-in-flight earlier load is
    /// discarded on completion. Switching scope does not clear the previous
    /// collection; it stays visible behind the loading indicator until the
    /// fresh response lands.
    pub fn begin_load(&mut self, scope: Scope) -> LoadToken {
        self.scope = scope;
        self.state = LoadState::Loading;
        self.generation += 1;
        LoadToken {
            scope,
            generation: self.generation,
        }
    }

    /// Apply a finished load. Returns whether the outcome was applied.
    ///
    /// A completion is stale when its token's generation or scope no longer
    /// matches the store; stale completions are dropped without touching
    /// state. On failure the previous collection is retained and the error
    /// message surfaced, never silently cleared.
    pub fn complete_load(
        &mut self,
        token: LoadToken,
        outcome: Result<Vec<Record>, String>,
    ) -> bool {
        if token.generation != self.generation || token.scope != self.scope {
            warn!(
                subsystem = "core",
                component = "store",
                op = "complete_load",
                stale = true,
                entity_kind = %token.scope.kind,
                "Discarding stale load completion"
            );
            return false;
        }

        match outcome {
            Ok(records) => {
                debug!(
                    subsystem = "core",
                    component = "store",
                    op = "complete_load",
                    entity_kind = %self.scope.kind,
                    result_count = records.len(),
                    "Load complete"
                );
                self.records = records;
                self.state = LoadState::Loaded;
                self.last_error = None;
            }
            Err(message) => {
                warn!(
                    subsystem = "core",
                    component = "store",
                    op = "complete_load",
                    entity_kind = %self.scope.kind,
                    error = %message,
                    "Load failed, retaining previous collection"
                );
                self.state = LoadState::Failed;
                self.last_error = Some(message);
            }
        }
        true
    }

    /// Derive the sorted, filtered, paginated view. Pure and synchronous:
    /// identical inputs yield identical output and the source collection is
    /// never mutated.
    pub fn derive_view(&self, filters: &FilterState) -> TableView {
        let mut rows: Vec<Record> = match &filters.date_filter {
            Some(date) => self
                .records
                .iter()
                .filter(|r| r.display_date() == date)
                .cloned()
                .collect(),
            None => self.records.clone(),
        };

        // Stable sort: records sharing a truncated date keep original order.
        // Lexicographic comparison of YYYY-MM-DD strings is chronological.
        rows.sort_by(|a, b| b.display_date().cmp(a.display_date()));

        let total_rows = rows.len();
        let total_pages = (total_rows.div_ceil(PAGE_SIZE)).max(1) as u32;
        let clamped_page = filters.page.clamp(1, total_pages);

        let start = (clamped_page as usize - 1) * PAGE_SIZE;
        let visible_rows: Vec<Record> =
            rows.into_iter().skip(start).take(PAGE_SIZE).collect();

        TableView {
            visible_rows,
            total_rows,
            total_pages,
            clamped_page,
        }
    }
}
