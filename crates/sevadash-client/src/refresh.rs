//! Store-refresh glue: every mutation goes through the backend and then a
//! re-fetch of the authoritative list. There is no local optimistic merge.
//!
//! Loads are fenced through [`RecordStore::begin_load`] so a response that
//! resolves after the user switched scope is discarded instead of
//! overwriting fresher state.

use tracing::debug;

use sevadash_core::{
    BulkImportResult, CreatePayload, FileDisposition, Record, RecordService, RecordStore, Result,
    Scope,
};

/// Re-fetch the list for `scope` into the store.
///
/// Returns whether the outcome was applied; a stale completion (the store
/// moved on to a newer load) returns `false`. Transport failures are
/// recorded in the store, which keeps its previous collection visible.
pub async fn refresh_store<S>(
    service: &S,
    store: &mut RecordStore,
    scope: Scope,
    limit: u32,
) -> bool
where
    S: RecordService + ?Sized,
{
    let token = store.begin_load(scope);
    let outcome = service
        .list_records(&scope, limit)
        .await
        .map_err(|e| e.to_string());
    store.complete_load(token, outcome)
}

/// Submit a create payload, then re-fetch the active scope's list so the new
/// row appears once sorted.
///
/// On create failure the error is returned verbatim and no refresh happens;
/// the caller leaves all field values intact for correction.
pub async fn submit_and_refresh<S>(
    service: &S,
    store: &mut RecordStore,
    payload: CreatePayload,
    scope: Scope,
    limit: u32,
) -> Result<Record>
where
    S: RecordService + ?Sized,
{
    let created = service.create_record(payload).await?;
    debug!(
        subsystem = "client",
        component = "refresh",
        op = "submit_and_refresh",
        record_id = created.id(),
        "Create succeeded, refreshing list"
    );
    refresh_store(service, store, scope, limit).await;
    Ok(created)
}

/// Upload a CSV for the scope's entity kind, then refresh the store
/// regardless of the outcome: partial success (some rows imported, some
/// rejected) is expected and must be reflected immediately.
///
/// The returned [`FileDisposition`] tells the caller whether to clear the
/// file input (completed attempt) or retain it (pure transport failure).
pub async fn bulk_import_and_refresh<S>(
    service: &S,
    store: &mut RecordStore,
    scope: Scope,
    limit: u32,
    file_name: &str,
    bytes: Vec<u8>,
) -> (Result<BulkImportResult>, FileDisposition)
where
    S: RecordService + ?Sized,
{
    let outcome = service.bulk_import(scope.kind, file_name, bytes).await;
    let disposition = FileDisposition::for_outcome(&outcome);
    refresh_store(service, store, scope, limit).await;
    (outcome, disposition)
}
