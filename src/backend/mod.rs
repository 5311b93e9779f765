//! Backend dispatch
//!
//! Each `StoreKind` has exactly one handler. Adding a store kind means adding
//! a variant and a `LineageBackend` impl; call sites only see this module.

pub mod graph;

use std::time::Duration;
use crate::{Error, Result};
use crate::model::{ActiveTask, ChangeRecord, StoreHandle, StoreKind};
use crate::storage::SqliteBackend;

pub use graph::GraphStub;

/// Operations every lineage store kind supports.
pub trait LineageBackend {
    fn kind(&self) -> StoreKind;

    /// The task currently marked active, if any
    fn query_active_task(&self) -> Result<Option<ActiveTask>>;

    /// Append one change record, returning the backend-assigned id
    fn record_change(&self, record: &ChangeRecord) -> Result<i64>;
}

/// Build the handler for a located store.
pub fn open(handle: &StoreHandle, busy_timeout: Option<Duration>) -> Box<dyn LineageBackend> {
    match handle.kind {
        StoreKind::Relational => {
            Box::new(SqliteBackend::new(&handle.location).with_busy_timeout(busy_timeout))
        }
        StoreKind::GraphEmbedded => Box::new(GraphStub::new(&handle.location)),
    }
}

pub fn query_active_task(
    handle: Option<&StoreHandle>,
    busy_timeout: Option<Duration>,
) -> Result<Option<ActiveTask>> {
    let handle = handle.ok_or(Error::NotFound)?;
    open(handle, busy_timeout).query_active_task()
}

pub fn record_change(
    handle: Option<&StoreHandle>,
    record: &ChangeRecord,
    busy_timeout: Option<Duration>,
) -> Result<i64> {
    let handle = handle.ok_or(Error::NotFound)?;
    open(handle, busy_timeout).record_change(record)
}
