//! Best-effort lineage facade
//!
//! Every method re-locates the store, dispatches to its backend and turns
//! any failure into `None` plus a log line. Nothing here can fail the
//! caller's edit.

use std::path::PathBuf;
use std::time::Duration;
use crate::{Error, Result};
use crate::backend;
use crate::locator::{StoreLayout, StoreLocator};
use crate::model::{ActiveTask, ChangeRecord, NewChange, StoreHandle};

/// Entry point for editing tools.
///
/// Holds configuration only. The store handle is resolved again on every
/// call, so a changed working directory or a store created mid-session is
/// picked up.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    origin: Option<PathBuf>,
    locator: StoreLocator,
    busy_timeout: Option<Duration>,
}

impl Recorder {
    /// Search from the working directory at the time of each call
    pub fn new() -> Self {
        Self::default()
    }

    /// Search from a fixed directory instead of the working directory
    pub fn from_dir(origin: impl Into<PathBuf>) -> Self {
        Self {
            origin: Some(origin.into()),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: StoreLayout) -> Self {
        self.locator = StoreLocator::new(layout);
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.busy_timeout = timeout;
        self
    }

    fn locate(&self) -> Result<StoreHandle> {
        match &self.origin {
            Some(origin) => self.locator.locate_from(origin),
            None => self.locator.locate(),
        }
    }

    fn resolve(&self) -> Option<StoreHandle> {
        match self.locate() {
            Ok(handle) => Some(handle),
            Err(Error::NotFound) => None,
            Err(e) => {
                tracing::debug!(error = %e, "could not resolve search origin");
                None
            }
        }
    }

    /// The nearest lineage store, if any
    pub fn find_store(&self) -> Option<StoreHandle> {
        self.resolve()
    }

    /// The task currently marked active, if a store is reachable
    pub fn active_task(&self) -> Option<ActiveTask> {
        let handle = self.resolve();
        match backend::query_active_task(handle.as_ref(), self.busy_timeout) {
            Ok(task) => task,
            Err(Error::NotFound) => {
                tracing::debug!("no lineage store found, no active task");
                None
            }
            Err(Error::BackendUnimplemented(kind)) => {
                tracing::debug!(%kind, "active task lookup not yet implemented for this store");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "error querying active task");
                None
            }
        }
    }

    /// Record one change; returns the stored row id
    pub fn record(&self, change: NewChange) -> Option<i64> {
        let Some(handle) = self.resolve() else {
            tracing::debug!("no lineage store found, skipping change recording");
            return None;
        };

        let record = ChangeRecord::from_change(change);
        match backend::record_change(Some(&handle), &record, self.busy_timeout) {
            Ok(id) => {
                tracing::info!(
                    task_id = %record.task_id,
                    tool = %record.tool_used,
                    path = %record.file_path,
                    id,
                    "recorded change"
                );
                Some(id)
            }
            Err(Error::BackendUnimplemented(kind)) => {
                tracing::debug!(%kind, "change recording not yet implemented for this store");
                None
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    task_id = %record.task_id,
                    path = %record.file_path,
                    "failed to record change to lineage store"
                );
                None
            }
        }
    }
}
