//! # Lineage - change-lineage recorder for code edits
//!
//! Ties every edit made by an editing toolset to the task that caused it.
//!
//! Lineage provides:
//! - Upward discovery of a lineage store from any working directory
//! - Backend dispatch over store kinds (SQLite, embedded graph placeholder)
//! - Append-only change records with truncated SHA-256 content fingerprints
//! - Best-effort semantics: a missing or broken store never fails the caller

pub mod model;
pub mod digest;
pub mod locator;
pub mod storage;
pub mod backend;
pub mod recorder;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{ActiveTask, ChangeRecord, ChangeType, NewChange, StoreHandle, StoreKind};
pub use locator::{StoreLayout, StoreLocator};
pub use recorder::Recorder;
pub use storage::SqliteBackend;

/// Result type alias for Lineage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Lineage operations.
///
/// These never escape the public facade; they exist so the layers below it
/// can tell the causes apart in their logs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No lineage store found")]
    NotFound,

    #[error("Backend not implemented: {0}")]
    BackendUnimplemented(StoreKind),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid change type: {0}")]
    InvalidChangeType(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Find the lineage store nearest to the current working directory.
pub fn find_lineage_store() -> Option<StoreHandle> {
    Recorder::new().find_store()
}

/// The task currently marked active in the nearest lineage store, if any.
pub fn get_active_task() -> Option<ActiveTask> {
    Recorder::new().active_task()
}

/// Record a change in the nearest lineage store.
///
/// Returns the identifier of the stored row, or `None` when recording is not
/// available for any reason.
pub fn record_change(change: NewChange) -> Option<i64> {
    Recorder::new().record(change)
}
