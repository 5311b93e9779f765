//! SQLite lineage backend

use std::path::PathBuf;
use std::time::Duration;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use crate::Result;
use crate::backend::LineageBackend;
use crate::model::{ActiveTask, ChangeRecord, StoreKind};
use super::schema;

/// SQLite-backed lineage store.
///
/// Holds only the path; every operation opens its own connection and drops
/// it before returning, so nothing is pooled across calls.
#[derive(Debug, Clone)]
pub struct SqliteBackend {
    path: PathBuf,
    busy_timeout: Option<Duration>,
}

impl SqliteBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: None,
        }
    }

    /// Override how long to wait on a locked store (rusqlite waits 5s by default)
    pub fn with_busy_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Open an existing store file. Never creates one.
    fn connect(&self, flags: OpenFlags) -> Result<Connection> {
        let conn = Connection::open_with_flags(&self.path, flags | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
        if let Some(timeout) = self.busy_timeout {
            conn.busy_timeout(timeout)?;
        }
        Ok(conn)
    }

    fn row_to_active_task(row: &rusqlite::Row) -> rusqlite::Result<ActiveTask> {
        Ok(ActiveTask {
            task_id: row.get(0)?,
            title: row.get(1)?,
            plan_id: row.get(2)?,
            spec_id: row.get(3)?,
        })
    }
}

impl LineageBackend for SqliteBackend {
    fn kind(&self) -> StoreKind {
        StoreKind::Relational
    }

    fn query_active_task(&self) -> Result<Option<ActiveTask>> {
        let conn = self.connect(OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        conn.query_row(schema::SELECT_ACTIVE_TASK, [], Self::row_to_active_task)
            .optional()
            .map_err(Into::into)
    }

    fn record_change(&self, record: &ChangeRecord) -> Result<i64> {
        let mut conn = self.connect(OpenFlags::SQLITE_OPEN_READ_WRITE)?;

        // Dropping an uncommitted transaction rolls it back
        let tx = conn.transaction()?;
        tx.execute(
            schema::INSERT_CODE_CHANGE,
            params![
                record.task_id,
                record.file_path,
                record.symbol_fqn,
                record.change_type.as_str(),
                record.tool_used,
                record.old_content_hash,
                record.new_content_hash,
                record.timestamp,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }
}
