//! Storage Layer - SQLite lineage store
//!
//! Reads from:
//! - phase_state(id, current_task_id)
//! - tasks(task_id, title, plan_id)
//! - plans(plan_id, spec_id)
//!
//! Appends to:
//! - code_changes(task_id, file_path, symbol_fqn, change_type, tool_used,
//!   old_content_hash, new_content_hash, timestamp)

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteBackend;
