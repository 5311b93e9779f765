//! Lineage store statements
//!
//! The store is created and migrated elsewhere; this crate only reads the
//! phase state and appends to `code_changes`.

/// Active task: the singleton phase-state row joined to its task and plan
pub const SELECT_ACTIVE_TASK: &str = r#"
SELECT ps.current_task_id, t.title, t.plan_id, p.spec_id
FROM phase_state ps
LEFT JOIN tasks t ON ps.current_task_id = t.task_id
LEFT JOIN plans p ON t.plan_id = p.plan_id
WHERE ps.id = 1 AND ps.current_task_id IS NOT NULL
"#;

/// Append one row to the change log
pub const INSERT_CODE_CHANGE: &str = r#"
INSERT INTO code_changes
    (task_id, file_path, symbol_fqn, change_type, tool_used,
     old_content_hash, new_content_hash, timestamp)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

/// Shape of the tables this crate touches, for building fixture stores
#[cfg(test)]
pub const CREATE_FIXTURE_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS plans (
        plan_id TEXT PRIMARY KEY,
        spec_id TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tasks (
        task_id TEXT PRIMARY KEY,
        title TEXT,
        plan_id TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS phase_state (
        id INTEGER PRIMARY KEY,
        current_task_id TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS code_changes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task_id TEXT NOT NULL,
        file_path TEXT NOT NULL,
        symbol_fqn TEXT,
        change_type TEXT NOT NULL,
        tool_used TEXT NOT NULL,
        old_content_hash TEXT,
        new_content_hash TEXT,
        timestamp TEXT NOT NULL
    )
    "#,
];
