//! Lineage data model
//!
//! - `StoreHandle`: a resolved (kind, location) pair
//! - `ActiveTask`: the task pointed to by the store's phase state
//! - `NewChange`: what a caller asks to record
//! - `ChangeRecord`: the fingerprinted, timestamped row that gets stored

use crate::{Error, Result};
use crate::digest;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Kind of lineage store found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Single SQLite database file
    Relational,
    /// Directory holding an embedded graph/document store
    GraphEmbedded,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Relational => "relational",
            StoreKind::GraphEmbedded => "graph_embedded",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A located lineage store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreHandle {
    pub kind: StoreKind,
    pub location: PathBuf,
}

impl StoreHandle {
    pub fn new(kind: StoreKind, location: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            location: location.into(),
        }
    }
}

/// The currently active task, joined with its plan and spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTask {
    pub task_id: String,
    pub title: Option<String>,
    pub plan_id: Option<String>,
    pub spec_id: Option<String>,
}

/// What kind of edit a change record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Modify,
    Create,
    Delete,
    Rename,
}

impl ChangeType {
    /// Get the string representation stored in the `change_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Modify => "modify",
            ChangeType::Create => "create",
            ChangeType::Delete => "delete",
            ChangeType::Rename => "rename",
        }
    }
}

impl FromStr for ChangeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "modify" => Ok(ChangeType::Modify),
            "create" => Ok(ChangeType::Create),
            "delete" => Ok(ChangeType::Delete),
            "rename" => Ok(ChangeType::Rename),
            _ => Err(Error::InvalidChangeType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A change as reported by the editing tool, before fingerprinting.
#[derive(Debug, Clone)]
pub struct NewChange {
    /// Task the edit belongs to, e.g. `CORE-001-T01`
    pub task_id: String,
    /// Path of the edited file
    pub file_path: String,
    pub change_type: ChangeType,
    /// Name of the tool that made the edit
    pub tool_used: String,
    /// Fully qualified symbol, e.g. `src/auth.py:User.authenticate`
    pub symbol_fqn: Option<String>,
    /// Content before the edit; only its digest is ever stored
    pub old_content: Option<String>,
    /// Content after the edit; only its digest is ever stored
    pub new_content: Option<String>,
}

impl NewChange {
    /// Create a change with the required fields
    pub fn new(
        task_id: impl Into<String>,
        file_path: impl Into<String>,
        change_type: ChangeType,
        tool_used: impl Into<String>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            file_path: file_path.into(),
            change_type,
            tool_used: tool_used.into(),
            symbol_fqn: None,
            old_content: None,
            new_content: None,
        }
    }

    pub fn with_symbol(mut self, symbol_fqn: impl Into<String>) -> Self {
        self.symbol_fqn = Some(symbol_fqn.into());
        self
    }

    pub fn with_old_content(mut self, content: impl Into<String>) -> Self {
        self.old_content = Some(content.into());
        self
    }

    pub fn with_new_content(mut self, content: impl Into<String>) -> Self {
        self.new_content = Some(content.into());
        self
    }
}

/// One append-only row of the change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub task_id: String,
    pub file_path: String,
    pub symbol_fqn: Option<String>,
    pub change_type: ChangeType,
    pub tool_used: String,
    pub old_content_hash: Option<String>,
    pub new_content_hash: Option<String>,
    /// RFC 3339 UTC instant, e.g. `2026-10-18T09:30:00.123456+00:00`
    pub timestamp: String,
}

impl ChangeRecord {
    /// Fingerprint the contents and stamp the current time.
    pub fn from_change(change: NewChange) -> Self {
        Self {
            old_content_hash: digest::digest(change.old_content.as_deref()),
            new_content_hash: digest::digest(change.new_content.as_deref()),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            task_id: change.task_id,
            file_path: change.file_path,
            symbol_fqn: change.symbol_fqn,
            change_type: change.change_type,
            tool_used: change.tool_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_type_roundtrip() {
        for kind in &[ChangeType::Modify, ChangeType::Create, ChangeType::Delete, ChangeType::Rename] {
            let parsed: ChangeType = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn test_change_type_case_insensitive() {
        assert_eq!(ChangeType::from_str("MODIFY").unwrap(), ChangeType::Modify);
        assert!(matches!(
            ChangeType::from_str("move"),
            Err(Error::InvalidChangeType(_))
        ));
    }

    #[test]
    fn test_record_from_change() {
        let change = NewChange::new("CORE-001-T01", "src/auth.py", ChangeType::Modify, "replace_symbol_body")
            .with_symbol("src/auth.py:User.authenticate")
            .with_new_content("hello");

        let record = ChangeRecord::from_change(change);
        assert_eq!(record.task_id, "CORE-001-T01");
        assert_eq!(record.old_content_hash, None);
        assert_eq!(record.new_content_hash.as_deref(), Some("2cf24dba5fb0a30e"));
        assert!(record.timestamp.ends_with("+00:00"));
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }
}
