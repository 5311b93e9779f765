//! Store discovery
//!
//! Walks from a start directory up to the filesystem root looking for
//! `<dir>/.spectrena/lineage.db` (SQLite) or `<dir>/.spectrena/lineage/`
//! (embedded store). The nearest directory wins; within one directory the
//! SQLite file wins. Nothing is cached between calls.

use crate::{Error, Result};
use crate::model::{StoreHandle, StoreKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MARKER_DIR: &str = ".spectrena";
pub const DEFAULT_DATABASE_FILE: &str = "lineage.db";
pub const DEFAULT_EMBEDDED_DIR: &str = "lineage";

/// Names that make up the on-disk store layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreLayout {
    pub marker_dir: String,
    pub database_file: String,
    pub embedded_dir: String,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self {
            marker_dir: DEFAULT_MARKER_DIR.to_string(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            embedded_dir: DEFAULT_EMBEDDED_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreLocator {
    layout: StoreLayout,
}

impl StoreLocator {
    pub fn new(layout: StoreLayout) -> Self {
        Self { layout }
    }

    /// Search from the current working directory.
    pub fn find(&self) -> Option<StoreHandle> {
        self.locate().ok()
    }

    /// Search from `start`, which may be relative to the working directory.
    ///
    /// A start directory that does not exist finds nothing.
    pub fn find_from(&self, start: &Path) -> Option<StoreHandle> {
        self.locate_from(start).ok()
    }

    pub fn locate(&self) -> Result<StoreHandle> {
        let cwd = std::env::current_dir()?;
        self.locate_from(&cwd)
    }

    pub fn locate_from(&self, start: &Path) -> Result<StoreHandle> {
        // Resolve `..` and symlinks first so ancestors() only walks upward
        let start = std::fs::canonicalize(start)?;

        // ancestors() yields `start` itself first, then each parent up to the root
        for candidate in start.ancestors() {
            if let Some(handle) = self.check_dir(candidate) {
                tracing::debug!(kind = %handle.kind, path = %handle.location.display(), "found lineage store");
                return Ok(handle);
            }
        }

        Err(Error::NotFound)
    }

    fn check_dir(&self, dir: &Path) -> Option<StoreHandle> {
        let marker = dir.join(&self.layout.marker_dir);

        let database = marker.join(&self.layout.database_file);
        if database.is_file() {
            return Some(StoreHandle::new(StoreKind::Relational, database));
        }

        let embedded = marker.join(&self.layout.embedded_dir);
        if embedded.is_dir() {
            return Some(StoreHandle::new(StoreKind::GraphEmbedded, embedded));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch_db(dir: &Path) {
        let marker = dir.join(DEFAULT_MARKER_DIR);
        fs::create_dir_all(&marker).unwrap();
        fs::write(marker.join(DEFAULT_DATABASE_FILE), b"").unwrap();
    }

    fn make_embedded(dir: &Path) {
        fs::create_dir_all(dir.join(DEFAULT_MARKER_DIR).join(DEFAULT_EMBEDDED_DIR)).unwrap();
    }

    #[test]
    fn test_finds_store_in_start_dir() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        touch_db(&root);

        let handle = StoreLocator::default().find_from(&root).unwrap();
        assert_eq!(handle.kind, StoreKind::Relational);
        assert_eq!(handle.location, root.join(".spectrena").join("lineage.db"));
    }

    #[test]
    fn test_finds_store_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        touch_db(&root);
        let nested = root.join("src").join("auth");
        fs::create_dir_all(&nested).unwrap();

        let handle = StoreLocator::default().find_from(&nested).unwrap();
        assert_eq!(handle.location, root.join(".spectrena").join("lineage.db"));
    }

    #[test]
    fn test_nearest_wins_regardless_of_kind() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        touch_db(&root);
        let nested = root.join("pkg");
        make_embedded(&nested);

        let handle = StoreLocator::default().find_from(&nested).unwrap();
        assert_eq!(handle.kind, StoreKind::GraphEmbedded);
        assert_eq!(handle.location, nested.join(".spectrena").join("lineage"));
    }

    #[test]
    fn test_relational_wins_tie() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        touch_db(&root);
        make_embedded(&root);

        let handle = StoreLocator::default().find_from(&root).unwrap();
        assert_eq!(handle.kind, StoreKind::Relational);
    }

    // Marker name unlikely to exist anywhere above the temp dir
    fn isolated_layout() -> StoreLayout {
        StoreLayout {
            marker_dir: ".lineage-locator-test".to_string(),
            ..StoreLayout::default()
        }
    }

    #[test]
    fn test_directory_named_like_db_is_not_a_store() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::create_dir_all(root.join(".lineage-locator-test").join("lineage.db")).unwrap();

        assert!(StoreLocator::new(isolated_layout()).find_from(&root).is_none());
    }

    #[test]
    fn test_file_named_like_embedded_dir_is_not_a_store() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let marker = root.join(".lineage-locator-test");
        fs::create_dir_all(&marker).unwrap();
        fs::write(marker.join("lineage"), b"").unwrap();

        assert!(StoreLocator::new(isolated_layout()).find_from(&root).is_none());
    }

    #[test]
    fn test_not_found() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let locator = StoreLocator::new(isolated_layout());
        assert!(locator.find_from(&root).is_none());
        assert!(matches!(locator.locate_from(&root), Err(Error::NotFound)));
    }

    #[test]
    fn test_custom_layout() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let marker = root.join(".trail");
        fs::create_dir_all(&marker).unwrap();
        fs::write(marker.join("changes.sqlite"), b"").unwrap();

        let locator = StoreLocator::new(StoreLayout {
            marker_dir: ".trail".to_string(),
            database_file: "changes.sqlite".to_string(),
            ..StoreLayout::default()
        });
        let handle = locator.find_from(&root).unwrap();
        assert_eq!(handle.location, marker.join("changes.sqlite"));
    }

    #[test]
    fn test_parent_components_only_walk_upward() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let child = root.join("child");
        let marker = child.join(".lineage-locator-test");
        fs::create_dir_all(&marker).unwrap();
        fs::write(marker.join("lineage.db"), b"").unwrap();

        // `<root>/child/..` is `<root>`; its child must not be searched
        let locator = StoreLocator::new(isolated_layout());
        assert!(locator.find_from(&child.join("..")).is_none());
        assert!(locator.find_from(&child.join("sub").join("..")).is_none());

        fs::create_dir_all(child.join("sub")).unwrap();
        let handle = locator.find_from(&child.join("sub").join("..")).unwrap();
        assert_eq!(handle.location, marker.join("lineage.db"));
    }

    #[test]
    fn test_missing_start_dir() {
        let tmp = TempDir::new().unwrap();
        touch_db(tmp.path());

        let locator = StoreLocator::default();
        assert!(locator.find_from(&tmp.path().join("gone")).is_none());
        assert!(matches!(locator.locate_from(&tmp.path().join("gone")), Err(Error::Io(_))));
    }
}
