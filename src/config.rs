use crate::locator::{StoreLayout, DEFAULT_DATABASE_FILE, DEFAULT_EMBEDDED_DIR, DEFAULT_MARKER_DIR};
use crate::recorder::Recorder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageConfig {
    pub marker_dir: String,
    pub database_file: String,
    pub embedded_dir: String,
    pub busy_timeout_ms: Option<u64>,
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            marker_dir: DEFAULT_MARKER_DIR.to_string(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            embedded_dir: DEFAULT_EMBEDDED_DIR.to_string(),
            busy_timeout_ms: None,
        }
    }
}

impl LineageConfig {
    pub fn layout(&self) -> StoreLayout {
        StoreLayout {
            marker_dir: self.marker_dir.clone(),
            database_file: self.database_file.clone(),
            embedded_dir: self.embedded_dir.clone(),
        }
    }

    pub fn busy_timeout(&self) -> Option<Duration> {
        self.busy_timeout_ms.map(Duration::from_millis)
    }

    /// A recorder using this layout, searching from `origin` or the working directory
    pub fn recorder(&self, origin: Option<&Path>) -> Recorder {
        let recorder = match origin {
            Some(dir) => Recorder::from_dir(dir),
            None => Recorder::new(),
        };
        recorder
            .with_layout(self.layout())
            .with_busy_timeout(self.busy_timeout())
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("lineage.toml")
}

/// Load the config file; a missing file yields `None`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<LineageConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: LineageConfig = toml::from_str(&contents)
        .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}
