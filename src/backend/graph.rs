//! Embedded graph store placeholder
//!
//! The directory marker is recognised so it is not mistaken for "no store",
//! but no query protocol exists for it yet. Nothing here touches the disk.

use std::path::PathBuf;
use crate::{Error, Result};
use crate::backend::LineageBackend;
use crate::model::{ActiveTask, ChangeRecord, StoreKind};

#[derive(Debug, Clone)]
pub struct GraphStub {
    location: PathBuf,
}

impl GraphStub {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    fn unsupported(&self) -> Error {
        tracing::debug!(path = %self.location.display(), "embedded lineage store is not supported yet");
        Error::BackendUnimplemented(self.kind())
    }
}

impl LineageBackend for GraphStub {
    fn kind(&self) -> StoreKind {
        StoreKind::GraphEmbedded
    }

    fn query_active_task(&self) -> Result<Option<ActiveTask>> {
        Err(self.unsupported())
    }

    fn record_change(&self, _record: &ChangeRecord) -> Result<i64> {
        Err(self.unsupported())
    }
}
