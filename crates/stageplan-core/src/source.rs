//! Snapshot sources.
//!
//! The planner never owns persistence; it asks a [`SnapshotSource`] for an
//! immutable [`Snapshot`] once and computes everything from that.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    error::{PlannerError, Result},
    models::{Snapshot, SnapshotDocument},
};

/// Anything that can hand over a consistent snapshot of units and supply.
pub trait SnapshotSource {
    /// Loads the snapshot.
    ///
    /// # Errors
    ///
    /// Implementations report unreadable or malformed data as a
    /// [`PlannerError`].
    fn load(&self) -> Result<Snapshot>;
}

/// A snapshot stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
    allow_missing: bool,
}

impl JsonSnapshotSource {
    /// A source that requires the file to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            allow_missing: false,
        }
    }

    /// Treats a missing file as an empty snapshot.
    pub fn allow_missing(mut self) -> Self {
        self.allow_missing = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load(&self) -> Result<Snapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound && self.allow_missing => {
                info!(
                    "No snapshot at {}, starting from an empty one",
                    self.path.display()
                );
                return Ok(Snapshot::default());
            }
            Err(e) => return Err(PlannerError::file_system(&self.path, e)),
        };

        let document: SnapshotDocument = serde_json::from_str(&contents)?;
        let snapshot = Snapshot::from_document(document)?;
        debug!(
            "Loaded snapshot from {}: {} units, {} supply records, {} size specs",
            self.path.display(),
            snapshot.units.len(),
            snapshot.supply.len(),
            snapshot.specs.len()
        );
        Ok(snapshot)
    }
}
