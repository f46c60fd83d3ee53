//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    source::{JsonSnapshotSource, SnapshotSource},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    snapshot_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            snapshot_path: None,
        }
    }

    /// Sets a custom snapshot file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stageplan/snapshot.json` or
    /// `~/.local/share/stageplan/snapshot.json`
    pub fn with_snapshot_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.snapshot_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the snapshot and builds the planner.
    ///
    /// An explicitly configured file must exist. A missing file at the
    /// default location yields an empty snapshot with the standard spec table.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::XdgDirectory` if the default location cannot be
    /// determined, `PlannerError::FileSystem` if the file cannot be read and
    /// `PlannerError::Serialization` or `PlannerError::InvalidInput` if its
    /// contents are malformed.
    pub fn build(self) -> Result<Planner> {
        let source = match self.snapshot_path {
            Some(path) => JsonSnapshotSource::new(path),
            None => JsonSnapshotSource::new(Self::default_snapshot_path()?).allow_missing(),
        };
        debug!("Loading snapshot from {}", source.path().display());
        Ok(Planner::from_snapshot(source.load()?))
    }

    /// Builds a planner from any snapshot source.
    ///
    /// # Errors
    ///
    /// Propagates whatever the source reports.
    pub fn build_from(source: &impl SnapshotSource) -> Result<Planner> {
        Ok(Planner::from_snapshot(source.load()?))
    }

    /// Returns the default snapshot path following XDG Base Directory
    /// specification.
    fn default_snapshot_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stageplan")
            .place_data_file("snapshot.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
