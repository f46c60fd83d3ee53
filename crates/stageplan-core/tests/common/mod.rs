use std::{fs, path::PathBuf};

use serde_json::Value;
use stageplan_core::{Planner, PlannerBuilder};
use tempfile::TempDir;

/// Writes `snapshot` to a temporary file and returns its path.
pub fn write_snapshot(snapshot: &Value) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("snapshot.json");
    fs::write(&path, snapshot.to_string()).expect("Failed to write snapshot");
    (temp_dir, path)
}

/// Helper function to create a test planner over `snapshot`
pub fn create_test_planner(snapshot: &Value) -> (TempDir, Planner) {
    let (temp_dir, path) = write_snapshot(snapshot);
    let planner = PlannerBuilder::new()
        .with_snapshot_path(Some(&path))
        .build()
        .expect("Failed to create planner");
    (temp_dir, planner)
}
