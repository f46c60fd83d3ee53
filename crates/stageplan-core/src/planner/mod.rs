//! High-level planner API over one immutable snapshot.
//!
//! The [`Planner`] is the entry point for every interface. It owns a
//! [`Snapshot`] loaded once from a [`SnapshotSource`](crate::source::SnapshotSource)
//! and answers queries by delegating to [`crate::schedule`]:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │    schedule     │    │    Snapshot     │
//! │ (unit_handlers, │───▶│ (resolver, ...  │───▶│ (units, specs,  │
//! │ report_handlers)│    │  reports)       │    │  supply)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Handlers resolve units by ID or display name, validate arguments and
//! return result types from [`crate::display`] that render as markdown.
//!
//! ## Submodules
//!
//! - [`builder`]: Creates [`Planner`] instances from a snapshot file
//! - [`unit_handlers`]: Per-unit queries (schedule, stage, availability, windows)
//! - [`report_handlers`]: Fleet-wide reports over a period
//!
//! # Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stageplan_core::{
//!     models::{Assignment, SizeClass, Snapshot, SpecTable, Unit},
//!     params::StageOn,
//!     Planner,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let specs = SpecTable::standard();
//! let mut unit = Unit::from_spec("u1", "DN-500", specs.get(SizeClass(500)).unwrap(), date(2024, 1, 1));
//! unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
//!
//! let planner = Planner::from_snapshot(Snapshot::new(specs, vec![unit], vec![]));
//! let status = planner.stage_on(&StageOn {
//!     unit: "DN-500".to_string(),
//!     day: date(2024, 1, 10),
//!     mode: Default::default(),
//! })?;
//! assert!(status.active.is_some());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod report_handlers;
pub mod unit_handlers;


pub use builder::PlannerBuilder;

use crate::{
    error::{PlannerError, Result},
    models::{Snapshot, SpecTable, SupplyRecord, Unit},
};

/// Main planner interface over a loaded snapshot.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) snapshot: Snapshot,
}

impl Planner {
    /// Creates a planner over an already loaded snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn units(&self) -> &[Unit] {
        &self.snapshot.units
    }

    pub fn specs(&self) -> &SpecTable {
        &self.snapshot.specs
    }

    pub fn supply(&self) -> &[SupplyRecord] {
        &self.snapshot.supply
    }

    /// Looks a unit up by ID or display name.
    pub(crate) fn require_unit(&self, key: &str) -> Result<&Unit> {
        self.snapshot
            .find_unit(key)
            .ok_or_else(|| PlannerError::UnitNotFound {
                id: key.to_string(),
            })
    }
}
