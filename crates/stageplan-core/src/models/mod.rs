//! Data models for units, assignments, size specs and the owned fleet.
//!
//! These are plain records matching what the persistence collaborator hands
//! over. They carry no scheduling behaviour of their own; stage math lives in
//! [`crate::schedule`] and presentation in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stageplan_core::models::{Assignment, SizeClass, SpecTable, StageDurations, Unit};
//!
//! let specs = SpecTable::standard();
//! let spec = specs.get(SizeClass(500)).expect("DN-500 is in the catalogue");
//!
//! let mut unit = Unit::from_spec("u1", "DN-500", spec, date(2024, 1, 1));
//! unit.assignments.push(
//!     Assignment::new("a1", date(2024, 2, 1))
//!         .with_override(StageDurations::new([1.0, 1.0, 5.0, 1.0, 1.0, 1.0]).unwrap()),
//! );
//! assert_eq!(unit.assignments.len(), 1);
//! ```

pub mod durations;
pub mod snapshot;
pub mod spec;
pub mod stage;
pub mod supply;
pub mod unit;


pub use durations::{RawDurations, StageDurations, MAX_STAGE_DAYS, STAGE_COUNT};
pub use snapshot::{Snapshot, SnapshotDocument};
pub use spec::{SizeClass, SizeSpec, SpecTable, VehicleCounts, VehicleKind};
pub use stage::{Stage, StageMode};
pub use supply::{SupplyLedger, SupplyRecord};
pub use unit::{Assignment, InventoryBatch, Unit};
