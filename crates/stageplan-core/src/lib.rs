//! Core library for the stageplan equipment scheduler.
//!
//! Units of size-classed mobile equipment cycle through six fixed stages:
//! transit to site, unloading, work, loading, transit to maintenance and
//! maintenance. This crate derives when each stage happens, checks whether a
//! new assignment fits a unit's calendar and projects how many support
//! vehicles each day needs beyond the owned fleet.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): units, assignments, size specs and supply
//!   records as handed over by the persistence collaborator
//! - **Schedule** ([`schedule`]): the only place stage math happens
//! - **Display** ([`display`]): markdown formatting of models and results
//! - **Planner** ([`planner`]): query handlers over one loaded snapshot
//! - **Source** ([`source`]): where snapshots come from
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use stageplan_core::{
//!     models::{Assignment, SizeClass, Snapshot, SpecTable, StageDurations, Unit},
//!     params::{CheckAvailability, Period},
//!     Planner,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let specs = SpecTable::standard();
//! let spec = specs.get(SizeClass(500)).unwrap();
//! let mut unit = Unit::from_spec("u1", "DN-500", spec, date(2024, 1, 1));
//! unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
//!
//! let planner = Planner::from_snapshot(Snapshot::new(specs, vec![unit], vec![]));
//!
//! // An all-zero cycle occupies no days and never conflicts
//! let verdict = planner.check_availability(&CheckAvailability {
//!     unit: "u1".to_string(),
//!     start: date(2024, 1, 20),
//!     durations: Some(StageDurations::ZERO.into()),
//! })?;
//! assert!(verdict.is_accepted());
//!
//! let demand = planner.transport_demand(&Period {
//!     from: date(2024, 1, 1),
//!     to: date(2024, 1, 31),
//! })?;
//! println!("{demand}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod schedule;
pub mod source;

// Re-export commonly used types
pub use display::{
    Customers, DayStatus, MaintenanceLoad, RentalReport, StageWindows, UnitSchedule, Units,
    UtilizationReport,
};
pub use error::{DurationError, PlannerError, Rejection, Result};
pub use models::{
    Assignment, SizeClass, Snapshot, SpecTable, Stage, StageDurations, StageMode, SupplyRecord,
    Unit, VehicleCounts,
};
pub use params::{
    CheckAvailability, CustomerRentals, ListWindows, Period, ShowSchedule, StageOn,
};
pub use planner::{Planner, PlannerBuilder};
pub use source::{JsonSnapshotSource, SnapshotSource};
