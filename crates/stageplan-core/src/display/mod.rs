//! Display formatting for models, collections and query results.
//!
//! Domain models implement `Display` directly; collections and query results
//! are wrapped in newtypes that add headings, tables and empty-case messages.
//! Every formatter produces markdown for the terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Unit, Stage)  │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! No formatter derives stage math of its own; everything shown comes from
//! [`crate::schedule`].
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Units, Customers, UtilizationReport, ...)
//! - [`results`]: Query results (UnitSchedule, DayStatus, RentalReport) and report formatting
//! - [`datetime`]: Date formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use jiff::civil::date;
//! use stageplan_core::{display::DayRange, schedule::DaySpan};
//!
//! let span = DaySpan::new(date(2024, 3, 1), date(2024, 3, 3)).unwrap();
//! assert_eq!(format!("{}", DayRange(&span)), "2024-03-01 – 2024-03-03 (3 days)");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Customers, MaintenanceLoad, StageWindows, Units, UtilizationReport};
pub use datetime::{DayRange, ShortDate};
pub use results::{DayStatus, RentalReport, UnitSchedule};
