//! Stage math: the single place where schedules are derived.
//!
//! Every consumer (daily lookups, availability checks, the transport
//! aggregator and the period reports) goes through the same pipeline:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    resolver     │    │     builder     │    │  daily / demand │
//! │ (effective      │───▶│ (durations onto │───▶│  availability / │
//! │  durations)     │    │  the calendar)  │    │  reports        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! A stage with a fractional duration occupies `ceil(duration)` whole
//! calendar days; the exact value is kept on the segment. Zero-duration
//! stages never appear in a schedule. All spans are inclusive on both ends.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use stageplan_core::{models::StageDurations, schedule::build_schedule};
//!
//! let durations = StageDurations::new([3.0, 1.5, 14.0, 1.5, 3.0, 4.0]).unwrap();
//! let schedule = build_schedule(&durations, date(2024, 1, 1));
//!
//! assert_eq!(schedule.raw_total(), 27.0);
//! assert_eq!(schedule.span().unwrap().end, date(2024, 1, 28));
//! ```

pub mod availability;
pub mod builder;
pub mod daily;
pub mod demand;
pub mod reports;
pub mod resolver;
pub mod span;

#[cfg(test)]
mod tests;

pub use availability::{check_availability, occupied_span, Availability, Verdict};
pub use builder::{build_schedule, Schedule, StageSegment};
pub use daily::{stage_in_schedule, stage_on, unit_schedules, ActiveStage, AssignmentSchedule};
pub use demand::{transport_demand, DailyTransport, DemandSeries, SkippedUnit, TransportDemand};
pub use reports::{
    customer_rentals, customers, maintenance_load, period_summary, stage_windows, utilization,
    CustomerRental, DailyCount, PeriodSummary, StageWindow, UnitUtilization,
};
pub use resolver::{effective_durations, DurationSource, Resolved, ValidationNote};
pub use span::{union_days, DaySpan};
