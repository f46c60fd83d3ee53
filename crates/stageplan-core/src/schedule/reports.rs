//! Period reports built on top of unit schedules.

use std::collections::BTreeSet;

use jiff::civil::Date;
use log::warn;
use serde::Serialize;

use super::{
    builder::{build_schedule, StageSegment},
    daily::{stage_in_schedule, unit_schedules, AssignmentSchedule},
    resolver::{effective_durations, ValidationNote},
    span::{union_days, DaySpan},
};
use crate::models::{SpecTable, StageMode, SupplyLedger, SupplyRecord, Unit, VehicleCounts};

/// Busy and rental days of one unit within a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitUtilization {
    pub unit_id: String,
    pub name: String,
    /// Later of the period start and the unit's delivery date
    pub from: Date,
    pub to: Date,
    pub total_days: i64,
    /// Days in any stage of the cycle
    pub busy_days: i64,
    /// Days in unload, work or load
    pub rental_days: i64,
    /// `busy_days / total_days` as a percentage, two decimals
    pub utilization: f64,
}

/// Per-unit utilization over `period`, highest first.
///
/// A unit's window starts at its delivery date when that falls inside the
/// period; units delivered after the period ends are omitted.
pub fn utilization(units: &[Unit], period: &DaySpan) -> Vec<UnitUtilization> {
    let mut notes = Vec::new();
    let mut report: Vec<UnitUtilization> = units
        .iter()
        .filter_map(|unit| {
            let window = DaySpan::new(period.start.max(unit.available_from), period.end)?;
            let mut busy = Vec::new();
            let mut rental = Vec::new();
            for schedule in unit_schedules(unit, &mut notes) {
                for segment in &schedule.schedule.segments {
                    let Some(clipped) = segment.span().intersect(&window) else {
                        continue;
                    };
                    busy.push(clipped);
                    if StageMode::Occupied.includes(segment.stage) {
                        rental.push(clipped);
                    }
                }
            }
            // Assignments stored before the write-time check may overlap
            let busy_days = union_days(busy);
            let rental_days = union_days(rental);
            let total_days = window.days();
            let ratio = busy_days as f64 / total_days as f64 * 100.0;
            Some(UnitUtilization {
                unit_id: unit.id.clone(),
                name: unit.name.clone(),
                from: window.start,
                to: window.end,
                total_days,
                busy_days,
                rental_days,
                utilization: (ratio * 100.0).round() / 100.0,
            })
        })
        .collect();

    report.sort_by(|a, b| {
        b.utilization
            .total_cmp(&a.utilization)
            .then_with(|| a.name.cmp(&b.name))
    });
    report
}

/// A segment of interest found inside a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageWindow {
    pub assignment_id: Option<String>,
    pub segment: StageSegment,
}

/// Every segment of `unit` in `mode` that overlaps `period`, chronologically.
///
/// This is the data behind rental-only (`Occupied`) and maintenance-only
/// calendars.
pub fn stage_windows(unit: &Unit, mode: StageMode, period: &DaySpan) -> Vec<StageWindow> {
    let mut notes = Vec::new();
    let mut windows: Vec<StageWindow> = unit_schedules(unit, &mut notes)
        .into_iter()
        .flat_map(|schedule| {
            let assignment_id = schedule.assignment_id;
            schedule
                .schedule
                .segments
                .into_iter()
                .filter(|segment| mode.includes(segment.stage) && segment.span().overlaps(period))
                .map(move |segment| StageWindow {
                    assignment_id: assignment_id.clone(),
                    segment,
                })
        })
        .collect();
    windows.sort_by_key(|w| (w.segment.start, w.segment.stage));
    windows
}

/// Headline figures for a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: DaySpan,
    /// Units with any stage overlapping the period
    pub units_in_work: usize,
    /// Vehicles of units with a transport stage in the period, each unit once
    pub transport: VehicleCounts,
    /// Owned fleet in service on the last day of the period
    pub owned_at_end: VehicleCounts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ValidationNote>,
}

/// Summarises `period`: units in work, transport breakdown and owned fleet.
pub fn period_summary(
    units: &[Unit],
    specs: &SpecTable,
    supply: &[SupplyRecord],
    period: &DaySpan,
) -> PeriodSummary {
    let mut notes = Vec::new();
    let mut units_in_work = 0;
    let mut transport = VehicleCounts::default();

    for unit in units.iter().filter(|u| !u.assignments.is_empty()) {
        let schedules = unit_schedules(unit, &mut notes);
        let segments = || schedules.iter().flat_map(|s| s.schedule.segments.iter());

        if segments().any(|s| s.span().overlaps(period)) {
            units_in_work += 1;
        }

        let moves_in_period = segments()
            .any(|s| s.stage.requires_transport() && s.span().overlaps(period));
        if moves_in_period {
            match specs.get(unit.size_class) {
                Some(spec) => transport += spec.vehicles,
                None => warn!(
                    "unit '{}' has unknown size class {}; excluded from transport breakdown",
                    unit.id, unit.size_class
                ),
            }
        }
    }

    PeriodSummary {
        period: *period,
        units_in_work,
        transport,
        owned_at_end: SupplyLedger::new(supply).owned_on(period.end),
        notes,
    }
}

/// Units in maintenance on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub day: Date,
    pub units: usize,
}

/// Number of units in maintenance on each day of `range`.
pub fn maintenance_load(units: &[Unit], range: &DaySpan) -> Vec<DailyCount> {
    let mut notes = Vec::new();
    let per_unit: Vec<Vec<AssignmentSchedule>> = units
        .iter()
        .map(|unit| unit_schedules(unit, &mut notes))
        .collect();

    range
        .iter_days()
        .map(|day| DailyCount {
            day,
            units: per_unit
                .iter()
                .filter(|schedules| {
                    schedules
                        .iter()
                        .any(|s| stage_in_schedule(s, day, StageMode::Maintenance).is_some())
                })
                .count(),
        })
        .collect()
}

/// Distinct customers named on any assignment, sorted; blank names are ignored.
pub fn customers(units: &[Unit]) -> Vec<String> {
    let names: BTreeSet<&str> = units
        .iter()
        .flat_map(|unit| &unit.assignments)
        .filter_map(|assignment| assignment.customer.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    names.into_iter().map(str::to_string).collect()
}

/// One assignment's rental as billed to its customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRental {
    pub unit_id: String,
    pub unit_name: String,
    pub assignment_id: String,
    pub site: Option<String>,
    /// Exact days of unload, work and load
    pub rental_days: f64,
    /// First day of unloading (or the first rental stage present)
    pub start: Date,
    /// Last day of loading (or the last rental stage present)
    pub end: Date,
}

/// Rentals of `customer` whose rental stages overlap `period`, by start date.
///
/// Assignments with no rental stage at all are left out.
pub fn customer_rentals(
    units: &[Unit],
    customer: &str,
    period: &DaySpan,
    notes: &mut Vec<ValidationNote>,
) -> Vec<CustomerRental> {
    let customer = customer.trim();
    let mut rows = Vec::new();

    for unit in units {
        let booked = unit
            .assignments
            .iter()
            .filter(|a| a.customer.as_deref().map(str::trim) == Some(customer));
        for assignment in booked {
            let resolved = effective_durations(unit, Some(assignment));
            notes.extend(resolved.notes);
            let schedule = build_schedule(&resolved.durations, assignment.start);
            let rental: Vec<&StageSegment> = schedule
                .segments
                .iter()
                .filter(|segment| StageMode::Occupied.includes(segment.stage))
                .collect();
            let (Some(first), Some(last)) = (rental.first(), rental.last()) else {
                continue;
            };
            let Some(rental_span) = DaySpan::new(first.start, last.end) else {
                continue;
            };
            if !rental_span.overlaps(period) {
                continue;
            }
            rows.push(CustomerRental {
                unit_id: unit.id.clone(),
                unit_name: unit.name.clone(),
                assignment_id: assignment.id.clone(),
                site: assignment.site.clone(),
                rental_days: rental.iter().map(|segment| segment.duration).sum(),
                start: rental_span.start,
                end: rental_span.end,
            });
        }
    }

    rows.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.unit_name.cmp(&b.unit_name)));
    rows
}
