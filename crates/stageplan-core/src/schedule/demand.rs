//! Daily support-vehicle demand reconciled against the owned fleet.

use jiff::civil::Date;
use log::{debug, warn};
use serde::Serialize;

use super::{
    daily::{stage_in_schedule, unit_schedules, AssignmentSchedule},
    resolver::ValidationNote,
    span::DaySpan,
};
use crate::models::{
    SizeClass, SpecTable, StageMode, SupplyLedger, SupplyRecord, Unit, VehicleCounts, VehicleKind,
};

/// Vehicle figures for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTransport {
    pub day: Date,
    /// Vehicles required by units in transport stages
    pub demand: VehicleCounts,
    /// Owned fleet in service that day
    pub owned: VehicleCounts,
    /// Part of the demand covered by the owned fleet
    pub owned_applied: VehicleCounts,
    /// Shortfall to be sourced externally
    pub external: VehicleCounts,
}

/// A unit left out of aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedUnit {
    pub unit_id: String,
    pub size_class: SizeClass,
}

/// Three parallel daily series for one vehicle kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandSeries {
    pub kind: VehicleKind,
    pub days: Vec<Date>,
    pub demand: Vec<u32>,
    pub owned_applied: Vec<u32>,
    pub external: Vec<u32>,
}

/// Result of [`transport_demand`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportDemand {
    pub range: DaySpan,
    pub days: Vec<DailyTransport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_units: Vec<SkippedUnit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ValidationNote>,
}

impl TransportDemand {
    /// Demand, owned-applied and external series for one vehicle kind.
    pub fn series(&self, kind: VehicleKind) -> DemandSeries {
        DemandSeries {
            kind,
            days: self.days.iter().map(|d| d.day).collect(),
            demand: self.days.iter().map(|d| d.demand.get(kind)).collect(),
            owned_applied: self.days.iter().map(|d| d.owned_applied.get(kind)).collect(),
            external: self.days.iter().map(|d| d.external.get(kind)).collect(),
        }
    }

    /// Figures for a single day of the range.
    pub fn on(&self, day: Date) -> Option<&DailyTransport> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Largest daily demand per vehicle kind.
    pub fn peak_demand(&self) -> VehicleCounts {
        self.days.iter().fold(VehicleCounts::default(), |acc, d| VehicleCounts {
            tractors: acc.tractors.max(d.demand.tractors),
            trailers: acc.trailers.max(d.demand.trailers),
            low_loaders: acc.low_loaders.max(d.demand.low_loaders),
        })
    }

    /// Largest daily external need per vehicle kind.
    pub fn peak_external(&self) -> VehicleCounts {
        self.days.iter().fold(VehicleCounts::default(), |acc, d| VehicleCounts {
            tractors: acc.tractors.max(d.external.tractors),
            trailers: acc.trailers.max(d.external.trailers),
            low_loaders: acc.low_loaders.max(d.external.low_loaders),
        })
    }
}

struct UnitDemand {
    vehicles: VehicleCounts,
    schedules: Vec<AssignmentSchedule>,
}

/// Projects daily support-vehicle demand over `range`.
///
/// Every assignment of every unit contributes its size class's vehicle
/// counts on each day it is in a transport stage. Units without
/// assignments contribute nothing. Units whose size class is missing from
/// `specs` are skipped and reported. The owned fleet on a day is the sum of
/// all supply records dated on or before it; demand beyond it is external.
pub fn transport_demand(
    range: &DaySpan,
    units: &[Unit],
    specs: &SpecTable,
    supply: &[SupplyRecord],
) -> TransportDemand {
    let mut notes = Vec::new();
    let mut skipped_units = Vec::new();
    let mut active = Vec::new();

    for unit in units {
        let Some(spec) = specs.get(unit.size_class) else {
            warn!(
                "unit '{}' has unknown size class {}; excluded from transport demand",
                unit.id, unit.size_class
            );
            skipped_units.push(SkippedUnit {
                unit_id: unit.id.clone(),
                size_class: unit.size_class,
            });
            continue;
        };
        if unit.assignments.is_empty() {
            continue;
        }
        active.push(UnitDemand {
            vehicles: spec.vehicles,
            schedules: unit_schedules(unit, &mut notes),
        });
    }

    let ledger = SupplyLedger::new(supply);
    let days = range
        .iter_days()
        .map(|day| {
            let mut demand = VehicleCounts::default();
            for unit in &active {
                for schedule in &unit.schedules {
                    let in_transport = stage_in_schedule(schedule, day, StageMode::Full)
                        .is_some_and(|active| active.stage.requires_transport());
                    if in_transport {
                        demand += unit.vehicles;
                    }
                }
            }
            let owned = ledger.owned_on(day);
            let owned_applied = demand.min(owned);
            DailyTransport {
                day,
                demand,
                owned,
                owned_applied,
                external: demand.saturating_sub(owned_applied),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "transport_demand: {} days, {} units, {} skipped",
        days.len(),
        active.len(),
        skipped_units.len()
    );

    TransportDemand {
        range: *range,
        days,
        skipped_units,
        notes,
    }
}
