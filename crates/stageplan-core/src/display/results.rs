//! Result types for displaying the outcome of planner queries.
//!
//! Schedules and daily lookups are wrapped together with the unit they
//! belong to and any validation notes raised while resolving durations, so
//! the caller can render or serialise one value.

use std::fmt;

use jiff::civil::Date;
use serde::Serialize;

use super::datetime::{DayRange, ShortDate};
use crate::{
    models::{StageMode, VehicleKind},
    schedule::{
        ActiveStage, AssignmentSchedule, Availability, CustomerRental, DaySpan, PeriodSummary,
        TransportDemand, ValidationNote, Verdict,
    },
};

fn write_notes(f: &mut fmt::Formatter<'_>, notes: &[ValidationNote]) -> fmt::Result {
    if notes.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "### Warnings")?;
    writeln!(f)?;
    for note in notes {
        writeln!(f, "- {note}")?;
    }
    Ok(())
}

/// Every schedule of one unit.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stageplan_core::{
///     display::UnitSchedule,
///     models::{Assignment, SizeClass, SpecTable, Unit},
///     schedule::unit_schedules,
/// };
///
/// let specs = SpecTable::standard();
/// let mut unit = Unit::from_spec("u1", "DN-500", specs.get(SizeClass(500)).unwrap(), date(2024, 1, 1));
/// unit.assignments.push(Assignment::new("a1", date(2024, 1, 1)));
///
/// let mut notes = Vec::new();
/// let result = UnitSchedule {
///     unit_id: unit.id.clone(),
///     name: unit.name.clone(),
///     schedules: unit_schedules(&unit, &mut notes),
///     notes,
/// };
/// assert!(result.to_string().contains("### Assignment `a1`"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSchedule {
    pub unit_id: String,
    pub name: String,
    pub schedules: Vec<AssignmentSchedule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ValidationNote>,
}

impl fmt::Display for UnitSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Schedule for {} (ID: {})", self.name, self.unit_id)?;
        writeln!(f)?;

        if self.schedules.is_empty() {
            writeln!(f, "No assignments and no projection start date.")?;
        }
        for entry in &self.schedules {
            match &entry.assignment_id {
                Some(id) => writeln!(f, "### Assignment `{id}`")?,
                None => writeln!(f, "### Projection")?,
            }
            writeln!(f)?;
            write!(f, "{}", entry.schedule)?;
            writeln!(f)?;
        }

        write_notes(f, &self.notes)
    }
}

/// The stage a unit is in on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStatus {
    pub unit_id: String,
    pub name: String,
    pub day: Date,
    pub mode: StageMode,
    pub active: Option<ActiveStage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ValidationNote>,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}: ", self.name, ShortDate(&self.day))?;
        match &self.active {
            Some(active) => writeln!(f, "{active}")?,
            None if self.mode == StageMode::Full => writeln!(f, "idle")?,
            None => writeln!(f, "no {} stage", self.mode)?,
        }
        write_notes(f, &self.notes)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Accepted { span: Some(span) } => writeln!(
                f,
                "Available: unit `{}` is free for {}",
                self.unit_id,
                DayRange(span)
            )?,
            Verdict::Accepted { span: None } => writeln!(
                f,
                "Available: the cycle has no duration and occupies no days on unit `{}`",
                self.unit_id
            )?,
            Verdict::Rejected { rejection } => {
                writeln!(f, "Not available: {rejection}")?;
            }
        }
        write_notes(f, &self.notes)
    }
}

impl fmt::Display for TransportDemand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Transport demand {}", DayRange(&self.range))?;
        writeln!(f)?;

        let busy: Vec<_> = self.days.iter().filter(|d| !d.demand.is_zero()).collect();
        if busy.is_empty() {
            writeln!(f, "No transport demand in this range.")?;
        } else {
            write!(f, "| Date |")?;
            for kind in VehicleKind::ALL {
                write!(f, " {} need | own | ext |", kind.label())?;
            }
            writeln!(f)?;
            write!(f, "|:-----|")?;
            for _ in VehicleKind::ALL {
                write!(f, "-----:|----:|----:|")?;
            }
            writeln!(f)?;

            for day in busy {
                write!(f, "| {} |", ShortDate(&day.day))?;
                for kind in VehicleKind::ALL {
                    write!(
                        f,
                        " {} | {} | {} |",
                        day.demand.get(kind),
                        day.owned_applied.get(kind),
                        day.external.get(kind)
                    )?;
                }
                writeln!(f)?;
            }

            writeln!(f)?;
            writeln!(f, "- **Peak demand**: {}", self.peak_demand())?;
            writeln!(f, "- **Peak external need**: {}", self.peak_external())?;
        }

        if !self.skipped_units.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Skipped units")?;
            writeln!(f)?;
            for skipped in &self.skipped_units {
                writeln!(
                    f,
                    "- `{}`: unknown size class {}",
                    skipped.unit_id, skipped.size_class
                )?;
            }
        }

        write_notes(f, &self.notes)
    }
}

impl fmt::Display for PeriodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Summary {}", DayRange(&self.period))?;
        writeln!(f)?;
        writeln!(f, "- **Units in work**: {}", self.units_in_work)?;
        writeln!(f, "- **Transport needed**: {}", self.transport)?;
        writeln!(f, "- **Owned fleet at period end**: {}", self.owned_at_end)?;
        write_notes(f, &self.notes)
    }
}

/// Rentals billed to one customer within a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalReport {
    pub customer: String,
    pub period: DaySpan,
    pub rentals: Vec<CustomerRental>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ValidationNote>,
}

impl RentalReport {
    /// Exact rental days over every row.
    pub fn total_days(&self) -> f64 {
        self.rentals.iter().map(|r| r.rental_days).sum()
    }
}

impl fmt::Display for RentalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Rentals for {} {}", self.customer, DayRange(&self.period))?;
        writeln!(f)?;

        if self.rentals.is_empty() {
            writeln!(f, "No rentals for this customer in this period.")?;
            return write_notes(f, &self.notes);
        }

        writeln!(f, "| Unit | Rental days | From | To | Site |")?;
        writeln!(f, "|:-----|------------:|:-----|:---|:-----|")?;
        for rental in &self.rentals {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                rental.unit_name,
                rental.rental_days,
                ShortDate(&rental.start),
                ShortDate(&rental.end),
                rental.site.as_deref().unwrap_or("not specified")
            )?;
        }
        writeln!(f)?;
        writeln!(f, "- **Total rental days**: {}", self.total_days())?;
        write_notes(f, &self.notes)
    }
}
