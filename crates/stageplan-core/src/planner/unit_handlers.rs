//! Per-unit query handlers for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::{DayStatus, StageWindows, UnitSchedule, Units},
    error::{PlannerError, Result},
    models::StageDurations,
    params::{CheckAvailability, ListWindows, ShowSchedule, StageOn},
    schedule::{
        build_schedule, check_availability, effective_durations, stage_in_schedule,
        stage_windows, unit_schedules, AssignmentSchedule, Availability,
    },
};

impl Planner {
    /// Handle listing every unit in the snapshot, in stored order.
    pub fn list_units(&self) -> Units {
        Units(self.snapshot.units.clone())
    }

    /// Handle showing the stage schedules of a unit.
    ///
    /// Without an assignment filter every assignment is scheduled; a unit
    /// with no assignments shows its projection when it has a start date.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnitNotFound` for an unknown unit and
    /// `PlannerError::AssignmentNotFound` for an unknown assignment.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use stageplan_core::{params::ShowSchedule, PlannerBuilder};
    /// let planner = PlannerBuilder::new().build()?;
    /// let schedule = planner.show_schedule(&ShowSchedule {
    ///     unit: "DN-500".to_string(),
    ///     assignment: None,
    /// })?;
    /// println!("{schedule}");
    /// # Ok::<(), stageplan_core::PlannerError>(())
    /// ```
    pub fn show_schedule(&self, params: &ShowSchedule) -> Result<UnitSchedule> {
        let unit = self.require_unit(&params.unit)?;
        let mut notes = Vec::new();

        let schedules = match &params.assignment {
            Some(id) => {
                let assignment = unit.assignment(id).ok_or_else(|| {
                    PlannerError::AssignmentNotFound {
                        unit_id: unit.id.clone(),
                        assignment_id: id.clone(),
                    }
                })?;
                let resolved = effective_durations(unit, Some(assignment));
                notes.extend(resolved.notes);
                vec![AssignmentSchedule {
                    assignment_id: Some(assignment.id.clone()),
                    schedule: build_schedule(&resolved.durations, assignment.start),
                }]
            }
            None => unit_schedules(unit, &mut notes),
        };

        Ok(UnitSchedule {
            unit_id: unit.id.clone(),
            name: unit.name.clone(),
            schedules,
            notes,
        })
    }

    /// Handle looking up the stage a unit is in on one day.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnitNotFound` for an unknown unit.
    pub fn stage_on(&self, params: &StageOn) -> Result<DayStatus> {
        let unit = self.require_unit(&params.unit)?;
        let mut notes = Vec::new();
        let active = unit_schedules(unit, &mut notes)
            .iter()
            .find_map(|schedule| stage_in_schedule(schedule, params.day, params.mode));

        Ok(DayStatus {
            unit_id: unit.id.clone(),
            name: unit.name.clone(),
            day: params.day,
            mode: params.mode,
            active,
            notes,
        })
    }

    /// Handle checking whether a new assignment would fit a unit's calendar.
    ///
    /// The candidate cycle defaults to the unit's standard cycle.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnitNotFound` for an unknown unit and
    /// `PlannerError::InvalidInput` when the candidate cycle is malformed or
    /// none is given and the unit's standard cycle is unreadable.
    pub fn check_availability(&self, params: &CheckAvailability) -> Result<Availability> {
        let unit = self.require_unit(&params.unit)?;

        let candidate = match &params.durations {
            Some(values) => StageDurations::try_from(values.as_slice()).map_err(|e| {
                PlannerError::invalid_input("durations").with_reason(e.to_string())
            })?,
            None => unit.standard_durations.parse().map_err(|e| {
                PlannerError::invalid_input("durations").with_reason(format!(
                    "unit '{}' has no usable standard cycle ({e}); pass durations explicitly",
                    unit.id
                ))
            })?,
        };
        debug!("Checking {} from {} with {candidate}", unit.id, params.start);

        Ok(check_availability(unit, params.start, &candidate))
    }

    /// Handle listing the rental or maintenance windows of a unit.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnitNotFound` for an unknown unit and
    /// `PlannerError::InvalidInput` for a reversed period.
    pub fn list_windows(&self, params: &ListWindows) -> Result<StageWindows> {
        let unit = self.require_unit(&params.unit)?;
        let period = params.period.span()?;
        Ok(StageWindows(stage_windows(unit, params.mode, &period)))
    }
}
