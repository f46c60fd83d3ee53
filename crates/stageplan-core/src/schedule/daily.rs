//! Which stage a unit is in on a given day.

use jiff::civil::Date;
use serde::Serialize;

use super::{
    builder::{build_schedule, Schedule, StageSegment},
    resolver::{effective_durations, ValidationNote},
    span::days_between,
};
use crate::models::{Stage, StageMode, Unit};

/// A schedule together with the assignment it belongs to.
///
/// `assignment_id` is `None` for the projection of a unit with no
/// assignments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentSchedule {
    pub assignment_id: Option<String>,
    pub schedule: Schedule,
}

/// Builds one schedule per assignment of `unit`, in stored order.
///
/// A unit without assignments is projected from its own start date and
/// standard cycle; with no start date it has no schedule at all. Validation
/// notes from duration resolution are appended to `notes`.
pub fn unit_schedules(unit: &Unit, notes: &mut Vec<ValidationNote>) -> Vec<AssignmentSchedule> {
    if unit.assignments.is_empty() {
        let Some(start) = unit.start else {
            return Vec::new();
        };
        let resolved = effective_durations(unit, None);
        notes.extend(resolved.notes);
        return vec![AssignmentSchedule {
            assignment_id: None,
            schedule: build_schedule(&resolved.durations, start),
        }];
    }

    unit.assignments
        .iter()
        .map(|assignment| {
            let resolved = effective_durations(unit, Some(assignment));
            notes.extend(resolved.notes);
            AssignmentSchedule {
                assignment_id: Some(assignment.id.clone()),
                schedule: build_schedule(&resolved.durations, assignment.start),
            }
        })
        .collect()
}

/// The stage active on a particular day, with its position in the segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveStage {
    pub stage: Stage,
    pub assignment_id: Option<String>,
    pub segment: StageSegment,
    /// Zero-based day within the segment
    pub offset: i64,
    pub is_first_day: bool,
    pub is_last_day: bool,
}

impl ActiveStage {
    /// Exact duration of the segment.
    pub fn duration(&self) -> f64 {
        self.segment.duration
    }
}

/// Looks up `day` in a single schedule, considering only stages in `mode`.
pub fn stage_in_schedule(
    schedule: &AssignmentSchedule,
    day: Date,
    mode: StageMode,
) -> Option<ActiveStage> {
    schedule
        .schedule
        .segments
        .iter()
        .find(|segment| mode.includes(segment.stage) && segment.contains(day))
        .map(|segment| ActiveStage {
            stage: segment.stage,
            assignment_id: schedule.assignment_id.clone(),
            segment: *segment,
            offset: days_between(segment.start, day),
            is_first_day: day == segment.start,
            is_last_day: day == segment.end,
        })
}

/// Resolves the stage `unit` is in on `day`.
///
/// Every assignment is inspected in stored order and the first segment that
/// covers the day and belongs to `mode` wins. Returns `None` when no segment
/// matches.
pub fn stage_on(unit: &Unit, day: Date, mode: StageMode) -> Option<ActiveStage> {
    let mut notes = Vec::new();
    unit_schedules(unit, &mut notes)
        .iter()
        .find_map(|schedule| stage_in_schedule(schedule, day, mode))
}
