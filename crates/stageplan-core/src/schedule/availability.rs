//! Write-time check that a new assignment fits a unit's calendar.

use jiff::civil::Date;
use log::debug;
use serde::Serialize;

use super::{
    resolver::{effective_durations, ValidationNote},
    span::DaySpan,
};
use crate::{
    error::Rejection,
    models::{StageDurations, Unit},
};

/// Outcome of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The candidate fits; `span` is the days it would occupy
    Accepted { span: Option<DaySpan> },
    /// The candidate must not be created
    Rejected { rejection: Rejection },
}

/// Verdict plus validation notes raised while resolving existing assignments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Availability {
    pub unit_id: String,
    pub start: Date,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<ValidationNote>,
}

impl Availability {
    pub fn is_accepted(&self) -> bool {
        matches!(self.verdict, Verdict::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.verdict {
            Verdict::Rejected { rejection } => Some(rejection),
            Verdict::Accepted { .. } => None,
        }
    }
}

/// Days a cycle starting on `start` would occupy; `None` if every stage is zero.
pub fn occupied_span(durations: &StageDurations, start: Date) -> Option<DaySpan> {
    DaySpan::starting(start, durations.calendar_days())
}

/// Decides whether an assignment of `unit` starting on `start` with the
/// `candidate` cycle may be created.
///
/// Rejects a start before the unit's delivery date, then compares the
/// candidate's occupied span with that of every existing assignment. The
/// check is pure; callers creating assignments concurrently must serialise
/// creation per unit themselves, since two callers can both be accepted
/// against the same snapshot.
pub fn check_availability(unit: &Unit, start: Date, candidate: &StageDurations) -> Availability {
    let mut notes = Vec::new();
    let verdict = decide(unit, start, candidate, &mut notes);
    debug!("check_availability: unit={} start={start} -> {verdict:?}", unit.id);
    Availability {
        unit_id: unit.id.clone(),
        start,
        verdict,
        notes,
    }
}

fn decide(
    unit: &Unit,
    start: Date,
    candidate: &StageDurations,
    notes: &mut Vec<ValidationNote>,
) -> Verdict {
    if !unit.is_available_on(start) {
        return Verdict::Rejected {
            rejection: Rejection::NotYetAvailable {
                available_from: unit.available_from,
                requested: start,
            },
        };
    }

    let span = occupied_span(candidate, start);
    let Some(candidate_span) = span else {
        return Verdict::Accepted { span };
    };

    for assignment in &unit.assignments {
        let resolved = effective_durations(unit, Some(assignment));
        notes.extend(resolved.notes);
        let Some(existing) = occupied_span(&resolved.durations, assignment.start) else {
            continue;
        };
        if candidate_span.overlaps(&existing) {
            return Verdict::Rejected {
                rejection: Rejection::Busy {
                    assignment_id: assignment.id.clone(),
                    start: existing.start,
                    end: existing.end,
                },
            };
        }
    }

    Verdict::Accepted { span }
}
