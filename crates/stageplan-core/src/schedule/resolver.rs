//! Decides which duration vector applies to a unit or assignment.

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::{
    error::DurationError,
    models::{Assignment, StageDurations, Unit},
};

/// Where an effective duration vector came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationSource {
    /// The assignment's active override
    Override,
    /// The unit's standard cycle
    Standard,
    /// Nothing usable; every stage treated as zero
    Zeroed,
}

/// A non-fatal problem found while resolving durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationNote {
    pub unit_id: String,
    pub assignment_id: Option<String>,
    pub message: String,
    /// What was used instead
    pub fallback: DurationSource,
}

impl ValidationNote {
    fn new(
        unit: &Unit,
        assignment: Option<&Assignment>,
        what: &str,
        error: &DurationError,
        fallback: DurationSource,
    ) -> Self {
        Self {
            unit_id: unit.id.clone(),
            assignment_id: assignment.map(|a| a.id.clone()),
            message: format!("{what}: {error}"),
            fallback,
        }
    }
}

impl fmt::Display for ValidationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit '{}'", self.unit_id)?;
        if let Some(id) = &self.assignment_id {
            write!(f, ", assignment '{id}'")?;
        }
        let fallback = match self.fallback {
            DurationSource::Override => "override",
            DurationSource::Standard => "standard cycle",
            DurationSource::Zeroed => "all-zero cycle",
        };
        write!(f, ": {} (using {fallback})", self.message)
    }
}

/// The vector to schedule with, plus anything worth reporting about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub durations: StageDurations,
    pub source: DurationSource,
    pub notes: Vec<ValidationNote>,
}

/// Returns the effective duration vector for `unit`, or for one of its
/// assignments.
///
/// An assignment's override wins only when its flag is set and the payload
/// parses to six non-negative numbers. Otherwise the unit's standard vector
/// is used; if that is corrupt too, every stage is zero. Each fallback adds a
/// [`ValidationNote`] and a warning to the log.
pub fn effective_durations(unit: &Unit, assignment: Option<&Assignment>) -> Resolved {
    let mut notes = Vec::new();

    if let Some(assignment) = assignment.filter(|a| a.override_active) {
        let parsed = match &assignment.override_durations {
            Some(raw) => raw.parse(),
            None => Err(DurationError::NotAList),
        };
        match parsed {
            Ok(durations) => {
                return Resolved {
                    durations,
                    source: DurationSource::Override,
                    notes,
                }
            }
            Err(error) => notes.push(ValidationNote::new(
                unit,
                Some(assignment),
                "override ignored",
                &error,
                DurationSource::Standard,
            )),
        }
    }

    let (durations, source) = match unit.standard_durations.parse() {
        Ok(durations) => (durations, DurationSource::Standard),
        Err(error) => {
            notes.push(ValidationNote::new(
                unit,
                assignment,
                "standard cycle unreadable",
                &error,
                DurationSource::Zeroed,
            ));
            (StageDurations::ZERO, DurationSource::Zeroed)
        }
    };

    // An override note's fallback is whatever the standard path produced.
    if let Some(note) = notes.first_mut() {
        note.fallback = source;
    }
    for note in &notes {
        warn!("{note}");
    }

    Resolved {
        durations,
        source,
        notes,
    }
}
