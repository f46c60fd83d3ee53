//! Stage duration vectors.
//!
//! [`StageDurations`] is the validated, fixed-shape vector the engine works
//! with. [`RawDurations`] is what arrives from the persistence collaborator:
//! either a JSON list or a JSON-encoded string of a list, possibly corrupt.
//! [`RawDurations::parse`] is the only place that loose payload is decoded.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Stage;
use crate::error::DurationError;

/// Number of stages in a cycle and entries in every duration vector.
pub const STAGE_COUNT: usize = 6;

/// Longest accepted single stage, in days.
///
/// Keeps a whole cycle well inside the calendar range dates can represent.
pub const MAX_STAGE_DAYS: f64 = 36_500.0;

/// Six non-negative, finite stage durations in days, in [`Stage`] order, none
/// longer than [`MAX_STAGE_DAYS`].
///
/// Fractional values are allowed. A value of zero means the stage is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StageDurations([f64; STAGE_COUNT]);

impl StageDurations {
    /// All stages skipped.
    pub const ZERO: StageDurations = StageDurations([0.0; STAGE_COUNT]);

    /// Validates and wraps six durations.
    pub fn new(values: [f64; STAGE_COUNT]) -> Result<Self, DurationError> {
        for (position, value) in values.iter().enumerate() {
            check_value(position, *value)?;
        }
        Ok(Self(values))
    }

    // Only for literals known to be valid, such as the built-in catalogue.
    pub(crate) const fn from_array_unchecked(values: [f64; STAGE_COUNT]) -> Self {
        Self(values)
    }

    /// Duration of a single stage.
    pub fn get(&self, stage: Stage) -> f64 {
        self.0[stage.index()]
    }

    /// Raw values in stage order.
    pub fn as_array(&self) -> &[f64; STAGE_COUNT] {
        &self.0
    }

    /// Iterate `(stage, duration)` pairs in cycle order, skipped stages included.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, f64)> + '_ {
        Stage::ALL.iter().map(move |stage| (*stage, self.get(*stage)))
    }

    /// Sum of the exact durations.
    pub fn raw_total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Number of calendar days the cycle occupies: `ceil` of every non-zero
    /// duration, summed.
    pub fn calendar_days(&self) -> i64 {
        self.0.iter().map(|d| calendar_footprint(*d)).sum()
    }
}

/// Whole calendar days a single duration covers.
pub(crate) fn calendar_footprint(duration: f64) -> i64 {
    if duration > 0.0 {
        duration.ceil() as i64
    } else {
        0
    }
}

fn check_value(position: usize, value: f64) -> Result<f64, DurationError> {
    if !value.is_finite() {
        return Err(DurationError::NotANumber { position });
    }
    if value < 0.0 {
        return Err(DurationError::Negative { position, value });
    }
    if value > MAX_STAGE_DAYS {
        return Err(DurationError::TooLong { position, value });
    }
    Ok(value)
}

impl Index<Stage> for StageDurations {
    type Output = f64;

    fn index(&self, stage: Stage) -> &Self::Output {
        &self.0[stage.index()]
    }
}

impl TryFrom<&[f64]> for StageDurations {
    type Error = DurationError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; STAGE_COUNT] = values
            .try_into()
            .map_err(|_| DurationError::WrongLength {
                found: values.len(),
            })?;
        Self::new(array)
    }
}

impl TryFrom<Vec<f64>> for StageDurations {
    type Error = DurationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<StageDurations> for Vec<f64> {
    fn from(durations: StageDurations) -> Self {
        durations.0.to_vec()
    }
}

/// An unvalidated duration payload as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDurations(pub Value);

impl RawDurations {
    /// Decode the payload into six validated durations.
    ///
    /// Accepts a JSON list of numbers or a string containing such a list.
    pub fn parse(&self) -> Result<StageDurations, DurationError> {
        match &self.0 {
            Value::Array(items) => parse_items(items),
            Value::String(encoded) => {
                let decoded: Value = serde_json::from_str(encoded)
                    .map_err(|e| DurationError::Malformed(e.to_string()))?;
                match decoded {
                    Value::Array(items) => parse_items(&items),
                    _ => Err(DurationError::NotAList),
                }
            }
            _ => Err(DurationError::NotAList),
        }
    }
}

fn parse_items(items: &[Value]) -> Result<StageDurations, DurationError> {
    if items.len() != STAGE_COUNT {
        return Err(DurationError::WrongLength { found: items.len() });
    }
    let mut values = [0.0; STAGE_COUNT];
    for (position, (slot, item)) in values.iter_mut().zip(items).enumerate() {
        let value = item
            .as_f64()
            .ok_or(DurationError::NotANumber { position })?;
        *slot = check_value(position, value)?;
    }
    Ok(StageDurations(values))
}

impl From<StageDurations> for RawDurations {
    fn from(durations: StageDurations) -> Self {
        RawDurations(Value::from(Vec::<f64>::from(durations)))
    }
}

impl From<[f64; STAGE_COUNT]> for RawDurations {
    fn from(values: [f64; STAGE_COUNT]) -> Self {
        RawDurations(Value::from(values.to_vec()))
    }
}
