//! Parameter structures for planner queries.
//!
//! These are plain records shared by every interface. The CLI builds them
//! from its clap arguments; anything that speaks JSON can deserialise them
//! directly.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::StageMode, schedule::DaySpan};

/// Parameters for showing a unit's schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowSchedule {
    /// Unit ID or display name
    pub unit: String,
    /// Restrict the output to one assignment
    #[serde(default)]
    pub assignment: Option<String>,
}

/// Parameters for a daily stage lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOn {
    /// Unit ID or display name
    pub unit: String,
    pub day: Date,
    #[serde(default)]
    pub mode: StageMode,
}

/// Parameters for checking whether a new assignment would fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAvailability {
    /// Unit ID or display name
    pub unit: String,
    /// Candidate start date
    pub start: Date,
    /// Candidate cycle; the unit's standard cycle when absent
    #[serde(default)]
    pub durations: Option<Vec<f64>>,
}

/// An inclusive reporting period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Period {
    pub from: Date,
    pub to: Date,
}

impl Period {
    /// The period as a day span.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when `to` precedes `from`.
    pub fn span(&self) -> Result<DaySpan> {
        DaySpan::try_new(self.from, self.to)
    }
}

/// Parameters for listing rental or maintenance windows of one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWindows {
    /// Unit ID or display name
    pub unit: String,
    pub mode: StageMode,
    #[serde(flatten)]
    pub period: Period,
}

/// Parameters for one customer's rental report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRentals {
    /// Customer name as stored on assignments; surrounding blanks are ignored
    pub customer: String,
    #[serde(flatten)]
    pub period: Period,
}
