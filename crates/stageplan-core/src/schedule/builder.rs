//! Lays a duration vector onto the calendar.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::span::{add_days, DaySpan};
use crate::models::{durations::calendar_footprint, Stage, StageDurations};

/// One stage placed on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSegment {
    pub stage: Stage,
    /// First day of the stage
    pub start: Date,
    /// Last day of the stage, inclusive
    pub end: Date,
    /// Exact (possibly fractional) duration in days
    pub duration: f64,
}

impl StageSegment {
    pub fn span(&self) -> DaySpan {
        DaySpan {
            start: self.start,
            end: self.end,
        }
    }

    pub fn contains(&self, day: Date) -> bool {
        self.span().contains(day)
    }

    /// Whole calendar days the stage occupies.
    pub fn calendar_days(&self) -> i64 {
        self.span().days()
    }
}

/// A full cycle laid out from a start date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub start: Date,
    /// Non-skipped stages in cycle order
    pub segments: Vec<StageSegment>,
}

impl Schedule {
    /// Sum of exact stage durations.
    pub fn raw_total(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Sum of the calendar footprints of all segments.
    pub fn calendar_days(&self) -> i64 {
        self.segments.iter().map(StageSegment::calendar_days).sum()
    }

    /// Days occupied from the first to the last segment; `None` if every
    /// stage was skipped.
    pub fn span(&self) -> Option<DaySpan> {
        let first = self.segments.first()?;
        let last = self.segments.last()?;
        DaySpan::new(first.start, last.end)
    }

    /// Segment covering `day`, if any.
    pub fn segment_on(&self, day: Date) -> Option<&StageSegment> {
        self.segments.iter().find(|s| s.contains(day))
    }

    pub fn segment(&self, stage: Stage) -> Option<&StageSegment> {
        self.segments.iter().find(|s| s.stage == stage)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Builds the stage schedule for `durations` starting on `start`.
///
/// Stages with a zero duration are left out entirely. A fractional duration
/// occupies `ceil(duration)` calendar days while the segment keeps the exact
/// value, so `raw_total` and `calendar_days` can differ.
pub fn build_schedule(durations: &StageDurations, start: Date) -> Schedule {
    let mut cursor = start;
    let mut segments = Vec::with_capacity(Stage::ALL.len());

    for (stage, duration) in durations.iter() {
        let days = calendar_footprint(duration);
        if days == 0 {
            continue;
        }
        let end = add_days(cursor, days - 1);
        segments.push(StageSegment {
            stage,
            start: cursor,
            end,
            duration,
        });
        cursor = add_days(end, 1);
    }

    Schedule { start, segments }
}
