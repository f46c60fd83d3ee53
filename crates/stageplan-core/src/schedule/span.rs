//! Inclusive calendar-day spans.

use jiff::{civil::Date, Span};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A contiguous run of calendar days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    pub start: Date,
    pub end: Date,
}

impl DaySpan {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Like [`DaySpan::new`] but reports a reversed range as invalid input.
    pub fn try_new(start: Date, end: Date) -> Result<Self> {
        Self::new(start, end).ok_or_else(|| {
            PlannerError::invalid_input("range")
                .with_reason(format!("end {end} is before start {start}"))
        })
    }

    /// A span of `days` calendar days starting on `start`; `None` for zero days.
    pub fn starting(start: Date, days: i64) -> Option<Self> {
        if days <= 0 {
            return None;
        }
        Some(Self {
            start,
            end: add_days(start, days - 1),
        })
    }

    pub fn single(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Whether the two spans share at least one day. Symmetric.
    pub fn overlaps(&self, other: &DaySpan) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// The days both spans have in common.
    pub fn intersect(&self, other: &DaySpan) -> Option<DaySpan> {
        DaySpan::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Number of days in the span.
    pub fn days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Every day of the span in order.
    pub fn iter_days(&self) -> impl Iterator<Item = Date> {
        let end = self.end;
        self.start
            .series(Span::new().days(1))
            .take_while(move |day| *day <= end)
    }
}

/// Number of distinct days covered by `spans`, counting shared days once.
pub fn union_days(mut spans: Vec<DaySpan>) -> i64 {
    spans.sort_by_key(|span| span.start);
    let mut total = 0;
    let mut current: Option<DaySpan> = None;
    for span in spans {
        current = match current {
            Some(run) if span.start <= add_days(run.end, 1) => Some(DaySpan {
                start: run.start,
                end: run.end.max(span.end),
            }),
            Some(run) => {
                total += run.days();
                Some(span)
            }
            None => Some(span),
        };
    }
    total + current.map_or(0, |run| run.days())
}

/// `date` shifted by `days`, clamped to the supported calendar range.
pub(crate) fn add_days(date: Date, days: i64) -> Date {
    match Span::new().try_days(days) {
        Ok(span) => date.saturating_add(span),
        Err(_) if days > 0 => Date::MAX,
        Err(_) => Date::MIN,
    }
}

/// Signed whole days from `from` to `to`.
pub(crate) fn days_between(from: Date, to: Date) -> i64 {
    i64::from((to - from).get_days())
}
