//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::schedule::DaySpan;

/// A calendar day with its weekday, e.g. `Mon 2024-01-01`.
pub struct ShortDate<'a>(pub &'a Date);

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d"))
    }
}

/// An inclusive day range with its length, e.g. `2024-01-01 – 2024-01-28 (28 days)`.
pub struct DayRange<'a>(pub &'a DaySpan);

impl fmt::Display for DayRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0.days();
        let unit = if days == 1 { "day" } else { "days" };
        write!(f, "{} – {} ({days} {unit})", self.0.start, self.0.end)
    }
}
