//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its rows with consistent structure and handles the
//! empty case with a short sentence.

use std::{fmt, ops::Index};

use super::datetime::ShortDate;
use crate::{
    models::Unit,
    schedule::{DailyCount, StageWindow, UnitUtilization},
};

/// Newtype wrapper for displaying a list of units.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use stageplan_core::{
///     display::Units,
///     models::{SizeClass, SpecTable, Unit},
/// };
///
/// let specs = SpecTable::standard();
/// let spec = specs.get(SizeClass(700)).unwrap();
/// let units = Units(vec![Unit::from_spec("u1", "DN-700", spec, date(2024, 1, 1))]);
///
/// let output = format!("{}", units);
/// assert!(output.contains("DN-700"));
/// ```
pub struct Units(pub Vec<Unit>);

impl Units {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of units in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the units.
    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.0.iter()
    }
}

impl Index<usize> for Units {
    type Output = Unit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Units {
    type Item = &'a Unit;
    type IntoIter = std::slice::Iter<'a, Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No units found.")
        } else {
            for unit in &self.0 {
                write!(f, "{}", unit)?;
            }
            Ok(())
        }
    }
}

/// Distinct customer names, sorted.
pub struct Customers(pub Vec<String>);

impl Customers {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Customers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No customers found.");
        }
        for customer in &self.0 {
            writeln!(f, "- {customer}")?;
        }
        Ok(())
    }
}

/// Per-unit utilization rows, highest first.
pub struct UtilizationReport(pub Vec<UnitUtilization>);

impl fmt::Display for UtilizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No units available in this period.");
        }

        writeln!(f, "| Unit | From | To | Days | Busy | Rental | Utilization |")?;
        writeln!(f, "|:-----|:-----|:---|-----:|-----:|-------:|------------:|")?;
        for row in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} | {:.2}% |",
                row.name,
                row.from,
                row.to,
                row.total_days,
                row.busy_days,
                row.rental_days,
                row.utilization
            )?;
        }
        Ok(())
    }
}

/// Rental or maintenance windows of a single unit.
pub struct StageWindows(pub Vec<StageWindow>);

impl fmt::Display for StageWindows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching stages in this period.");
        }

        for window in &self.0 {
            let segment = &window.segment;
            write!(
                f,
                "- **{}**: {} – {} ({} days)",
                segment.stage,
                ShortDate(&segment.start),
                ShortDate(&segment.end),
                segment.calendar_days()
            )?;
            if let Some(id) = &window.assignment_id {
                write!(f, ", assignment `{id}`")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Daily count of units in maintenance.
///
/// Only days with at least one unit are listed.
pub struct MaintenanceLoad(pub Vec<DailyCount>);

impl MaintenanceLoad {
    /// The busiest day, earliest first on ties.
    pub fn peak(&self) -> Option<&DailyCount> {
        self.0
            .iter()
            .filter(|d| d.units > 0)
            .fold(None, |best: Option<&DailyCount>, d| match best {
                Some(b) if b.units >= d.units => Some(b),
                _ => Some(d),
            })
    }
}

impl fmt::Display for MaintenanceLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(peak) = self.peak() else {
            return writeln!(f, "No units in maintenance in this period.");
        };

        writeln!(f, "| Date | Units |")?;
        writeln!(f, "|:-----|------:|")?;
        for day in self.0.iter().filter(|d| d.units > 0) {
            writeln!(f, "| {} | {} |", ShortDate(&day.day), day.units)?;
        }
        writeln!(f)?;
        writeln!(f, "Peak: {} units on {}", peak.units, peak.day)
    }
}
