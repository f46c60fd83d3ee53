//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer can lay it out; tables
//! are used wherever rows share columns.

use std::fmt;

use super::datetime::ShortDate;
use crate::{
    models::{SizeSpec, SpecTable, Stage, StageDurations, StageMode, Unit, VehicleCounts},
    schedule::{ActiveStage, Schedule},
};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for StageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StageDurations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.as_array().iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

impl fmt::Display for VehicleCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tractors, {} trailers, {} low-loaders",
            self.tractors, self.trailers, self.low_loaders
        )
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.size_class)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Standard cycle: {} ({} days)",
            self.standard_durations,
            self.standard_durations.raw_total()
        )?;
        writeln!(f, "- Vehicles: {}", self.vehicles)?;
        writeln!(f)
    }
}

impl fmt::Display for SpecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No size specs defined.");
        }

        writeln!(f, "| Size | Cycle | Total | Tractors | Trailers | Low-loaders |")?;
        writeln!(f, "|:-----|:------|------:|---------:|---------:|------------:|")?;
        for spec in self.iter() {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                spec.size_class,
                spec.standard_durations,
                spec.standard_durations.raw_total(),
                spec.vehicles.tractors,
                spec.vehicles.trailers,
                spec.vehicles.low_loaders
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Size class**: {}", self.size_class)?;
        writeln!(f, "- **Available from**: {}", ShortDate(&self.available_from))?;
        match self.standard_durations.parse() {
            Ok(durations) => writeln!(f, "- **Standard cycle**: {durations}")?,
            Err(error) => writeln!(f, "- **Standard cycle**: unreadable ({error})")?,
        }

        if self.assignments.is_empty() {
            match self.start {
                Some(start) => writeln!(f, "- **Projected from**: {}", ShortDate(&start))?,
                None => writeln!(f, "- No assignments")?,
            }
        } else {
            writeln!(f, "- **Assignments**: {}", self.assignments.len())?;
            for assignment in &self.assignments {
                write!(f, "  - `{}` from {}", assignment.id, ShortDate(&assignment.start))?;
                if let Some(customer) = &assignment.customer {
                    write!(f, ", {customer}")?;
                }
                if let Some(site) = &assignment.site {
                    write!(f, " @ {site}")?;
                }
                if assignment.override_active {
                    write!(f, " (override)")?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Every stage has zero duration; nothing is scheduled.");
        }

        writeln!(f, "| Stage | From | To | Days | Duration |")?;
        writeln!(f, "|:------|:-----|:---|-----:|---------:|")?;
        for segment in &self.segments {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                segment.stage,
                ShortDate(&segment.start),
                ShortDate(&segment.end),
                segment.calendar_days(),
                segment.duration
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total: {} days ({} calendar days)",
            self.raw_total(),
            self.calendar_days()
        )
    }
}

impl fmt::Display for ActiveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, day {} of {}",
            self.stage,
            self.offset + 1,
            self.segment.calendar_days()
        )?;
        if self.segment.duration.fract() != 0.0 {
            write!(f, " (exact duration {})", self.segment.duration)?;
        }
        if let Some(id) = &self.assignment_id {
            write!(f, ", assignment `{id}`")?;
        }
        Ok(())
    }
}
