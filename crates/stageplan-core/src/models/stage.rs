//! Stage and stage-mode enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six fixed phases of a unit's operational cycle.
///
/// The discriminant is the stage's position in every duration vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Travelling from maintenance to the customer site
    TransitToSite = 0,
    /// Unloading at the customer site
    Unload = 1,
    /// Working at the customer site
    Work = 2,
    /// Loading at the customer site
    Load = 3,
    /// Travelling back to the maintenance base
    TransitToMaintenance = 4,
    /// Maintenance and repair
    Maintenance = 5,
}

impl Stage {
    /// All stages in cycle order.
    pub const ALL: [Stage; 6] = [
        Stage::TransitToSite,
        Stage::Unload,
        Stage::Work,
        Stage::Load,
        Stage::TransitToMaintenance,
        Stage::Maintenance,
    ];

    /// Position of the stage within a duration vector (0–5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stage at the given vector position.
    pub fn from_index(index: usize) -> Option<Stage> {
        Self::ALL.get(index).copied()
    }

    /// Whether support vehicles are tied up during this stage.
    pub fn requires_transport(self) -> bool {
        matches!(
            self,
            Stage::TransitToSite | Stage::Unload | Stage::Load | Stage::TransitToMaintenance
        )
    }

    /// Machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::TransitToSite => "transit_to_site",
            Stage::Unload => "unload",
            Stage::Work => "work",
            Stage::Load => "load",
            Stage::TransitToMaintenance => "transit_to_maintenance",
            Stage::Maintenance => "maintenance",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::TransitToSite => "Transit to site",
            Stage::Unload => "Unloading",
            Stage::Work => "Work at site",
            Stage::Load => "Loading",
            Stage::TransitToMaintenance => "Transit to maintenance",
            Stage::Maintenance => "Maintenance",
        }
    }
}

/// Which subset of stages a daily lookup cares about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StageMode {
    /// The whole six-stage cycle
    #[default]
    Full,

    /// Billable occupancy at the customer: unload, work and load
    Occupied,

    /// The maintenance stage only
    Maintenance,
}

impl StageMode {
    /// Whether `stage` belongs to this mode's subset.
    pub fn includes(self, stage: Stage) -> bool {
        match self {
            StageMode::Full => true,
            StageMode::Occupied => matches!(stage, Stage::Unload | Stage::Work | Stage::Load),
            StageMode::Maintenance => stage == Stage::Maintenance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageMode::Full => "full",
            StageMode::Occupied => "occupied",
            StageMode::Maintenance => "maintenance",
        }
    }
}

impl FromStr for StageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(StageMode::Full),
            "occupied" | "rental" => Ok(StageMode::Occupied),
            "maintenance" => Ok(StageMode::Maintenance),
            _ => Err(format!("Invalid stage mode: {s}")),
        }
    }
}
