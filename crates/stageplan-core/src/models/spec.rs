//! Size classes, support-vehicle counts and the spec table.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::StageDurations;

/// Equipment size category, expressed as nominal diameter in millimetres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SizeClass(pub u32);

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DN-{}", self.0)
    }
}

/// The three kinds of support vehicle tracked by the demand projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Tractor,
    Trailer,
    LowLoader,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Tractor,
        VehicleKind::Trailer,
        VehicleKind::LowLoader,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Tractor => "Tractors",
            VehicleKind::Trailer => "Trailers",
            VehicleKind::LowLoader => "Low-loaders",
        }
    }
}

/// A count of each support-vehicle kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCounts {
    #[serde(default)]
    pub tractors: u32,
    #[serde(default)]
    pub trailers: u32,
    #[serde(default)]
    pub low_loaders: u32,
}

impl VehicleCounts {
    pub fn new(tractors: u32, trailers: u32, low_loaders: u32) -> Self {
        Self {
            tractors,
            trailers,
            low_loaders,
        }
    }

    /// Count for one vehicle kind.
    pub fn get(&self, kind: VehicleKind) -> u32 {
        match kind {
            VehicleKind::Tractor => self.tractors,
            VehicleKind::Trailer => self.trailers,
            VehicleKind::LowLoader => self.low_loaders,
        }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self {
            tractors: self.tractors.min(other.tractors),
            trailers: self.trailers.min(other.trailers),
            low_loaders: self.low_loaders.min(other.low_loaders),
        }
    }

    /// Component-wise subtraction clamped at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self {
            tractors: self.tractors.saturating_sub(other.tractors),
            trailers: self.trailers.saturating_sub(other.trailers),
            low_loaders: self.low_loaders.saturating_sub(other.low_loaders),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for VehicleCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            tractors: self.tractors.saturating_add(rhs.tractors),
            trailers: self.trailers.saturating_add(rhs.trailers),
            low_loaders: self.low_loaders.saturating_add(rhs.low_loaders),
        }
    }
}

impl AddAssign for VehicleCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Standard cycle and vehicle requirements for one size class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSpec {
    pub size_class: SizeClass,
    pub standard_durations: StageDurations,
    #[serde(flatten)]
    pub vehicles: VehicleCounts,
}

/// Lookup from size class to its [`SizeSpec`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecTable {
    specs: BTreeMap<SizeClass, SizeSpec>,
}

impl SpecTable {
    /// Builds a table from a list of specs; later entries replace earlier
    /// ones with the same size class.
    pub fn from_specs(specs: impl IntoIterator<Item = SizeSpec>) -> Self {
        Self {
            specs: specs
                .into_iter()
                .map(|spec| (spec.size_class, spec))
                .collect(),
        }
    }

    /// The built-in catalogue of size classes DN-200 through DN-1400.
    pub fn standard() -> Self {
        const CATALOGUE: [(u32, [f64; 6], [u32; 3]); 9] = [
            (200, [3.0, 1.0, 13.0, 1.0, 3.0, 3.0], [2, 2, 0]),
            (300, [3.0, 1.0, 13.0, 1.0, 3.0, 3.0], [3, 3, 0]),
            (400, [3.0, 1.0, 13.0, 1.0, 3.0, 3.0], [3, 3, 0]),
            (500, [3.0, 1.5, 14.0, 1.5, 3.0, 4.0], [3, 3, 0]),
            (700, [3.0, 1.5, 14.0, 1.5, 3.0, 4.0], [4, 4, 0]),
            (800, [3.0, 1.5, 14.0, 1.5, 3.0, 4.0], [4, 4, 0]),
            (1000, [3.0, 2.0, 16.0, 2.0, 3.0, 4.0], [7, 7, 0]),
            (1200, [3.0, 2.0, 17.0, 2.0, 3.0, 4.0], [8, 6, 2]),
            (1400, [3.0, 2.0, 17.0, 2.0, 3.0, 4.0], [8, 4, 4]),
        ];

        Self::from_specs(CATALOGUE.iter().map(|(class, durations, [t, tr, ll])| SizeSpec {
            size_class: SizeClass(*class),
            standard_durations: StageDurations::from_array_unchecked(*durations),
            vehicles: VehicleCounts::new(*t, *tr, *ll),
        }))
    }

    pub fn get(&self, size_class: SizeClass) -> Option<&SizeSpec> {
        self.specs.get(&size_class)
    }

    /// Specs in ascending size-class order.
    pub fn iter(&self) -> impl Iterator<Item = &SizeSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

