//! Unit, assignment and inventory models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{RawDurations, SizeClass, SizeSpec, SpecTable, StageDurations};
use crate::error::{PlannerError, Result};

/// A physical piece of size-classed equipment and its assignment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Unique identifier for the unit
    pub id: String,

    /// Size class determining vehicle requirements
    pub size_class: SizeClass,

    /// Display name, e.g. `DN-500-2`
    pub name: String,

    /// Earliest day the unit exists and can be scheduled
    pub available_from: Date,

    /// Projection start used only while the unit has no assignments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Date>,

    /// The unit's own standard cycle, normally a copy of its size spec
    pub standard_durations: RawDurations,

    /// Assignments in stored order
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Unit {
    /// Creates an idle unit whose standard cycle is copied from `spec`.
    pub fn from_spec(
        id: impl Into<String>,
        name: impl Into<String>,
        spec: &SizeSpec,
        available_from: Date,
    ) -> Self {
        Self {
            id: id.into(),
            size_class: spec.size_class,
            name: name.into(),
            available_from,
            start: None,
            standard_durations: spec.standard_durations.into(),
            assignments: Vec::new(),
        }
    }

    /// Finds an assignment by ID.
    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Whether the unit has been delivered by `day`.
    pub fn is_available_on(&self, day: Date) -> bool {
        day >= self.available_from
    }
}

/// A period of use of one unit, starting on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier for the assignment
    pub id: String,

    /// First day of the cycle
    pub start: Date,

    /// Customer label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Site label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Whether `override_durations` replaces the unit's standard cycle
    #[serde(default)]
    pub override_active: bool,

    /// Per-assignment cycle; only consulted when `override_active` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_durations: Option<RawDurations>,
}

impl Assignment {
    /// Creates an assignment that follows the unit's standard cycle.
    pub fn new(id: impl Into<String>, start: Date) -> Self {
        Self {
            id: id.into(),
            start,
            customer: None,
            site: None,
            override_active: false,
            override_durations: None,
        }
    }

    /// Sets and activates an override cycle.
    pub fn with_override(mut self, durations: StageDurations) -> Self {
        self.override_active = true;
        self.override_durations = Some(durations.into());
        self
    }

    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }
}

/// A delivery of identical units from the factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryBatch {
    pub size_class: SizeClass,
    pub count: u32,
    pub available_from: Date,
}

impl InventoryBatch {
    /// Expands the batch into individual idle units.
    ///
    /// The first unit is named after its size class (`DN-500`), the rest get
    /// a numeric suffix (`DN-500-2`, `DN-500-3`, …).
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the size class is not in
    /// `specs` or the count is zero.
    pub fn expand(&self, specs: &SpecTable) -> Result<Vec<Unit>> {
        let spec = specs.get(self.size_class).ok_or_else(|| {
            PlannerError::invalid_input("size_class")
                .with_reason(format!("unknown size class {}", self.size_class))
        })?;
        if self.count == 0 {
            return Err(PlannerError::invalid_input("count").with_reason("must be at least 1"));
        }

        Ok((1..=self.count)
            .map(|number| {
                let name = if number > 1 {
                    format!("{}-{number}", self.size_class)
                } else {
                    self.size_class.to_string()
                };
                let id = format!("{}-{}-{number}", self.size_class.0, self.available_from);
                Unit::from_spec(id, name, spec, self.available_from)
            })
            .collect())
    }
}
