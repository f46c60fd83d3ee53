//! The in-memory snapshot every computation reads from.

use serde::{Deserialize, Serialize};

use super::{InventoryBatch, SizeSpec, SpecTable, SupplyRecord, Unit};
use crate::error::{PlannerError, Result};

/// Wire shape of a snapshot as handed over by the persistence collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    /// Replaces the built-in catalogue when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_specs: Option<Vec<SizeSpec>>,

    #[serde(default)]
    pub units: Vec<Unit>,

    /// Deliveries whose units have not been materialised yet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory: Vec<InventoryBatch>,

    #[serde(default)]
    pub supply: Vec<SupplyRecord>,
}

/// An immutable view of units, supply and reference data.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub specs: SpecTable,
    pub units: Vec<Unit>,
    pub supply: Vec<SupplyRecord>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            specs: SpecTable::standard(),
            units: Vec::new(),
            supply: Vec::new(),
        }
    }
}

impl Snapshot {
    pub fn new(specs: SpecTable, units: Vec<Unit>, supply: Vec<SupplyRecord>) -> Self {
        Self {
            specs,
            units,
            supply,
        }
    }

    /// Builds a snapshot from its wire document.
    ///
    /// Inventory batches are expanded into idle units; a generated unit is
    /// dropped when a stored unit already has the same name and delivery date.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for duplicate unit IDs or an
    /// inventory batch of an unknown size class.
    pub fn from_document(document: SnapshotDocument) -> Result<Self> {
        let specs = match document.size_specs {
            Some(specs) => SpecTable::from_specs(specs),
            None => SpecTable::standard(),
        };

        let mut units = document.units;
        for batch in &document.inventory {
            for unit in batch.expand(&specs)? {
                let exists = units
                    .iter()
                    .any(|u| u.name == unit.name && u.available_from == unit.available_from);
                if !exists {
                    units.push(unit);
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        for unit in &units {
            if !seen.insert(unit.id.as_str()) {
                return Err(PlannerError::invalid_input("units")
                    .with_reason(format!("duplicate unit ID '{}'", unit.id)));
            }
        }

        Ok(Self {
            specs,
            units,
            supply: document.supply,
        })
    }

    /// Finds a unit by ID.
    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Finds a unit by ID or display name.
    pub fn find_unit(&self, key: &str) -> Option<&Unit> {
        self.unit(key)
            .or_else(|| self.units.iter().find(|u| u.name == key))
    }
}
