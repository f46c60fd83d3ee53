//! Owned-fleet supply records and the cumulative ledger built from them.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::VehicleCounts;

/// Vehicles added to the owned fleet, effective from `date` onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyRecord {
    pub id: String,
    pub date: Date,
    #[serde(flatten)]
    pub vehicles: VehicleCounts,
}

/// Cumulative owned fleet over time.
///
/// Records never expire, so the fleet on a day is the sum of every record
/// dated on or before it.
#[derive(Debug, Clone, Default)]
pub struct SupplyLedger {
    // Sorted by date; running totals after each date.
    steps: Vec<(Date, VehicleCounts)>,
}

impl SupplyLedger {
    pub fn new(records: &[SupplyRecord]) -> Self {
        let mut sorted: Vec<&SupplyRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.date);

        let mut steps: Vec<(Date, VehicleCounts)> = Vec::with_capacity(sorted.len());
        let mut running = VehicleCounts::default();
        for record in sorted {
            running += record.vehicles;
            match steps.last_mut() {
                Some((date, total)) if *date == record.date => *total = running,
                _ => steps.push((record.date, running)),
            }
        }
        Self { steps }
    }

    /// Owned fleet in service on `day`.
    pub fn owned_on(&self, day: Date) -> VehicleCounts {
        let idx = self.steps.partition_point(|(date, _)| *date <= day);
        if idx == 0 {
            VehicleCounts::default()
        } else {
            self.steps[idx - 1].1
        }
    }
}
