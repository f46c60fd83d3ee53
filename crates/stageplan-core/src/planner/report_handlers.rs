//! Fleet-wide report handlers for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::{Customers, MaintenanceLoad, RentalReport, UtilizationReport},
    error::{PlannerError, Result},
    params::{CustomerRentals, Period},
    schedule::{
        customer_rentals, customers, maintenance_load, period_summary, transport_demand,
        utilization, PeriodSummary, TransportDemand,
    },
};

impl Planner {
    /// Handle projecting daily support-vehicle demand over a period.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a reversed period.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use jiff::civil::date;
    /// # use stageplan_core::{params::Period, PlannerBuilder};
    /// let planner = PlannerBuilder::new().build()?;
    /// let demand = planner.transport_demand(&Period {
    ///     from: date(2024, 1, 1),
    ///     to: date(2024, 3, 31),
    /// })?;
    /// println!("{demand}");
    /// # Ok::<(), stageplan_core::PlannerError>(())
    /// ```
    pub fn transport_demand(&self, params: &Period) -> Result<TransportDemand> {
        let range = params.span()?;
        Ok(transport_demand(
            &range,
            &self.snapshot.units,
            &self.snapshot.specs,
            &self.snapshot.supply,
        ))
    }

    /// Handle the per-unit utilization report.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a reversed period.
    pub fn utilization(&self, params: &Period) -> Result<UtilizationReport> {
        let period = params.span()?;
        Ok(UtilizationReport(utilization(&self.snapshot.units, &period)))
    }

    /// Handle the headline summary for a period.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a reversed period.
    pub fn period_summary(&self, params: &Period) -> Result<PeriodSummary> {
        let period = params.span()?;
        Ok(period_summary(
            &self.snapshot.units,
            &self.snapshot.specs,
            &self.snapshot.supply,
            &period,
        ))
    }

    /// Handle the daily maintenance load.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a reversed period.
    pub fn maintenance_load(&self, params: &Period) -> Result<MaintenanceLoad> {
        let range = params.span()?;
        Ok(MaintenanceLoad(maintenance_load(&self.snapshot.units, &range)))
    }

    /// Handle listing every customer named on an assignment.
    pub fn customers(&self) -> Customers {
        Customers(customers(&self.snapshot.units))
    }

    /// Handle the rental report of one customer.
    ///
    /// An unknown customer yields an empty report rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a blank customer name or a
    /// reversed period.
    pub fn customer_rentals(&self, params: &CustomerRentals) -> Result<RentalReport> {
        let customer = params.customer.trim();
        if customer.is_empty() {
            return Err(PlannerError::invalid_input("customer").with_reason("must not be blank"));
        }
        let period = params.period.span()?;
        let mut notes = Vec::new();
        let rentals = customer_rentals(&self.snapshot.units, customer, &period, &mut notes);
        debug!("{} rentals for customer '{customer}'", rentals.len());

        Ok(RentalReport {
            customer: customer.to_string(),
            period,
            rentals,
            notes,
        })
    }
}
