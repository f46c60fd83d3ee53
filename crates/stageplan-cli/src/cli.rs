//! Command handlers for the CLI.
//!
//! Each handler turns its arguments into core parameters, asks the planner
//! and renders the markdown result.

use anyhow::{Context, Result};
use log::debug;
use stageplan_core::{
    params::{CheckAvailability, CustomerRentals, ListWindows, Period, ShowSchedule, StageOn},
    Planner,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Dispatches parsed commands to the planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Run one command; `None` lists units.
    pub fn run(&self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Specs) => self.specs(),
            Some(Commands::Units) | None => self.units(),
            Some(Commands::Schedule(args)) => self.schedule(&args.into()),
            Some(Commands::Stage(args)) => self.stage(&args.into()),
            Some(Commands::Check(args)) => self.check(&args.into()),
            Some(Commands::Demand(args)) => self.demand(&args.into()),
            Some(Commands::Utilization(args)) => self.utilization(&args.into()),
            Some(Commands::Summary(args)) => self.summary(&args.into()),
            Some(Commands::Windows(args)) => self.windows(&args.into()),
            Some(Commands::Maintenance(args)) => self.maintenance(&args.into()),
            Some(Commands::Customers) => self.customers(),
            Some(Commands::Rentals(args)) => self.rentals(&args.into()),
        }
    }

    fn specs(&self) -> Result<()> {
        self.renderer
            .render(&format!("# Size specs\n\n{}", self.planner.specs()))
    }

    fn units(&self) -> Result<()> {
        let units = self.planner.list_units();
        self.renderer
            .render(&format!("# Units ({})\n\n{}", units.len(), units))
    }

    fn schedule(&self, params: &ShowSchedule) -> Result<()> {
        let schedule = self
            .planner
            .show_schedule(params)
            .with_context(|| format!("Failed to build schedule for '{}'", params.unit))?;
        self.renderer.render(&schedule.to_string())
    }

    fn stage(&self, params: &StageOn) -> Result<()> {
        let status = self
            .planner
            .stage_on(params)
            .with_context(|| format!("Failed to resolve stage for '{}'", params.unit))?;
        self.renderer.render(&status.to_string())
    }

    fn check(&self, params: &CheckAvailability) -> Result<()> {
        let availability = self
            .planner
            .check_availability(params)
            .with_context(|| format!("Failed to check availability of '{}'", params.unit))?;
        debug!("availability verdict: {:?}", availability.verdict);
        self.renderer.render(&availability.to_string())
    }

    fn demand(&self, params: &Period) -> Result<()> {
        let demand = self
            .planner
            .transport_demand(params)
            .context("Failed to project transport demand")?;
        self.renderer.render(&demand.to_string())
    }

    fn utilization(&self, params: &Period) -> Result<()> {
        let report = self
            .planner
            .utilization(params)
            .context("Failed to compute utilization")?;
        self.renderer.render(&format!(
            "# Utilization {} – {}\n\n{}",
            params.from, params.to, report
        ))
    }

    fn summary(&self, params: &Period) -> Result<()> {
        let summary = self
            .planner
            .period_summary(params)
            .context("Failed to summarise period")?;
        self.renderer.render(&summary.to_string())
    }

    fn windows(&self, params: &ListWindows) -> Result<()> {
        let windows = self
            .planner
            .list_windows(params)
            .with_context(|| format!("Failed to list windows for '{}'", params.unit))?;
        self.renderer.render(&format!(
            "# {} windows for {}\n\n{}",
            params.mode, params.unit, windows
        ))
    }

    fn maintenance(&self, params: &Period) -> Result<()> {
        let load = self
            .planner
            .maintenance_load(params)
            .context("Failed to compute maintenance load")?;
        self.renderer.render(&format!(
            "# Maintenance load {} – {}\n\n{}",
            params.from, params.to, load
        ))
    }

    fn customers(&self) -> Result<()> {
        let customers = self.planner.customers();
        self.renderer
            .render(&format!("# Customers ({})\n\n{}", customers.len(), customers))
    }

    fn rentals(&self, params: &CustomerRentals) -> Result<()> {
        let report = self
            .planner
            .customer_rentals(params)
            .with_context(|| format!("Failed to list rentals for '{}'", params.customer))?;
        self.renderer.render(&report.to_string())
    }
}
