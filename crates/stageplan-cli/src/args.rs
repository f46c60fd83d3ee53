//! Command-line argument definitions using clap.
//!
//! Each subcommand has an argument struct with clap derives and a `From`
//! conversion into the matching core parameter type, so clap never leaks
//! into `stageplan_core`.

use std::{fmt, path::PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use stageplan_core::{
    params::{CheckAvailability, CustomerRentals, ListWindows, Period, ShowSchedule, StageOn},
    StageMode,
};

/// Stage schedules and transport demand for mobile equipment fleets
///
/// Reads a JSON snapshot of units, assignments and owned support vehicles,
/// then answers questions about it: which stage a unit is in, whether a new
/// assignment fits, and how many vehicles must be sourced externally.
#[derive(Parser)]
#[command(version, about, name = "sp")]
pub struct Args {
    /// Path to the snapshot JSON file. Defaults to
    /// $XDG_DATA_HOME/stageplan/snapshot.json
    #[arg(long, global = true)]
    pub snapshot_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands; without one, units are listed
#[derive(Subcommand)]
pub enum Commands {
    /// Show the size spec table
    Specs,
    /// List units and their assignments
    #[command(alias = "u")]
    Units,
    /// Show the stage schedule of a unit
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// Show which stage a unit is in on a given day
    Stage(StageArgs),
    /// Check whether a new assignment fits a unit's calendar
    #[command(alias = "c")]
    Check(CheckArgs),
    /// Project daily support-vehicle demand over a period
    #[command(alias = "d")]
    Demand(PeriodArgs),
    /// Per-unit utilization over a period
    Utilization(PeriodArgs),
    /// Headline figures for a period
    Summary(PeriodArgs),
    /// Rental or maintenance windows of a unit
    Windows(WindowsArgs),
    /// Units in maintenance per day
    Maintenance(PeriodArgs),
    /// List customers named on assignments
    Customers,
    /// Rentals of one customer over a period
    #[command(alias = "r")]
    Rentals(RentalsArgs),
}

/// Stage subset selected with `--mode`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// All six stages
    Full,
    /// Unloading, work and loading at the customer site
    #[value(alias = "rental")]
    Occupied,
    /// Maintenance only
    Maintenance,
}

impl From<ModeArg> for StageMode {
    fn from(val: ModeArg) -> Self {
        match val {
            ModeArg::Full => StageMode::Full,
            ModeArg::Occupied => StageMode::Occupied,
            ModeArg::Maintenance => StageMode::Maintenance,
        }
    }
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", StageMode::from(*self))
    }
}

#[derive(ClapArgs)]
pub struct ScheduleArgs {
    /// Unit ID or name, e.g. DN-500-2
    pub unit: String,
    /// Only show this assignment
    #[arg(short, long)]
    pub assignment: Option<String>,
}

impl From<ScheduleArgs> for ShowSchedule {
    fn from(val: ScheduleArgs) -> Self {
        ShowSchedule {
            unit: val.unit,
            assignment: val.assignment,
        }
    }
}

#[derive(ClapArgs)]
pub struct StageArgs {
    /// Unit ID or name
    pub unit: String,
    /// Day to look up (YYYY-MM-DD)
    pub day: Date,
    /// Which stages to consider
    #[arg(short, long, value_enum, default_value_t = ModeArg::Full)]
    pub mode: ModeArg,
}

impl From<StageArgs> for StageOn {
    fn from(val: StageArgs) -> Self {
        StageOn {
            unit: val.unit,
            day: val.day,
            mode: val.mode.into(),
        }
    }
}

#[derive(ClapArgs)]
pub struct CheckArgs {
    /// Unit ID or name
    pub unit: String,
    /// Candidate start date (YYYY-MM-DD)
    pub start: Date,
    /// Candidate cycle as six comma-separated day counts; defaults to the
    /// unit's standard cycle
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub durations: Option<Vec<f64>>,
}

impl From<CheckArgs> for CheckAvailability {
    fn from(val: CheckArgs) -> Self {
        CheckAvailability {
            unit: val.unit,
            start: val.start,
            durations: val.durations,
        }
    }
}

#[derive(ClapArgs)]
pub struct PeriodArgs {
    /// First day of the period (YYYY-MM-DD)
    pub from: Date,
    /// Last day of the period, inclusive
    pub to: Date,
}

impl From<PeriodArgs> for Period {
    fn from(val: PeriodArgs) -> Self {
        Period {
            from: val.from,
            to: val.to,
        }
    }
}

#[derive(ClapArgs)]
pub struct WindowsArgs {
    /// Unit ID or name
    pub unit: String,
    #[command(flatten)]
    pub period: PeriodArgs,
    /// Which stages to list
    #[arg(short, long, value_enum, default_value_t = ModeArg::Occupied)]
    pub mode: ModeArg,
}

impl From<WindowsArgs> for ListWindows {
    fn from(val: WindowsArgs) -> Self {
        ListWindows {
            unit: val.unit,
            mode: val.mode.into(),
            period: val.period.into(),
        }
    }
}

#[derive(ClapArgs)]
pub struct RentalsArgs {
    /// Customer name as stored on assignments
    pub customer: String,
    #[command(flatten)]
    pub period: PeriodArgs,
}

impl From<RentalsArgs> for CustomerRentals {
    fn from(val: RentalsArgs) -> Self {
        CustomerRentals {
            customer: val.customer,
            period: val.period.into(),
        }
    }
}
