//! stageplan CLI application
//!
//! Command-line reports over an equipment snapshot: stage schedules,
//! availability checks and support-vehicle demand.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stageplan_core::PlannerBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        snapshot_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_snapshot_path(snapshot_file)
        .build()
        .context("Failed to load snapshot")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("stageplan started with {} units", planner.units().len());

    Cli::new(planner, renderer).run(command)
}
