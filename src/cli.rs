use clap::Parser;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::simulation::{ConsoleProgressReporter, Simulation};

/// Simulate a fixed-length job and print its progress.
#[derive(Parser, Debug)]
#[command(name = "runsim", version, about, long_about = None)]
pub struct Args {}

pub async fn run(_args: Args, config: SimulationConfig) -> Result<()> {
    let mut simulation = Simulation::new(config, ConsoleProgressReporter::stdout())?;
    simulation.run().await
}
