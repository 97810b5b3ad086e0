use snafu::ResultExt;

use crate::config::SimulationConfig;
use crate::error::{ReportFailedSnafu, Result};

pub mod constants;
pub mod percent;
pub mod reporter;

pub use self::percent::percentage_complete;
pub use self::reporter::{ConsoleProgressReporter, ProgressReporter, print_percentage_complete};

/// Drives a fixed-length run, pausing before each step and reporting progress after it.
pub struct Simulation<R: ProgressReporter> {
    config: SimulationConfig,
    reporter: R,
}

impl<R: ProgressReporter> Simulation<R> {
    pub fn new(config: SimulationConfig, reporter: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, reporter })
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub async fn run(&mut self) -> Result<()> {
        let total = self.config.total_iterations;
        log::info!(
            "simulation start total_iterations={} step_interval={:?}",
            total,
            self.config.step_interval
        );

        for i in 0..total {
            tokio::time::sleep(self.config.step_interval).await;
            let iteration = i + 1;
            log::debug!("simulation step iteration={iteration} total_iterations={total}");
            self.reporter
                .report(iteration, total)
                .context(ReportFailedSnafu { iteration })?;
        }

        log::info!("simulation finished total_iterations={total}");
        Ok(())
    }
}
