use std::time::Duration;

use crate::error::{Error, Result};
use crate::simulation::constants::{DEFAULT_STEP_INTERVAL, DEFAULT_TOTAL_ITERATIONS};

/// Parameters for a single simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub total_iterations: u32,
    pub step_interval: Duration,
}

impl SimulationConfig {
    pub fn new(total_iterations: u32, step_interval: Duration) -> Self {
        Self {
            total_iterations,
            step_interval,
        }
    }

    /// Reject configurations the driver cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.total_iterations == 0 {
            return Err(Error::InvalidConfig {
                reason: "total_iterations must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOTAL_ITERATIONS, DEFAULT_STEP_INTERVAL)
    }
}

/// Load the simulation configuration.
///
/// The run length is fixed; nothing is read from the environment or arguments.
pub fn load_simulation_config() -> Result<SimulationConfig> {
    let config = SimulationConfig::default();
    config.validate()?;
    Ok(config)
}
