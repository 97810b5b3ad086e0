use crate::*;
use runsim::config::{SimulationConfig, load_simulation_config};
use runsim::error::{Error, Result};
use runsim::simulation::{ConsoleProgressReporter, ProgressReporter, Simulation};
use std::time::{Duration, Instant};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        test_simulate_default_output,
        test_simulate_default_duration,
        test_simulate_sleeps_before_each_report,
        test_simulate_stops_on_report_error
    ));
}

pub async fn test_simulate_default_output() -> Result<()> {
    let mut sim = Simulation::new(
        load_simulation_config()?,
        ConsoleProgressReporter::new(Vec::new()),
    )?;
    sim.run().await?;

    let output = String::from_utf8_lossy(&sim.into_reporter().into_inner()).into_owned();
    let expected: Vec<String> = (1..=10).map(|i| format!("{}%", i * 10)).collect();
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
    Ok(())
}

pub async fn test_simulate_default_duration() -> Result<()> {
    let config = load_simulation_config()?;
    let mut sim = Simulation::new(config, ConsoleProgressReporter::new(std::io::sink()))?;

    let start = Instant::now();
    sim.run().await?;
    assert!(start.elapsed() >= Duration::from_secs(1));
    Ok(())
}

struct TimedRecorder(Vec<Instant>);

impl ProgressReporter for TimedRecorder {
    fn report(&mut self, _iteration: u32, _total_iterations: u32) -> Result<()> {
        self.0.push(Instant::now());
        Ok(())
    }
}

pub async fn test_simulate_sleeps_before_each_report() -> Result<()> {
    let step = Duration::from_millis(50);
    let mut sim = Simulation::new(SimulationConfig::new(4, step), TimedRecorder(Vec::new()))?;

    let start = Instant::now();
    sim.run().await?;
    let stamps = sim.into_reporter().0;

    assert_eq!(stamps.len(), 4);
    assert!(stamps[0].duration_since(start) >= step);
    for pair in stamps.windows(2) {
        assert!(pair[1].duration_since(pair[0]) >= step);
    }
    Ok(())
}

struct FailAt(u32);

impl ProgressReporter for FailAt {
    fn report(&mut self, iteration: u32, _total_iterations: u32) -> Result<()> {
        if iteration == self.0 {
            return Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe).into());
        }
        Ok(())
    }
}

pub async fn test_simulate_stops_on_report_error() -> Result<()> {
    let config = SimulationConfig::new(5, Duration::ZERO);
    let mut sim = Simulation::new(config, FailAt(3))?;

    let err = sim.run().await.unwrap_err();
    assert!(matches!(err, Error::ReportFailed { iteration: 3, .. }));
    Ok(())
}
