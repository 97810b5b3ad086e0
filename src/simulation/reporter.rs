use std::io::{self, Write};

use crate::error::Result;
use crate::simulation::percent::percentage_complete;

/// Trait for reporting how far a run has progressed.
pub trait ProgressReporter {
    /// Report that `iteration` of `total_iterations` steps have completed.
    ///
    /// # Arguments
    /// * `iteration` - Number of completed steps, starting at 1
    /// * `total_iterations` - Total number of steps in the run
    ///
    /// # Returns
    /// * `Result<()>` - Fails if `total_iterations` is zero or the sink cannot be written
    fn report(&mut self, iteration: u32, total_iterations: u32) -> Result<()>;
}

/// A minimal progress reporter that prints one `<N>%` line per report.
pub struct ConsoleProgressReporter<W: Write> {
    writer: W,
}

impl ConsoleProgressReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgressReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ProgressReporter for ConsoleProgressReporter<W> {
    fn report(&mut self, iteration: u32, total_iterations: u32) -> Result<()> {
        let progress = percentage_complete(iteration, total_iterations)?;
        writeln!(self.writer, "{progress}%")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Print the percentage of `total_iterations` completed to stdout.
pub fn print_percentage_complete(iteration: u32, total_iterations: u32) -> Result<()> {
    ConsoleProgressReporter::stdout().report(iteration, total_iterations)
}
