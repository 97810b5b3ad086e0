use crate::error::{Error, Result};

/// Percentage of `total_iterations` completed after `iteration` steps,
/// rounded to the nearest whole number with ties to even.
pub fn percentage_complete(iteration: u32, total_iterations: u32) -> Result<u64> {
    if total_iterations == 0 {
        return Err(Error::DivisionByZero { iteration });
    }
    let ratio = 100.0 * f64::from(iteration) / f64::from(total_iterations);
    Ok(ratio.round_ties_even() as u64)
}
