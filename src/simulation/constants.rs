use std::time::Duration;

// Run length
pub const DEFAULT_TOTAL_ITERATIONS: u32 = 10;

// Pause before each progress report
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(100);
