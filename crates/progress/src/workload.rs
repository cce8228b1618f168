//! Demo workload: compute `2^iterations mod modulus` by repeated doubling,
//! reporting progress at each whole percent.

use std::time::Duration;

use edgefollow_common::error::{EdgeFollowError, EdgeFollowResult};

use crate::task::ProgressReporter;

pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

/// Parameters for [`doubling_mod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoublingWorkload {
    pub iterations: u64,
    pub modulus: u64,
    /// Artificial pause after each reported percent, to make progress visible.
    pub pause_per_percent: Duration,
}

impl DoublingWorkload {
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            modulus: DEFAULT_MODULUS,
            pause_per_percent: Duration::ZERO,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_per_percent = pause;
        self
    }
}

/// Run the workload, checking for cancellation at each percent boundary.
pub fn doubling_mod(
    workload: DoublingWorkload,
    reporter: &ProgressReporter,
) -> EdgeFollowResult<u64> {
    if workload.modulus == 0 {
        return Err(EdgeFollowError::config("modulus must be non-zero"));
    }

    let step = (workload.iterations / 100).max(1);
    let mut result = 1 % workload.modulus;
    reporter.set(0);

    for i in 1..=workload.iterations {
        result = ((u128::from(result) * 2) % u128::from(workload.modulus)) as u64;
        if i % step == 0 {
            reporter.checkpoint()?;
            reporter.set(((u128::from(i) * 100) / u128::from(workload.iterations)) as u32);
            if !workload.pause_per_percent.is_zero() {
                std::thread::sleep(workload.pause_per_percent);
            }
        }
    }

    reporter.set(100);
    Ok(result)
}
