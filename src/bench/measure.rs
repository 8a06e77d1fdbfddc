//! Wall-clock measurement helper.

use std::time::{Duration, Instant};

/// Measure wall-clock time for a synchronous operation.
///
/// Uses [`Instant`], a monotonic high-resolution clock, so the
/// returned duration is never negative.
pub fn measure<F, R>(f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed)
}
