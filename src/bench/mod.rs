//! # Benchmark Core
//!
//! Wall-clock measurement of container operations.
//!
//! [`measure`] times a single closure with a monotonic clock.
//! [`BenchRunner`] executes the fixed fill-forward / read-forward /
//! drain-backward sequence for each container variant and collects one
//! [`crate::report::Sample`] per step.

mod measure;
mod runner;

pub use measure::measure;
pub use runner::{fill, BenchRunner};
