//! Benchmark samples and report rendering.
//!
//! Produces the human-readable timing table written to stdout and an
//! optional JSON serialization of the same samples for CI integration.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Table header line.
pub const TABLE_HEADER: &str = "Method | Collection | Operations | Time (ms)";

/// Width of the separator rule under the header.
pub const TABLE_RULE_WIDTH: usize = 48;

/// Timed operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    /// Fill-forward: tail appends.
    Add,
    /// Read-forward: indexed reads.
    Get,
    /// Drain-backward: tail-to-head removals.
    Remove,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add"),
            Self::Get => write!(f, "Get"),
            Self::Remove => write!(f, "Remove"),
        }
    }
}

/// One timing record for a single (operation, variant) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    /// The timed operation.
    pub operation: Operation,
    /// Container variant label.
    pub variant: &'static str,
    /// Number of operations performed.
    pub operations: usize,
    /// Elapsed wall-clock time in nanoseconds.
    pub elapsed_ns: u64,
}

impl Sample {
    /// Create a sample from a measured duration.
    #[must_use]
    pub fn new(
        operation: Operation,
        variant: &'static str,
        operations: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            operation,
            variant,
            operations,
            elapsed_ns: elapsed.as_nanos() as u64,
        }
    }

    /// Elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ns as f64 / 1_000_000.0
    }

    /// Render as one table row: `Add | Vec | 10000 | 1.500 ms`.
    #[must_use]
    pub fn row(&self) -> String {
        format!(
            "{} | {} | {} | {:.3} ms",
            self.operation,
            self.variant,
            self.operations,
            self.elapsed_ms()
        )
    }
}

/// Accumulates samples and produces the final report.
#[derive(Debug, Serialize)]
pub struct BenchReport {
    /// Suite name.
    pub suite_name: String,
    /// RFC 3339 timestamp of report creation.
    pub timestamp: String,
    /// Collected samples, in execution order.
    pub samples: Vec<Sample>,
}

impl BenchReport {
    /// Create an empty report.
    #[must_use]
    pub fn new(suite_name: &str) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            samples: Vec::new(),
        }
    }

    /// Append a sample.
    pub fn add(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Render the timing table, one row per sample in execution order.
    #[must_use]
    pub fn table(&self) -> String {
        let mut out = String::new();
        out.push_str(TABLE_HEADER);
        out.push('\n');
        out.push_str(&"-".repeat(TABLE_RULE_WIDTH));
        out.push('\n');
        for sample in &self.samples {
            out.push_str(&sample.row());
            out.push('\n');
        }
        out
    }

    /// Serialize the report to JSON for CI integration.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
