//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Default number of operations per benchmark step.
pub const DEFAULT_OPERATIONS: usize = 10_000;

/// Root configuration structure for seqbench.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    /// Benchmark parameters.
    pub bench: BenchSection,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Report output configuration.
    pub report: ReportConfig,
}

/// Benchmark section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSection {
    /// Number of operations per benchmark step. Zero is legal and
    /// makes every step a no-op.
    pub operations: usize,
}

impl Default for BenchSection {
    fn default() -> Self {
        Self {
            operations: DEFAULT_OPERATIONS,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level (default).
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level (least verbose).
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Also emit the samples as pretty JSON after the table.
    pub json: bool,
}
