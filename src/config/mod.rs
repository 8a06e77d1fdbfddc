//! # Configuration System
//!
//! TOML-based configuration for seqbench. Every field has a default,
//! so a missing configuration file is not an error.
//!
//! ## Example Configuration
//!
//! ```toml
//! [bench]
//! operations = 10000
//!
//! [logging]
//! level = "info"
//!
//! [report]
//! json = false
//! ```

mod error;
mod loader;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{
    BenchConfig, BenchSection, LogLevel, LoggingConfig, ReportConfig, DEFAULT_OPERATIONS,
};
