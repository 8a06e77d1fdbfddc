//! # seqbench
//!
//! A timing harness comparing two sequential-container variants —
//! contiguous `Vec` storage and `LinkedList` node storage — on three
//! operations: tail append, indexed read, and tail-to-head removal.
//!
//! ## Features
//!
//! - Uniform benchmarking over a small container trait
//! - Wall-clock measurement with a monotonic clock
//! - Formatted timing table plus optional JSON report
//! - TOML configuration for the operation count
//!
//! ## Example
//!
//! ```rust
//! use seqbench::bench::BenchRunner;
//!
//! let report = BenchRunner::new(1_000).run();
//! print!("{}", report.table());
//! ```

pub mod bench;
pub mod config;
pub mod container;
pub mod report;

pub use bench::BenchRunner;
pub use config::{BenchConfig, ConfigLoader, DEFAULT_OPERATIONS};
pub use container::{LinkedContainer, SequentialContainer, VecContainer};
pub use report::{BenchReport, Operation, Sample};
