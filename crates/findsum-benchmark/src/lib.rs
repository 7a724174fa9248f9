//! Benchmarking harness for the FindSum solver suite.
//!
//! This crate times every solver on randomized samples, checks that
//! solvers sharing a precondition agree on each sample, and renders the
//! averages as text, CSV and Markdown.
//!
//! # Overview
//!
//! For each configured size the harness repeats a trial:
//! - Generate a fresh sample and target
//! - Time the three unsorted solvers, then cross-validate them
//! - Sort the sample in place
//! - Time the two sorted solvers, then cross-validate them
//!
//! A disagreement aborts the run with [`BenchmarkError::Disagreement`].
//!
//! # Example
//!
//! ```
//! use findsum_benchmark::{Benchmark, BenchmarkConfig, TextReport};
//! use findsum_core::SolverKind;
//!
//! let config = BenchmarkConfig::new("Smoke")
//!     .with_sizes([16, 64])
//!     .with_iterations(20)
//!     .with_random_seed(7);
//!
//! let result = Benchmark::new(config).run().unwrap();
//!
//! assert_eq!(result.sizes.len(), 2);
//! assert_eq!(result.sizes[0].stats(SolverKind::Pincer).runs, 20);
//! assert!(TextReport::to_string(&result).contains("Now solving for input size n = 64"));
//! ```

mod config;
mod error;
mod generator;
mod report;
mod result;
mod runner;

#[cfg(test)]
mod tests;

pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use generator::SampleGenerator;
pub use report::{CsvExporter, MarkdownReport, TextReport};
pub use result::{BenchmarkResult, Measurement, SizeResult, SolverStats, TrialResult};
pub use runner::Benchmark;
