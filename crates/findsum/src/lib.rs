//! FindSum - two-sum solvers and a benchmark that keeps them honest.
//!
//! Five solvers find two elements of a sample that add up to a target.
//! The benchmark times them on random samples and aborts as soon as two
//! solvers with the same precondition disagree.
//!
//! # Example
//!
//! ```rust
//! use findsum::prelude::*;
//!
//! let domain = ValueDomain::new(-100, 100);
//! let sample = [1, 5, 3, -2, 9];
//!
//! let found = lookup_table_unsorted(&sample, 7, &domain);
//! assert_eq!(found.sum_in(&sample), Some(7));
//! ```

// Solver suite
pub use findsum_core::{
    brute_force_min_max_sorted, brute_force_min_max_unsorted, brute_force_unsorted,
    cross_validate, lookup_table_unsorted, pincer_sorted, Addend, AlgorithmDisagreement,
    DisagreementReason, Phase, PruneRange, SolutionIndices, SolverKind, SolverOutcome,
    ValueDomain,
};

// Configuration
pub use findsum_config::{ConfigError, FindSumConfig};

// Benchmark harness
pub use findsum_benchmark::{
    Benchmark, BenchmarkConfig, BenchmarkError, BenchmarkResult, CsvExporter, MarkdownReport,
    SizeResult, SolverStats, TextReport,
};

/// Console logging, enabled by the `console` feature.
#[cfg(feature = "console")]
pub use findsum_console as console;

pub mod prelude {
    pub use super::{
        brute_force_min_max_sorted, brute_force_min_max_unsorted, brute_force_unsorted,
        lookup_table_unsorted, pincer_sorted,
    };
    pub use super::{SolutionIndices, SolverKind, ValueDomain};
    pub use super::{Benchmark, BenchmarkConfig, FindSumConfig, TextReport};
}
