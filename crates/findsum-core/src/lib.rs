//! FindSum Core - the two-sum solver suite
//!
//! This crate provides the pure algorithmic half of FindSum:
//! - [`ValueDomain`] bounds and the prune range derived from a target
//! - [`SolutionIndices`] results instead of sentinel pairs
//! - Five solvers with different sortedness preconditions
//! - [`cross_validate`] for checking that solvers agree on one input
//!
//! # Example
//!
//! ```
//! use findsum_core::{pincer_sorted, lookup_table_unsorted, SolutionIndices, ValueDomain};
//!
//! let domain = ValueDomain::new(-100, 100);
//! let sample = [1, 5, 3, -2, 9];
//!
//! let found = lookup_table_unsorted(&sample, 7, &domain);
//! assert_eq!(found.sum_in(&sample), Some(7));
//!
//! let mut sorted = sample;
//! sorted.sort_unstable();
//! assert_eq!(pincer_sorted(&sorted, 7, &domain), SolutionIndices::Found(0, 4));
//! ```

pub mod domain;
pub mod error;
pub mod solution;
pub mod solver;
pub mod validation;

pub use domain::{Addend, PruneRange, ValueDomain};
pub use error::{AlgorithmDisagreement, DisagreementReason, SolverOutcome};
pub use solution::SolutionIndices;
pub use solver::{
    brute_force_min_max_sorted, brute_force_min_max_unsorted, brute_force_unsorted,
    lookup_table_unsorted, pincer_sorted, Phase, SolverKind,
};
pub use validation::cross_validate;
