//! Solver identities and the phases they run in.

use std::fmt;

use crate::domain::{Addend, ValueDomain};
use crate::solution::SolutionIndices;

use super::{
    brute_force_min_max_sorted, brute_force_min_max_unsorted, brute_force_unsorted,
    lookup_table_unsorted, pincer_sorted,
};

/// Identifies one of the five solvers.
///
/// Lets the harness iterate solvers, label timings and report outcomes
/// without holding function pointers.
///
/// # Example
///
/// ```
/// use findsum_core::{Phase, SolverKind, ValueDomain};
///
/// let domain = ValueDomain::new(-100, 100);
/// let sample = [-2, 1, 3, 5, 9];
///
/// for kind in SolverKind::ALL {
///     let found = kind.solve(&sample, 7, &domain);
///     assert_eq!(found.sum_in(&sample), Some(7), "{}", kind);
/// }
/// assert_eq!(SolverKind::Pincer.phase(), Phase::Sorted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolverKind {
    BruteForce,
    BruteForceMinMax,
    LookupTable,
    SortedBruteForceMinMax,
    Pincer,
}

impl SolverKind {
    pub const ALL: [SolverKind; 5] = [
        SolverKind::BruteForce,
        SolverKind::BruteForceMinMax,
        SolverKind::LookupTable,
        SolverKind::SortedBruteForceMinMax,
        SolverKind::Pincer,
    ];

    /// Solvers that accept input in any order.
    pub const UNSORTED: [SolverKind; 3] = [
        SolverKind::BruteForce,
        SolverKind::BruteForceMinMax,
        SolverKind::LookupTable,
    ];

    /// Solvers that require ascending input.
    pub const SORTED: [SolverKind; 2] = [SolverKind::SortedBruteForceMinMax, SolverKind::Pincer];

    /// Stable identifier, used in logs and CSV output.
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::BruteForce => "brute_force_unsorted",
            SolverKind::BruteForceMinMax => "brute_force_min_max_unsorted",
            SolverKind::LookupTable => "lookup_table_unsorted",
            SolverKind::SortedBruteForceMinMax => "brute_force_min_max_sorted",
            SolverKind::Pincer => "pincer_sorted",
        }
    }

    /// Right-aligned label used by the plain-text report.
    pub fn label(self) -> &'static str {
        match self {
            SolverKind::BruteForce => "Brute solution",
            SolverKind::BruteForceMinMax => "     w/ MinMax",
            SolverKind::LookupTable => "Table solution",
            SolverKind::SortedBruteForceMinMax => "Brute w/MinMax",
            SolverKind::Pincer => "        Pincer",
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            SolverKind::BruteForce | SolverKind::BruteForceMinMax | SolverKind::LookupTable => {
                Phase::Unsorted
            }
            SolverKind::SortedBruteForceMinMax | SolverKind::Pincer => Phase::Sorted,
        }
    }

    pub fn requires_sorted(self) -> bool {
        self.phase() == Phase::Sorted
    }

    /// Runs this solver.
    ///
    /// `sample` must be sorted ascending when [`requires_sorted`](Self::requires_sorted) is true.
    #[inline]
    pub fn solve<V: Addend>(self, sample: &[V], target: V, domain: &ValueDomain<V>) -> SolutionIndices {
        match self {
            SolverKind::BruteForce => brute_force_unsorted(sample, target),
            SolverKind::BruteForceMinMax => brute_force_min_max_unsorted(sample, target, domain),
            SolverKind::LookupTable => lookup_table_unsorted(sample, target, domain),
            SolverKind::SortedBruteForceMinMax => brute_force_min_max_sorted(sample, target, domain),
            SolverKind::Pincer => pincer_sorted(sample, target, domain),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input ordering a group of solvers runs against within one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The freshly generated sample.
    Unsorted,
    /// The same sample after an in-place ascending sort.
    Sorted,
}

impl Phase {
    pub fn solvers(self) -> &'static [SolverKind] {
        match self {
            Phase::Unsorted => &SolverKind::UNSORTED,
            Phase::Sorted => &SolverKind::SORTED,
        }
    }

    /// Section heading in the plain-text report.
    pub fn heading(self) -> &'static str {
        match self {
            Phase::Unsorted => "UNSORTED",
            Phase::Sorted => "SORTED",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Unsorted => f.write_str("unsorted"),
            Phase::Sorted => f.write_str("sorted"),
        }
    }
}
