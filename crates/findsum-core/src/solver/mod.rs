//! The five two-sum solvers.
//!
//! All solvers are pure functions over a slice and never mutate it.
//! Sorted solvers expect the caller to have sorted the sample ascending.
//! Samples shorter than two elements yield [`SolutionIndices::NotFound`].
//!
//! | Solver | Input | Extra space | Worst case |
//! |--------|-------|-------------|------------|
//! | [`brute_force_unsorted`] | any | O(1) | O(n²) |
//! | [`brute_force_min_max_unsorted`] | any | O(1) | O(n²) |
//! | [`lookup_table_unsorted`] | any | O(domain) | O(n) |
//! | [`brute_force_min_max_sorted`] | ascending | O(1) | O(n²) |
//! | [`pincer_sorted`] | ascending | O(1) | O(n) |
//!
//! [`SolutionIndices::NotFound`]: crate::SolutionIndices::NotFound

mod brute_force;
mod kind;
mod lookup;
mod pincer;

#[cfg(test)]
mod tests;

pub use brute_force::{
    brute_force_min_max_sorted, brute_force_min_max_unsorted, brute_force_unsorted,
};
pub use kind::{Phase, SolverKind};
pub use lookup::lookup_table_unsorted;
pub use pincer::pincer_sorted;

use std::cmp::Ordering;

use crate::domain::Addend;

// Orders `a + b` against `target`; a sum past the type's range orders by its sign.
#[inline]
fn compare_sum<V: Addend>(a: V, b: V, target: V) -> Ordering {
    match a.checked_add(&b) {
        Some(sum) => sum.cmp(&target),
        None if a > V::zero() => Ordering::Greater,
        None => Ordering::Less,
    }
}
