//! Nested-pair scans.

use crate::domain::{Addend, ValueDomain};
use crate::solution::SolutionIndices;

use super::compare_sum;

/// Tests every pair `i < j` and returns the first match in `(i, j)` order.
///
/// # Example
///
/// ```
/// use findsum_core::{brute_force_unsorted, SolutionIndices};
///
/// assert_eq!(brute_force_unsorted(&[3, 1, 4, 1, 5], 5), SolutionIndices::Found(1, 2));
/// assert_eq!(brute_force_unsorted(&[3, 1, 4], 100), SolutionIndices::NotFound);
/// ```
pub fn brute_force_unsorted<V: Addend>(sample: &[V], target: V) -> SolutionIndices {
    for (i, &current) in sample.iter().enumerate() {
        if let Some(offset) = partner_after(sample, i, current, target) {
            return SolutionIndices::Found(i, i + 1 + offset);
        }
    }
    SolutionIndices::NotFound
}

/// Brute force that skips outer elements outside the prune range.
///
/// An element outside [`ValueDomain::prune_range`] has no in-domain
/// partner, so its inner scan is never started.
pub fn brute_force_min_max_unsorted<V: Addend>(
    sample: &[V],
    target: V,
    domain: &ValueDomain<V>,
) -> SolutionIndices {
    pruned_scan(sample, target, domain)
}

/// Pruned brute force over an ascending sample.
///
/// Returns exactly what [`brute_force_min_max_unsorted`] returns for the
/// same slice. It exists as its own entry so the sorted phase can be timed
/// separately; sorting clusters the in-range elements, which changes how
/// many inner scans run before the first hit.
pub fn brute_force_min_max_sorted<V: Addend>(
    sample: &[V],
    target: V,
    domain: &ValueDomain<V>,
) -> SolutionIndices {
    pruned_scan(sample, target, domain)
}

#[inline]
fn pruned_scan<V: Addend>(sample: &[V], target: V, domain: &ValueDomain<V>) -> SolutionIndices {
    let range = domain.prune_range(target);
    for (i, &current) in sample.iter().enumerate() {
        if !range.contains(current) {
            continue;
        }
        if let Some(offset) = partner_after(sample, i, current, target) {
            return SolutionIndices::Found(i, i + 1 + offset);
        }
    }
    SolutionIndices::NotFound
}

// Offset (from i + 1) of the first later element completing `current`.
#[inline]
fn partner_after<V: Addend>(sample: &[V], i: usize, current: V, target: V) -> Option<usize> {
    sample[i + 1..]
        .iter()
        .position(|&other| compare_sum(current, other, target).is_eq())
}
