//! Two-pointer search over an ascending sample.

use std::cmp::Ordering;

use num_traits::Saturating;

use crate::domain::{Addend, ValueDomain};
use crate::solution::SolutionIndices;

use super::compare_sum;

/// Converges two cursors from both ends of a sorted sample.
///
/// Binary search first narrows the window to the elements that can take
/// part in a pair: the left cursor starts at the first value `>= low - 1`
/// and the right cursor at the last value `<= high + 1`, where
/// `[low, high]` is the prune range. Each step then discards at least one
/// element, and a cursor that moves skips the whole run of duplicates of
/// the value it just consumed.
///
/// The sample must be sorted ascending. This is not checked; unsorted
/// input may miss a pair but never panics.
///
/// # Example
///
/// ```
/// use findsum_core::{pincer_sorted, SolutionIndices, ValueDomain};
///
/// let domain = ValueDomain::new(-100, 100);
///
/// assert_eq!(pincer_sorted(&[-2, 1, 3, 5, 9], 8, &domain), SolutionIndices::Found(2, 3));
/// assert_eq!(pincer_sorted(&[-2, 1, 3, 5, 9], 13, &domain), SolutionIndices::NotFound);
/// ```
pub fn pincer_sorted<V: Addend>(
    sample: &[V],
    target: V,
    domain: &ValueDomain<V>,
) -> SolutionIndices {
    let range = domain.prune_range(target);
    let below = Saturating::saturating_sub(range.low(), V::one());
    let above = Saturating::saturating_add(range.high(), V::one());

    let mut low = sample.partition_point(|&v| v < below);
    let Some(mut high) = sample.partition_point(|&v| v <= above).checked_sub(1) else {
        return SolutionIndices::NotFound;
    };

    while low < high {
        match compare_sum(sample[low], sample[high], target) {
            Ordering::Equal => return SolutionIndices::Found(low, high),
            Ordering::Less => {
                let consumed = sample[low];
                low += 1;
                while low < high && sample[low] == consumed {
                    low += 1;
                }
            }
            Ordering::Greater => {
                let consumed = sample[high];
                high -= 1;
                while low < high && sample[high] == consumed {
                    high -= 1;
                }
            }
        }
    }
    SolutionIndices::NotFound
}
