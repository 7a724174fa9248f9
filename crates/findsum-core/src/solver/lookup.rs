//! Single-pass complement table.

use std::collections::HashMap;

use crate::domain::{Addend, ValueDomain};
use crate::solution::SolutionIndices;

/// Finds a pair in one forward pass using a table of required complements.
///
/// The table is keyed by the value that *would complete* a pair, mapping
/// to the index of the element that needs it. When the current element's
/// value is already a key, the earlier element established that this value
/// completes it, and `(earlier, current)` is returned. Otherwise the
/// current element records `target - value` as its own requirement,
/// replacing any previous requirement for the same complement.
///
/// Elements outside the prune range are skipped, so the table never holds
/// more entries than the range is wide (201 on the default domain).
///
/// # Example
///
/// ```
/// use findsum_core::{lookup_table_unsorted, SolutionIndices, ValueDomain};
///
/// let domain = ValueDomain::new(-100, 100);
///
/// // 5 at index 0 requires a 2; the 2 at index 2 completes it.
/// assert_eq!(lookup_table_unsorted(&[5, 1, 2], 7, &domain), SolutionIndices::Found(0, 2));
/// ```
pub fn lookup_table_unsorted<V: Addend>(
    sample: &[V],
    target: V,
    domain: &ValueDomain<V>,
) -> SolutionIndices {
    let range = domain.prune_range(target);
    let mut required: HashMap<V, usize> = HashMap::with_capacity(range.width().min(sample.len()));

    for (index, &value) in sample.iter().enumerate() {
        if !range.contains(value) {
            continue;
        }
        if let Some(&earlier) = required.get(&value) {
            return SolutionIndices::Found(earlier, index);
        }
        required.insert(target - value, index);
    }
    SolutionIndices::NotFound
}
