//! Solver result type.

use std::fmt;

use num_traits::CheckedAdd;

use crate::domain::Addend;

/// Indices of two elements that add up to the target, or `NotFound`.
///
/// Within one solver the first index is the element discovered earlier.
/// Different solvers may report different pairs for the same input when
/// duplicates exist; only the sum is comparable across solvers.
///
/// # Example
///
/// ```
/// use findsum_core::SolutionIndices;
///
/// let sample = [4, 8, 15, 16];
/// let found = SolutionIndices::Found(1, 3);
///
/// assert!(found.is_found());
/// assert_eq!(found.sum_in(&sample), Some(24));
/// assert!(found.is_valid_for(&sample, 24));
/// assert_eq!(SolutionIndices::NotFound.sum_in(&sample), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SolutionIndices {
    Found(usize, usize),
    #[default]
    NotFound,
}

impl SolutionIndices {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(..))
    }

    /// Returns the index pair, if a solution was found.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Found(i, j) => Some((i, j)),
            Self::NotFound => None,
        }
    }

    /// Returns the values at both indices.
    ///
    /// `None` when not found or when either index is out of bounds.
    pub fn values_in<V: Addend>(&self, sample: &[V]) -> Option<(V, V)> {
        let (i, j) = self.pair()?;
        Some((*sample.get(i)?, *sample.get(j)?))
    }

    /// Returns the sum of the two indexed values, if both exist and the
    /// addition does not overflow.
    pub fn sum_in<V: Addend>(&self, sample: &[V]) -> Option<V> {
        let (a, b) = self.values_in(sample)?;
        a.checked_add(&b)
    }

    /// Returns true if this is a pair of distinct in-bounds indices whose
    /// values sum to `target`.
    pub fn is_valid_for<V: Addend>(&self, sample: &[V], target: V) -> bool {
        match *self {
            Self::Found(i, j) => i != j && self.sum_in(sample) == Some(target),
            Self::NotFound => false,
        }
    }
}

impl fmt::Display for SolutionIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(i, j) => write!(f, "[{}, {}]", i, j),
            Self::NotFound => write!(f, "not found"),
        }
    }
}
