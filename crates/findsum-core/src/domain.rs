//! Value domain bounds and the prune range derived from them.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use num_traits::{CheckedSub, PrimInt, Saturating, Signed, ToPrimitive};

/// Integer element type the solvers operate on.
///
/// Blanket-implemented for every signed primitive integer, so the same
/// solver code runs over `i32` and `i64` samples.
pub trait Addend: PrimInt + Signed + Saturating + Hash + Debug + Display {}

impl<T> Addend for T where T: PrimInt + Signed + Saturating + Hash + Debug + Display {}

/// Inclusive bounds `[min, max]` that every sample element is drawn from.
///
/// Knowing the bounds lets a solver discard elements that cannot have a
/// partner inside the domain for a given target.
///
/// # Example
///
/// ```
/// use findsum_core::ValueDomain;
///
/// let domain = ValueDomain::new(-100, 100);
/// assert_eq!(domain.width(), 201);
/// assert_eq!(domain.target_bounds(), (-200, 200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueDomain<V: Addend> {
    min: V,
    max: V,
}

impl<V: Addend> ValueDomain<V> {
    /// Creates a domain; the bounds are swapped if given in reverse order.
    pub fn new(min: V, max: V) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn min(&self) -> V {
        self.min
    }

    pub fn max(&self) -> V {
        self.max
    }

    /// Returns the number of distinct values in the domain, saturating at `usize::MAX`.
    pub fn width(&self) -> usize {
        span(self.min, self.max)
    }

    /// Returns the inclusive bounds `[2 * min, 2 * max]` of any achievable target.
    pub fn target_bounds(&self) -> (V, V) {
        (
            Saturating::saturating_add(self.min, self.min),
            Saturating::saturating_add(self.max, self.max),
        )
    }

    /// Returns true if `value` lies inside the domain.
    pub fn contains(&self, value: V) -> bool {
        self.min <= value && value <= self.max
    }

    /// Derives the range of values that can take part in a pair summing to `target`.
    ///
    /// A value `v` has an in-domain partner only if `target - v` lies in
    /// `[min, max]`, which gives `[max(min, target - max), min(max, target - min)]`.
    /// On the default symmetric domain this is `[max(-100, target - 100), min(100, target + 100)]`.
    ///
    /// # Example
    ///
    /// ```
    /// use findsum_core::ValueDomain;
    ///
    /// let domain = ValueDomain::new(-100, 100);
    ///
    /// let range = domain.prune_range(-200);
    /// assert_eq!((range.low(), range.high()), (-100, -100));
    ///
    /// let range = domain.prune_range(50);
    /// assert_eq!((range.low(), range.high()), (-50, 100));
    ///
    /// assert!(domain.prune_range(300).is_empty());
    /// ```
    pub fn prune_range(&self, target: V) -> PruneRange<V> {
        let low = Saturating::saturating_sub(target, self.max).max(self.min);
        let high = Saturating::saturating_sub(target, self.min).min(self.max);
        PruneRange { low, high }
    }
}

impl Default for ValueDomain<i32> {
    fn default() -> Self {
        Self::new(-100, 100)
    }
}

impl<V: Addend> Display for ValueDomain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Inclusive range of values that can participate in a pair for one target.
///
/// Empty (`low > high`) when the target is out of reach for the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneRange<V: Addend> {
    low: V,
    high: V,
}

impl<V: Addend> PruneRange<V> {
    pub fn low(&self) -> V {
        self.low
    }

    pub fn high(&self) -> V {
        self.high
    }

    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }

    #[inline]
    pub fn contains(&self, value: V) -> bool {
        self.low <= value && value <= self.high
    }

    /// Upper bound on the number of distinct values in the range.
    pub fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            span(self.low, self.high)
        }
    }
}

fn span<V: Addend>(low: V, high: V) -> usize {
    high.checked_sub(&low)
        .and_then(|d| d.to_usize())
        .map_or(usize::MAX, |d| d.saturating_add(1))
}
