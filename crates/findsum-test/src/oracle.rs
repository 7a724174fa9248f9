//! Reference answers and random case generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound of the default value domain.
pub const DOMAIN_MIN: i32 = -100;
/// Upper bound of the default value domain.
pub const DOMAIN_MAX: i32 = 100;

/// Returns true if any two distinct positions sum to `target`.
pub fn has_pair(sample: &[i32], target: i32) -> bool {
    let n = sample.len();
    (0..n).any(|i| ((i + 1)..n).any(|j| sample[i] as i64 + sample[j] as i64 == target as i64))
}

/// Generates a sample of `len` values uniform over the default domain and a
/// target uniform over `[2 * DOMAIN_MIN, 2 * DOMAIN_MAX]`.
///
/// # Example
///
/// ```
/// use findsum_test::oracle::{random_case, DOMAIN_MAX, DOMAIN_MIN};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let (sample, target) = random_case(&mut rng, 50);
/// assert_eq!(sample.len(), 50);
/// assert!(sample.iter().all(|v| (DOMAIN_MIN..=DOMAIN_MAX).contains(v)));
/// assert!((2 * DOMAIN_MIN..=2 * DOMAIN_MAX).contains(&target));
/// ```
pub fn random_case(rng: &mut impl Rng, len: usize) -> (Vec<i32>, i32) {
    let sample = (0..len)
        .map(|_| rng.random_range(DOMAIN_MIN..=DOMAIN_MAX))
        .collect();
    let target = rng.random_range(2 * DOMAIN_MIN..=2 * DOMAIN_MAX);
    (sample, target)
}

/// Creates a deterministic RNG for reproducible randomized tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
