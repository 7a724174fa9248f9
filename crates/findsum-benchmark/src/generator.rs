//! Random sample generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use findsum_core::ValueDomain;

/// Generates trial inputs uniformly over a value domain.
///
/// # Example
///
/// ```
/// use findsum_benchmark::SampleGenerator;
/// use findsum_core::ValueDomain;
///
/// let domain = ValueDomain::new(-100, 100);
/// let mut generator = SampleGenerator::new(domain, Some(42));
/// let (sample, target) = generator.trial(1000);
///
/// assert_eq!(sample.len(), 1000);
/// assert!(sample.iter().all(|&v| domain.contains(v)));
/// assert!((-200..=200).contains(&target));
/// ```
pub struct SampleGenerator {
    rng: StdRng,
    domain: ValueDomain<i32>,
}

impl SampleGenerator {
    /// Creates a generator; seeded from the OS when `seed` is `None`.
    pub fn new(domain: ValueDomain<i32>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, domain }
    }

    pub fn domain(&self) -> ValueDomain<i32> {
        self.domain
    }

    /// Returns `size` values uniform over `[min, max]`.
    pub fn sample(&mut self, size: usize) -> Vec<i32> {
        let (min, max) = (self.domain.min(), self.domain.max());
        (0..size).map(|_| self.rng.random_range(min..=max)).collect()
    }

    /// Returns a target uniform over `[2 * min, 2 * max]`.
    pub fn target(&mut self) -> i32 {
        let (low, high) = self.domain.target_bounds();
        self.rng.random_range(low..=high)
    }

    /// Returns a fresh sample and target.
    pub fn trial(&mut self, size: usize) -> (Vec<i32>, i32) {
        let sample = self.sample(size);
        let target = self.target();
        (sample, target)
    }
}
