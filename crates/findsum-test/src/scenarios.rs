//! Named cases with known answers.
//!
//! Every sample uses values inside the default domain `[-100, 100]`.
//! Samples marked `sorted` are already ascending and valid for every solver.

/// A fixed `(sample, target)` case.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub sample: Vec<i32>,
    pub target: i32,
    /// `Some(target)` when a pair exists.
    pub expected_sum: Option<i32>,
    /// True if `sample` is ascending.
    pub sorted: bool,
}

impl Scenario {
    fn new(name: &'static str, sample: Vec<i32>, target: i32, exists: bool) -> Self {
        let sorted = sample.windows(2).all(|w| w[0] <= w[1]);
        Self {
            name,
            sample,
            target,
            expected_sum: exists.then_some(target),
            sorted,
        }
    }

    /// Returns the sample sorted ascending.
    pub fn sorted_sample(&self) -> Vec<i32> {
        let mut sample = self.sample.clone();
        sample.sort_unstable();
        sample
    }
}

/// Returns the full scenario list.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("mixed_signs", vec![1, 5, 3, -2, 9], 7, true),
        Scenario::new("mixed_signs_sorted", vec![-2, 1, 3, 5, 9], 7, true),
        Scenario::new("out_of_reach", vec![10, 20, 30], 100, false),
        Scenario::new("duplicate_run", vec![2, 2, 2, 5], 4, true),
        Scenario::new("pair_of_two", vec![40, 60], 100, true),
        Scenario::new("pair_of_two_miss", vec![40, 61], 100, false),
        Scenario::new("lower_edge", vec![-100, -99, 0, 50], -199, true),
        Scenario::new("lower_edge_miss", vec![-100, -98, 0, 50], -199, false),
        Scenario::new("single_point_range", vec![-100, 3, -100, 7], -200, true),
        Scenario::new("single_point_range_miss", vec![-100, 3, -99, 7], -200, false),
        Scenario::new("upper_edge", vec![100, -5, 100], 200, true),
        Scenario::new("zero_target", vec![-7, 4, 0, 7, 12], 0, true),
        Scenario::new("no_self_pair", vec![5, 1, 8], 10, false),
        Scenario::new("all_equal", vec![3, 3, 3, 3, 3, 3], 6, true),
        Scenario::new("all_equal_miss", vec![3, 3, 3, 3, 3, 3], 7, false),
    ]
}
