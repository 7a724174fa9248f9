//! Benchmark result types.

use std::time::Duration;

use findsum_core::{Phase, SolutionIndices, SolverKind, ValueDomain};

/// One timed solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub solver: SolverKind,
    pub indices: SolutionIndices,
    pub elapsed: Duration,
}

/// Timings of all five solvers on one generated sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    /// Target sum of this trial.
    pub target: i32,
    /// Solver timings in execution order.
    pub measurements: Vec<Measurement>,
}

impl TrialResult {
    pub fn new(target: i32) -> Self {
        Self {
            target,
            measurements: Vec::with_capacity(SolverKind::ALL.len()),
        }
    }

    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    /// Returns the `(solver, indices)` pairs measured for `phase`.
    pub fn outcomes(&self, phase: Phase) -> Vec<(SolverKind, SolutionIndices)> {
        self.measurements
            .iter()
            .filter(|m| m.solver.phase() == phase)
            .map(|m| (m.solver, m.indices))
            .collect()
    }
}

/// Accumulated timings of one solver across the trials of a size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStats {
    pub solver: SolverKind,
    /// Number of measured invocations.
    pub runs: u64,
    /// Invocations that found a pair.
    pub found: u64,
    /// Sum of elapsed time over all runs.
    pub total: Duration,
    /// Fastest single run.
    pub min: Duration,
    /// Slowest single run.
    pub max: Duration,
}

impl SolverStats {
    pub fn new(solver: SolverKind) -> Self {
        Self {
            solver,
            runs: 0,
            found: 0,
            total: Duration::ZERO,
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    /// Adds one measured invocation.
    pub fn record(&mut self, elapsed: Duration, found: bool) {
        if self.runs == 0 || elapsed < self.min {
            self.min = elapsed;
        }
        if elapsed > self.max {
            self.max = elapsed;
        }
        self.runs += 1;
        self.total += elapsed;
        if found {
            self.found += 1;
        }
    }

    /// Returns the mean time per run in whole nanoseconds, truncated.
    ///
    /// # Example
    ///
    /// ```
    /// use findsum_benchmark::SolverStats;
    /// use findsum_core::SolverKind;
    /// use std::time::Duration;
    ///
    /// let mut stats = SolverStats::new(SolverKind::Pincer);
    /// stats.record(Duration::from_nanos(100), true);
    /// stats.record(Duration::from_nanos(251), false);
    ///
    /// assert_eq!(stats.mean_nanos(), 175);
    /// assert_eq!(stats.min, Duration::from_nanos(100));
    /// assert_eq!(stats.max, Duration::from_nanos(251));
    /// assert!((stats.found_rate() - 0.5).abs() < 1e-9);
    /// ```
    pub fn mean_nanos(&self) -> u128 {
        if self.runs == 0 {
            0
        } else {
            self.total.as_nanos() / u128::from(self.runs)
        }
    }

    /// Returns the mean time per run.
    pub fn mean(&self) -> Duration {
        let nanos = self.mean_nanos();
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Returns the fraction of runs that found a pair.
    pub fn found_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.found as f64 / self.runs as f64
        }
    }
}

/// Aggregated results for one sample size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeResult {
    /// Sample length.
    pub size: usize,
    /// Number of measured trials.
    pub trials: u64,
    /// Per-solver statistics, ordered as [`SolverKind::ALL`].
    pub solvers: Vec<SolverStats>,
}

impl SizeResult {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            trials: 0,
            solvers: SolverKind::ALL.iter().map(|&k| SolverStats::new(k)).collect(),
        }
    }

    /// Adds every measurement of a trial.
    pub fn record(&mut self, trial: &TrialResult) {
        self.trials += 1;
        for m in &trial.measurements {
            self.solvers[m.solver as usize].record(m.elapsed, m.indices.is_found());
        }
    }

    /// Returns the statistics for one solver.
    pub fn stats(&self, solver: SolverKind) -> &SolverStats {
        &self.solvers[solver as usize]
    }

    /// Returns the statistics of the solvers in `phase`, in report order.
    pub fn phase_stats(&self, phase: Phase) -> impl Iterator<Item = &SolverStats> {
        phase.solvers().iter().map(move |&k| self.stats(k))
    }

    /// Returns the solver with the lowest mean time.
    pub fn fastest(&self) -> Option<&SolverStats> {
        self.solvers
            .iter()
            .filter(|s| s.runs > 0)
            .min_by_key(|s| s.mean_nanos())
    }
}

/// Results of a whole benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Value domain samples were drawn from.
    pub domain: ValueDomain<i32>,
    /// Measured trials per size.
    pub iterations: usize,
    /// Unmeasured trials per size.
    pub warmup_count: usize,
    /// Generator seed, if the run was seeded.
    pub random_seed: Option<u64>,
    /// Per-size results, in run order.
    pub sizes: Vec<SizeResult>,
}

impl BenchmarkResult {
    /// Creates an empty result.
    pub fn new(
        name: impl Into<String>,
        domain: ValueDomain<i32>,
        iterations: usize,
        warmup_count: usize,
        random_seed: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            domain,
            iterations,
            warmup_count,
            random_seed,
            sizes: Vec::new(),
        }
    }

    /// Adds the results of one size.
    pub fn add_size(&mut self, size: SizeResult) {
        self.sizes.push(size);
    }

    /// Returns the results for `size`, if it was benchmarked.
    pub fn size(&self, size: usize) -> Option<&SizeResult> {
        self.sizes.iter().find(|r| r.size == size)
    }

    /// Returns the total measured time across all sizes and solvers.
    pub fn total_time(&self) -> Duration {
        self.sizes
            .iter()
            .flat_map(|r| r.solvers.iter())
            .map(|s| s.total)
            .sum()
    }
}
