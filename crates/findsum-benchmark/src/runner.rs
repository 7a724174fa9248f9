//! Benchmark runner.

use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use findsum_core::{cross_validate, Phase, SolverKind, ValueDomain};

use crate::config::BenchmarkConfig;
use crate::error::BenchmarkError;
use crate::generator::SampleGenerator;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{BenchmarkResult, Measurement, SizeResult, TrialResult};

/// Sequential benchmark runner.
///
/// Every solver invocation is timed in isolation on the calling thread;
/// nothing is reordered or run in parallel, since overlapping invocations
/// would distort wall-clock measurements.
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    /// Creates a new benchmark.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark and returns aggregated results.
    ///
    /// Writes the CSV and Markdown reports when their paths are configured.
    pub fn run(&self) -> Result<BenchmarkResult, BenchmarkError> {
        self.run_with(|_| {})
    }

    /// Runs the benchmark, calling `on_size` as each size completes.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, on the first solver
    /// disagreement, or when a report file cannot be written.
    pub fn run_with<F>(&self, mut on_size: F) -> Result<BenchmarkResult, BenchmarkError>
    where
        F: FnMut(&SizeResult),
    {
        self.config.validate()?;

        let mut generator = SampleGenerator::new(self.config.domain(), self.config.random_seed());
        let mut result = BenchmarkResult::new(
            self.config.name(),
            self.config.domain(),
            self.config.iterations(),
            self.config.warmup_count(),
            self.config.random_seed(),
        );

        info!(
            event = "benchmark_start",
            name = self.config.name(),
            size_count = self.config.sizes().len() as u64,
            iterations = self.config.iterations() as u64,
            warmup_count = self.config.warmup_count() as u64,
            domain = %self.config.domain(),
        );
        let start = Instant::now();

        for &size in self.config.sizes() {
            let size_result = self.run_size(&mut generator, size)?;
            on_size(&size_result);
            result.add_size(size_result);
        }

        info!(
            event = "benchmark_end",
            size_count = result.sizes.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        self.export(&result)?;
        Ok(result)
    }

    /// Runs the warmup and measured trials of one size.
    pub fn run_size(
        &self,
        generator: &mut SampleGenerator,
        size: usize,
    ) -> Result<SizeResult, BenchmarkError> {
        let iterations = self.config.iterations();
        info!(event = "size_start", size = size as u64, iterations = iterations as u64);

        for trial in 0..self.config.warmup_count() {
            self.execute_trial(generator, size, trial, true)?;
        }

        let mut size_result = SizeResult::new(size);
        let progress_every = (iterations / 10).max(1);
        for trial in 0..iterations {
            let trial_result = self.run_trial(generator, size, trial)?;
            size_result.record(&trial_result);

            if (trial + 1) % progress_every == 0 {
                debug!(
                    event = "progress",
                    size = size as u64,
                    trial = (trial + 1) as u64,
                    iterations = iterations as u64,
                );
            }
        }

        if let Some(fastest) = size_result.fastest() {
            info!(
                event = "size_end",
                size = size as u64,
                fastest = fastest.solver.name(),
                mean_ns = fastest.mean_nanos() as u64,
            );
        }
        Ok(size_result)
    }

    /// Runs one measured trial: generate, time the unsorted solvers, sort,
    /// time the sorted solvers, cross-validating after each phase.
    pub fn run_trial(
        &self,
        generator: &mut SampleGenerator,
        size: usize,
        trial: usize,
    ) -> Result<TrialResult, BenchmarkError> {
        self.execute_trial(generator, size, trial, false)
    }

    fn execute_trial(
        &self,
        generator: &mut SampleGenerator,
        size: usize,
        trial: usize,
        warmup: bool,
    ) -> Result<TrialResult, BenchmarkError> {
        let domain = self.config.domain();
        let (mut sample, target) = generator.trial(size);
        let mut trial_result = TrialResult::new(target);

        self.run_phase(Phase::Unsorted, &sample, target, &domain, &mut trial_result);
        self.check_phase(Phase::Unsorted, &sample, &trial_result, size, trial, warmup)?;

        sample.sort_unstable();

        self.run_phase(Phase::Sorted, &sample, target, &domain, &mut trial_result);
        self.check_phase(Phase::Sorted, &sample, &trial_result, size, trial, warmup)?;

        Ok(trial_result)
    }

    fn run_phase(
        &self,
        phase: Phase,
        sample: &[i32],
        target: i32,
        domain: &ValueDomain<i32>,
        trial_result: &mut TrialResult,
    ) {
        for &solver in phase.solvers() {
            trial_result.push(time_solver(solver, sample, target, domain));
        }
    }

    pub(crate) fn check_phase(
        &self,
        phase: Phase,
        sample: &[i32],
        trial_result: &TrialResult,
        size: usize,
        trial: usize,
        warmup: bool,
    ) -> Result<(), BenchmarkError> {
        let outcomes = trial_result.outcomes(phase);
        match cross_validate(sample, trial_result.target, &outcomes) {
            Ok(_) => Ok(()),
            Err(source) => {
                error!(
                    event = "disagreement",
                    size = size as u64,
                    trial = trial as u64,
                    warmup,
                    phase = %phase,
                    reason = %source.reason,
                    target = i64::from(source.target),
                );
                Err(BenchmarkError::Disagreement {
                    size,
                    trial,
                    warmup,
                    phase,
                    sample: sample.to_vec(),
                    source,
                })
            }
        }
    }

    fn export(&self, result: &BenchmarkResult) -> Result<(), BenchmarkError> {
        if let Some(path) = self.config.csv_output_path() {
            CsvExporter::to_file(result, path).map_err(|source| report_error(path, source))?;
            info!(event = "report_written", path = %path.display());
        }
        if let Some(path) = self.config.markdown_output_path() {
            MarkdownReport::to_file(result, path).map_err(|source| report_error(path, source))?;
            info!(event = "report_written", path = %path.display());
        }
        Ok(())
    }
}

fn report_error(path: &Path, source: std::io::Error) -> BenchmarkError {
    BenchmarkError::Report {
        path: path.to_path_buf(),
        source,
    }
}

// Times a single invocation; black_box keeps the call from being elided or hoisted.
#[inline(never)]
fn time_solver(
    solver: SolverKind,
    sample: &[i32],
    target: i32,
    domain: &ValueDomain<i32>,
) -> Measurement {
    let start = Instant::now();
    let indices = black_box(solver.solve(black_box(sample), black_box(target), domain));
    let elapsed = start.elapsed();
    Measurement {
        solver,
        indices,
        elapsed,
    }
}
