//! Benchmark configuration.

use std::path::{Path, PathBuf};

use findsum_config::{ConfigError, DomainConfig, FindSumConfig, OutputConfig};
use findsum_core::ValueDomain;

/// Configuration for a benchmark run.
///
/// Controls sample sizes, trial counts, the value domain and optional
/// report paths. Built fluently or from a loaded [`FindSumConfig`].
///
/// # Example
///
/// ```
/// use findsum_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_sizes([100, 1000])
///     .with_iterations(50)
///     .with_warmup_count(5);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.sizes(), &[100, 1000]);
/// assert_eq!(config.iterations(), 50);
/// assert_eq!(config.warmup_count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    name: String,
    sizes: Vec<usize>,
    iterations: usize,
    warmup_count: usize,
    domain: ValueDomain<i32>,
    random_seed: Option<u64>,
    csv_output_path: Option<PathBuf>,
    markdown_output_path: Option<PathBuf>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Sizes, iterations and domain start at the standard defaults
    /// (`[100, 1000, 100000, 1000000]`, 10,000 and `[-100, 100]`) with no
    /// warmup and an OS-seeded generator.
    ///
    /// # Example
    ///
    /// ```
    /// use findsum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.iterations(), 10_000);
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.domain().min(), -100);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(&FindSumConfig::default()).with_name(name)
    }

    /// Builds a benchmark configuration from a loaded [`FindSumConfig`].
    pub fn from_config(config: &FindSumConfig) -> Self {
        Self {
            name: config.name.clone(),
            sizes: config.sizes.clone(),
            iterations: config.iterations,
            warmup_count: config.warmup_count,
            domain: ValueDomain::new(config.domain.min, config.domain.max),
            random_seed: config.random_seed,
            csv_output_path: config.output.csv_path.clone(),
            markdown_output_path: config.output.markdown_path.clone(),
        }
    }

    /// Sets the benchmark name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sample sizes, benchmarked in the given order.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the number of measured trials per size.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of warmup trials per size (validated, not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the inclusive value domain of generated samples.
    ///
    /// # Example
    ///
    /// ```
    /// use findsum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_domain(-10, 10);
    /// assert_eq!(config.domain().target_bounds(), (-20, 20));
    /// ```
    pub fn with_domain(mut self, min: i32, max: i32) -> Self {
        self.domain = ValueDomain::new(min, max);
        self
    }

    /// Seeds the sample generator for reproducible runs.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use findsum_benchmark::BenchmarkConfig;
    /// use std::path::Path;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some(Path::new("results.csv")));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sample sizes.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns the number of measured trials per size.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of warmup trials per size.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the value domain.
    pub fn domain(&self) -> ValueDomain<i32> {
        self.domain
    }

    /// Returns the generator seed, if set.
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&Path> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&Path> {
        self.markdown_output_path.as_deref()
    }

    /// Checks this configuration with the same rules as [`FindSumConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        FindSumConfig::from(self).validate()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::from_config(&FindSumConfig::default())
    }
}

impl From<&BenchmarkConfig> for FindSumConfig {
    fn from(config: &BenchmarkConfig) -> Self {
        FindSumConfig {
            name: config.name.clone(),
            sizes: config.sizes.clone(),
            iterations: config.iterations,
            warmup_count: config.warmup_count,
            random_seed: config.random_seed,
            domain: DomainConfig {
                min: config.domain.min(),
                max: config.domain.max(),
            },
            output: OutputConfig {
                csv_path: config.csv_output_path.clone(),
                markdown_path: config.markdown_output_path.clone(),
            },
        }
    }
}
