//! Configuration system for FindSum.
//!
//! Every tunable of a benchmark run lives in [`FindSumConfig`]. The
//! compiled-in defaults describe the standard four-size run; a TOML or YAML file
//! overrides any subset of them without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use findsum_config::FindSumConfig;
//!
//! let config = FindSumConfig::from_toml_str(r#"
//!     sizes = [100, 1000]
//!     iterations = 500
//!     random_seed = 42
//!
//!     [domain]
//!     min = -50
//!     max = 50
//! "#).unwrap();
//!
//! assert_eq!(config.sizes, vec![100, 1000]);
//! assert_eq!(config.iterations, 500);
//! assert_eq!(config.domain.target_bounds(), (-100, 100));
//! ```
//!
//! Use the defaults when the file is missing:
//!
//! ```
//! use findsum_config::FindSumConfig;
//!
//! let config = FindSumConfig::load_or_default("does-not-exist.toml").unwrap();
//! assert_eq!(config, FindSumConfig::default());
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input sizes benchmarked by default.
pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 100_000, 1_000_000];

/// Trials per size by default.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Default lower bound of generated values.
pub const DEFAULT_MIN: i32 = -100;

/// Default upper bound of generated values.
pub const DEFAULT_MAX: i32 = 100;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FindSumConfig {
    /// Name shown in reports.
    pub name: String,

    /// Sample sizes, benchmarked in order.
    pub sizes: Vec<usize>,

    /// Measured trials per size.
    pub iterations: usize,

    /// Unmeasured trials per size, run before the measured ones.
    pub warmup_count: usize,

    /// Random seed for reproducible samples.
    pub random_seed: Option<u64>,

    /// Value domain of generated samples.
    pub domain: DomainConfig,

    /// Report output paths.
    pub output: OutputConfig,
}

impl Default for FindSumConfig {
    fn default() -> Self {
        Self {
            name: "FindSum".to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            iterations: DEFAULT_ITERATIONS,
            warmup_count: 0,
            random_seed: None,
            domain: DomainConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl FindSumConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or holds
    /// invalid values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Checks that the configuration describes a runnable benchmark.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when no sizes are given, a size is below 2,
    /// `iterations` is zero, or the domain is inverted or too wide for its
    /// target range to fit in `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("sizes must not be empty".to_string()));
        }
        if let Some(size) = self.sizes.iter().find(|&&size| size < 2) {
            return Err(ConfigError::Invalid(format!(
                "size {} is too small; every sample needs at least 2 elements",
                size
            )));
        }
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "iterations must be at least 1".to_string(),
            ));
        }
        self.domain.validate()
    }

    /// Sets the sample sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the measured trials per size.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the unmeasured trials per size.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the value domain.
    pub fn with_domain(mut self, min: i32, max: i32) -> Self {
        self.domain = DomainConfig { min, max };
        self
    }
}

/// Inclusive bounds of generated sample values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DomainConfig {
    pub min: i32,
    pub max: i32,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl DomainConfig {
    /// Returns `(2 * min, 2 * max)`, the range targets are drawn from.
    ///
    /// Saturates; [`validate`](Self::validate) rejects domains where it would.
    pub fn target_bounds(&self) -> (i32, i32) {
        (self.min.saturating_mul(2), self.max.saturating_mul(2))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "domain min {} is greater than max {}",
                self.min, self.max
            )));
        }
        if self.min.checked_mul(2).is_none() || self.max.checked_mul(2).is_none() {
            return Err(ConfigError::Invalid(format!(
                "domain [{}, {}] is too wide: targets must fit in i32",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Optional report files written after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OutputConfig {
    /// CSV export path.
    pub csv_path: Option<PathBuf>,

    /// Markdown report path.
    pub markdown_path: Option<PathBuf>,
}
