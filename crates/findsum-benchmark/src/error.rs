//! Error types for benchmark runs

use std::io;
use std::path::PathBuf;

use findsum_config::ConfigError;
use findsum_core::{AlgorithmDisagreement, Phase, SolverOutcome};
use thiserror::Error;

/// Error that aborts a benchmark run.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Solvers disagreed on one trial's sample.
    #[error(
        "{phase} solvers disagree on {}trial {trial} for size {size}: {source}",
        trial_kind(.warmup)
    )]
    Disagreement {
        size: usize,
        /// Index within the warmup or the measured trials, per `warmup`.
        trial: usize,
        warmup: bool,
        phase: Phase,
        /// The sample that triggered the disagreement, after the phase's ordering.
        sample: Vec<i32>,
        source: AlgorithmDisagreement<i32>,
    },

    /// The configuration cannot describe a runnable benchmark.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing a report file failed.
    #[error("failed to write report to {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        source: io::Error,
    },
}

fn trial_kind(warmup: &bool) -> &'static str {
    if *warmup {
        "warmup "
    } else {
        ""
    }
}

impl BenchmarkError {
    /// Returns the conflicting solver outcomes of a disagreement.
    pub fn outcomes(&self) -> &[SolverOutcome<i32>] {
        match self {
            BenchmarkError::Disagreement { source, .. } => &source.outcomes,
            _ => &[],
        }
    }
}
