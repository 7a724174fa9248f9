//! Error types for FindSum solvers

use std::fmt;

use thiserror::Error;

use crate::domain::Addend;
use crate::solution::SolutionIndices;
use crate::solver::SolverKind;

/// What a group of solvers disagreed about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisagreementReason {
    /// A solver returned out-of-bounds or identical indices.
    InvalidPair,
    /// Some solvers found a pair and others did not.
    ExistenceMismatch,
    /// Found pairs add up to different sums.
    SumMismatch,
    /// All found pairs agree on a sum that is not the target.
    TargetMissed,
}

impl fmt::Display for DisagreementReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DisagreementReason::InvalidPair => "invalid index pair",
            DisagreementReason::ExistenceMismatch => "solvers disagree on whether a pair exists",
            DisagreementReason::SumMismatch => "solvers disagree on the pair sum",
            DisagreementReason::TargetMissed => "agreed pair sum differs from the target",
        };
        f.write_str(text)
    }
}

/// One solver's answer, with the sum its indices produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome<V: Addend> {
    pub solver: SolverKind,
    pub indices: SolutionIndices,
    pub sum: Option<V>,
}

impl<V: Addend> fmt::Display for SolverOutcome<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.solver, self.indices)?;
        if let Some(sum) = self.sum {
            write!(f, " (sum {})", sum)?;
        }
        Ok(())
    }
}

/// Solvers given identical input produced conflicting answers.
///
/// This always indicates a defect in a solver, never a condition to
/// recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} for target {target}: {}", render_outcomes(.outcomes))]
pub struct AlgorithmDisagreement<V: Addend> {
    pub reason: DisagreementReason,
    pub target: V,
    pub outcomes: Vec<SolverOutcome<V>>,
}

fn render_outcomes<V: Addend>(outcomes: &[SolverOutcome<V>]) -> String {
    outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
