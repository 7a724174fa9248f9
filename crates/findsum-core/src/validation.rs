//! Cross-validation of solver outcomes.

use crate::domain::Addend;
use crate::error::{AlgorithmDisagreement, DisagreementReason, SolverOutcome};
use crate::solution::SolutionIndices;
use crate::solver::SolverKind;

/// Checks that solvers run on the same `(sample, target)` agree.
///
/// Returns the agreed sum, or `None` when every solver reported
/// `NotFound`. Fails when any pair is malformed, when solvers disagree on
/// existence or on the sum, or when the agreed sum is not the target.
/// Index pairs are not compared: duplicates allow several correct answers.
///
/// # Example
///
/// ```
/// use findsum_core::{cross_validate, DisagreementReason, SolutionIndices, SolverKind};
///
/// let sample = [1, 5, 3, -2, 9];
/// let agreed = cross_validate(&sample, 7, &[
///     (SolverKind::BruteForce, SolutionIndices::Found(3, 4)),
///     (SolverKind::LookupTable, SolutionIndices::Found(3, 4)),
/// ]);
/// assert_eq!(agreed, Ok(Some(7)));
///
/// let err = cross_validate(&sample, 7, &[
///     (SolverKind::BruteForce, SolutionIndices::Found(3, 4)),
///     (SolverKind::LookupTable, SolutionIndices::NotFound),
/// ])
/// .unwrap_err();
/// assert_eq!(err.reason, DisagreementReason::ExistenceMismatch);
/// ```
pub fn cross_validate<V: Addend>(
    sample: &[V],
    target: V,
    results: &[(SolverKind, SolutionIndices)],
) -> Result<Option<V>, AlgorithmDisagreement<V>> {
    let outcomes: Vec<SolverOutcome<V>> = results
        .iter()
        .map(|&(solver, indices)| SolverOutcome {
            solver,
            indices,
            sum: indices.sum_in(sample),
        })
        .collect();

    let malformed = outcomes.iter().any(|o| match o.indices {
        SolutionIndices::Found(i, j) => i == j || o.sum.is_none(),
        SolutionIndices::NotFound => false,
    });
    let found = outcomes.iter().filter(|o| o.indices.is_found()).count();
    let mut sums = outcomes.iter().filter_map(|o| o.sum);
    let first_sum = sums.next();
    let sums_differ = first_sum.is_some_and(|first| sums.any(|s| s != first));

    let reason = if malformed {
        DisagreementReason::InvalidPair
    } else if found != 0 && found != outcomes.len() {
        DisagreementReason::ExistenceMismatch
    } else if sums_differ {
        DisagreementReason::SumMismatch
    } else if first_sum.is_some_and(|sum| sum != target) {
        DisagreementReason::TargetMissed
    } else {
        return Ok(first_sum);
    };

    Err(AlgorithmDisagreement {
        reason,
        target,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [i32; 5] = [1, 5, 3, -2, 9];

    #[test]
    fn test_all_not_found_agrees() {
        let result = cross_validate(
            &SAMPLE,
            100,
            &[
                (SolverKind::BruteForce, SolutionIndices::NotFound),
                (SolverKind::BruteForceMinMax, SolutionIndices::NotFound),
                (SolverKind::LookupTable, SolutionIndices::NotFound),
            ],
        );
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_different_pairs_same_sum_agree() {
        let result = cross_validate(
            &[1, 2, 3, 4],
            5,
            &[
                (SolverKind::SortedBruteForceMinMax, SolutionIndices::Found(0, 3)),
                (SolverKind::Pincer, SolutionIndices::Found(1, 2)),
            ],
        );
        assert_eq!(result, Ok(Some(5)));
    }

    #[test]
    fn test_sum_mismatch() {
        let err = cross_validate(
            &SAMPLE,
            7,
            &[
                (SolverKind::BruteForce, SolutionIndices::Found(3, 4)),
                (SolverKind::BruteForceMinMax, SolutionIndices::Found(0, 1)),
            ],
        )
        .unwrap_err();
        assert_eq!(err.reason, DisagreementReason::SumMismatch);
        assert_eq!(err.outcomes[1].sum, Some(6));
    }

    #[test]
    fn test_agreed_sum_must_hit_target() {
        let err = cross_validate(
            &SAMPLE,
            7,
            &[
                (SolverKind::SortedBruteForceMinMax, SolutionIndices::Found(0, 1)),
                (SolverKind::Pincer, SolutionIndices::Found(0, 1)),
            ],
        )
        .unwrap_err();
        assert_eq!(err.reason, DisagreementReason::TargetMissed);
    }

    #[test]
    fn test_out_of_bounds_pair_is_invalid() {
        let err = cross_validate(
            &SAMPLE,
            7,
            &[
                (SolverKind::BruteForce, SolutionIndices::Found(3, 4)),
                (SolverKind::LookupTable, SolutionIndices::Found(3, 5)),
            ],
        )
        .unwrap_err();
        assert_eq!(err.reason, DisagreementReason::InvalidPair);
    }

    #[test]
    fn test_same_index_twice_is_invalid() {
        let err = cross_validate(
            &[2, 7],
            4,
            &[(SolverKind::LookupTable, SolutionIndices::Found(0, 0))],
        )
        .unwrap_err();
        assert_eq!(err.reason, DisagreementReason::InvalidPair);
    }

    #[test]
    fn test_disagreement_message_lists_every_outcome() {
        let err = cross_validate(
            &SAMPLE,
            7,
            &[
                (SolverKind::BruteForce, SolutionIndices::Found(3, 4)),
                (SolverKind::LookupTable, SolutionIndices::NotFound),
            ],
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("whether a pair exists"));
        assert!(message.contains("brute_force_unsorted: [3, 4] (sum 7)"));
        assert!(message.contains("lookup_table_unsorted: not found"));
    }
}
