//! Tests for the solver suite.

use super::*;
use crate::domain::ValueDomain;
use crate::solution::SolutionIndices;
use findsum_test::oracle::{has_pair, random_case, seeded_rng};
use findsum_test::scenarios::scenarios;

fn domain() -> ValueDomain<i32> {
    ValueDomain::default()
}

fn assert_answers(kind: SolverKind, sample: &[i32], target: i32, exists: bool, case: &str) {
    let found = kind.solve(sample, target, &domain());
    if exists {
        assert!(
            found.is_valid_for(sample, target),
            "{} returned {} on {}",
            kind,
            found,
            case
        );
    } else {
        assert_eq!(found, SolutionIndices::NotFound, "{} on {}", kind, case);
    }
}

#[test]
fn test_scenarios_all_solvers() {
    for scenario in scenarios() {
        let exists = scenario.expected_sum.is_some();
        for kind in SolverKind::UNSORTED {
            assert_answers(kind, &scenario.sample, scenario.target, exists, scenario.name);
        }
        let sorted = scenario.sorted_sample();
        for kind in SolverKind::ALL {
            assert_answers(kind, &sorted, scenario.target, exists, scenario.name);
        }
        if scenario.sorted {
            assert_eq!(scenario.sample, sorted, "{}", scenario.name);
            for kind in SolverKind::SORTED {
                assert_answers(kind, &scenario.sample, scenario.target, exists, scenario.name);
            }
        }
    }
}

#[test]
fn test_scenarios_include_presorted_samples() {
    let presorted: Vec<_> = scenarios().into_iter().filter(|s| s.sorted).collect();
    assert!(presorted.iter().any(|s| s.name == "mixed_signs_sorted"));
    assert!(presorted.iter().all(|s| s.sample == s.sorted_sample()));
}

#[test]
fn test_two_elements_return_first_pair() {
    for kind in SolverKind::ALL {
        assert_eq!(
            kind.solve(&[40, 60], 100, &domain()),
            SolutionIndices::Found(0, 1),
            "{}",
            kind
        );
    }
}

#[test]
fn test_short_samples_not_found() {
    for kind in SolverKind::ALL {
        assert_eq!(kind.solve(&[], 0, &domain()), SolutionIndices::NotFound);
        assert_eq!(kind.solve(&[5], 10, &domain()), SolutionIndices::NotFound);
    }
}

#[test]
fn test_brute_force_scan_order() {
    // (0, 3) and (1, 2) both sum to 5; the outer index decides.
    assert_eq!(brute_force_unsorted(&[1, 2, 3, 4], 5), SolutionIndices::Found(0, 3));
    // Same outer index, earliest inner index wins.
    assert_eq!(brute_force_unsorted(&[1, 4, 4], 5), SolutionIndices::Found(0, 1));
}

#[test]
fn test_min_max_skips_out_of_range_outer() {
    // For target 150 only values in [50, 100] can pair; 10 is skipped as
    // outer but the scan still finds 60 + 90.
    let sample = [10, 60, 90];
    assert_eq!(
        brute_force_min_max_unsorted(&sample, 150, &domain()),
        SolutionIndices::Found(1, 2)
    );
}

#[test]
fn test_mixed_signs_scenario() {
    let sample = [1, 5, 3, -2, 9];
    for kind in SolverKind::UNSORTED {
        assert_eq!(kind.solve(&sample, 7, &domain()).sum_in(&sample), Some(7));
    }
    let sorted = [-2, 1, 3, 5, 9];
    assert_eq!(pincer_sorted(&sorted, 7, &domain()), SolutionIndices::Found(0, 4));
}

#[test]
fn test_lookup_table_reports_requiring_index() {
    let d = domain();
    assert_eq!(lookup_table_unsorted(&[3, 4], 7, &d), SolutionIndices::Found(0, 1));
    // 5 requires a 2; 1 requires a 6; the 2 completes the 5.
    assert_eq!(lookup_table_unsorted(&[5, 1, 2], 7, &d), SolutionIndices::Found(0, 2));
    // Both 3s require a 4; the later requirement replaces the earlier one.
    assert_eq!(lookup_table_unsorted(&[3, 3, 4], 7, &d), SolutionIndices::Found(1, 2));
}

#[test]
fn test_lookup_table_differs_from_brute_force_on_order() {
    // Brute force pairs the first outer element it can; the table pairs the
    // first element whose partner has already been seen.
    let sample = [1, 8, 2, 7];
    assert_eq!(brute_force_unsorted(&sample, 9), SolutionIndices::Found(0, 1));
    assert_eq!(lookup_table_unsorted(&sample, 9, &domain()), SolutionIndices::Found(0, 1));

    let sample = [1, 2, 7, 8];
    assert_eq!(brute_force_unsorted(&sample, 9), SolutionIndices::Found(0, 3));
    assert_eq!(lookup_table_unsorted(&sample, 9, &domain()), SolutionIndices::Found(1, 2));
}

#[test]
fn test_pincer_skips_duplicate_runs() {
    let sample = [2, 2, 2, 5];
    let found = pincer_sorted(&sample, 4, &domain());
    assert_eq!(found.values_in(&sample), Some((2, 2)));
    assert_eq!(found, SolutionIndices::Found(0, 2));

    let sample = [1, 1, 1, 4, 4, 4, 9, 9];
    assert_eq!(pincer_sorted(&sample, 8, &domain()).values_in(&sample), Some((4, 4)));
    assert_eq!(pincer_sorted(&sample, 7, &domain()), SolutionIndices::NotFound);
}

#[test]
fn test_pincer_window_skips_out_of_range_runs() {
    let sample = [-100, -100, -90, 10, 20];
    assert_eq!(pincer_sorted(&sample, 30, &domain()), SolutionIndices::Found(3, 4));

    let sample = [-100, -99, 0, 100, 100];
    assert_eq!(pincer_sorted(&sample, 200, &domain()), SolutionIndices::Found(3, 4));
}

#[test]
fn test_pincer_empty_window() {
    let sample = [-3, -1, 4, 6];
    assert_eq!(pincer_sorted(&sample, 300, &domain()), SolutionIndices::NotFound);
    assert_eq!(pincer_sorted(&sample, -300, &domain()), SolutionIndices::NotFound);
}

#[test]
fn test_degenerate_prune_ranges() {
    let d = domain();

    let sample = [-100, 5, -99, 40];
    for found in [
        brute_force_min_max_unsorted(&sample, -199, &d),
        lookup_table_unsorted(&sample, -199, &d),
    ] {
        assert_eq!(found, SolutionIndices::Found(0, 2));
    }

    let sample = [-100, 3, -100, 7];
    for found in [
        brute_force_min_max_unsorted(&sample, -200, &d),
        lookup_table_unsorted(&sample, -200, &d),
    ] {
        assert_eq!(found, SolutionIndices::Found(0, 2));
    }

    let sorted = [-100, -100, 3, 7];
    assert_eq!(brute_force_min_max_sorted(&sorted, -200, &d), SolutionIndices::Found(0, 1));
    assert_eq!(pincer_sorted(&sorted, -200, &d), SolutionIndices::Found(0, 1));

    let sorted = [-100, 3, 7];
    assert_eq!(brute_force_min_max_sorted(&sorted, -200, &d), SolutionIndices::NotFound);
    assert_eq!(pincer_sorted(&sorted, -200, &d), SolutionIndices::NotFound);
}

#[test]
fn test_idempotent() {
    let sample = [-2, 1, 3, 3, 5, 9];
    for kind in SolverKind::ALL {
        let first = kind.solve(&sample, 6, &domain());
        let second = kind.solve(&sample, 6, &domain());
        assert_eq!(first, second, "{}", kind);
    }
}

#[test]
fn test_i64_samples() {
    let d = ValueDomain::new(-1_000_000_000_000i64, 1_000_000_000_000);
    let sample = [-999_999_999_999i64, 3, 999_999_999_999, 1_000_000_000_000];
    for kind in SolverKind::ALL {
        assert!(kind.solve(&sample, 1_000_000_000_003, &d).is_valid_for(&sample, 1_000_000_000_003));
        assert_eq!(kind.solve(&sample, 5, &d), SolutionIndices::NotFound);
    }
}

#[test]
fn test_asymmetric_domain() {
    let d = ValueDomain::new(0, 10);
    let sample = [9, 2, 6, 10];
    for kind in SolverKind::UNSORTED {
        assert!(kind.solve(&sample, 16, &d).is_valid_for(&sample, 16), "{}", kind);
    }
    let sorted = [2, 6, 9, 10];
    for kind in SolverKind::SORTED {
        assert!(kind.solve(&sorted, 16, &d).is_valid_for(&sorted, 16), "{}", kind);
        assert!(kind.solve(&sorted, 8, &d).is_valid_for(&sorted, 8), "{}", kind);
    }
}

#[test]
fn test_random_cases_match_oracle() {
    let mut rng = seeded_rng(0x5eed);
    for len in (2..64).cycle().take(800) {
        let (mut sample, target) = random_case(&mut rng, len);
        let exists = has_pair(&sample, target);

        for kind in SolverKind::UNSORTED {
            assert_answers(kind, &sample, target, exists, "random unsorted");
        }
        sample.reverse();
        for kind in SolverKind::UNSORTED {
            assert_answers(kind, &sample, target, exists, "random reversed");
        }
        sample.sort_unstable();
        for kind in SolverKind::SORTED {
            assert_answers(kind, &sample, target, exists, "random sorted");
        }
    }
}

#[test]
fn test_phase_groups() {
    assert_eq!(Phase::Unsorted.solvers(), &SolverKind::UNSORTED);
    assert_eq!(Phase::Sorted.solvers(), &SolverKind::SORTED);
    assert!(SolverKind::UNSORTED.iter().all(|k| !k.requires_sorted()));
    assert!(SolverKind::SORTED.iter().all(|k| k.requires_sorted()));
    assert_eq!(SolverKind::Pincer.label().trim(), "Pincer");
}

#[test]
fn test_full_width_domain_sums_do_not_overflow() {
    let d = ValueDomain::new(i32::MIN, i32::MAX);

    let sample = [1, i32::MAX];
    for kind in SolverKind::ALL {
        assert_eq!(kind.solve(&sample, i32::MAX, &d), SolutionIndices::NotFound, "{}", kind);
    }

    let sample = [i32::MIN, -1];
    for kind in SolverKind::ALL {
        assert_eq!(kind.solve(&sample, i32::MIN, &d), SolutionIndices::NotFound, "{}", kind);
    }

    let sample = [i32::MAX, 1, 0];
    for kind in SolverKind::UNSORTED {
        assert_eq!(kind.solve(&sample, i32::MAX, &d), SolutionIndices::Found(0, 2), "{}", kind);
    }
    let sorted = [-5, 0, i32::MAX];
    for kind in SolverKind::SORTED {
        assert_eq!(kind.solve(&sorted, i32::MAX, &d), SolutionIndices::Found(1, 2), "{}", kind);
    }
    assert_eq!(
        pincer_sorted(&[i32::MIN, -1, i32::MAX], -1, &d),
        SolutionIndices::Found(0, 2)
    );
}

#[test]
fn test_pincer_tolerates_unsorted_input() {
    let sample = [5, 1, 3, -2];
    let found = pincer_sorted(&sample, 4, &domain());
    assert!(!found.is_found() || found.is_valid_for(&sample, 4));
}
