//! Tests for the benchmark harness.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use findsum_config::ConfigError;
use findsum_core::{DisagreementReason, Phase, SolutionIndices, SolverKind, ValueDomain};

use super::*;

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig::new("Test")
        .with_sizes([2, 10, 50])
        .with_iterations(40)
        .with_random_seed(42)
}

fn temp_path(file: &str) -> PathBuf {
    std::env::temp_dir().join(format!("findsum-{}-{}", std::process::id(), file))
}

#[test]
fn test_run_records_every_trial() {
    let result = Benchmark::new(small_config()).run().unwrap();

    assert_eq!(result.name, "Test");
    assert_eq!(result.sizes.len(), 3);
    for size in &result.sizes {
        assert_eq!(size.trials, 40);
        for stats in &size.solvers {
            assert_eq!(stats.runs, 40, "{} at n = {}", stats.solver, size.size);
            assert!(stats.min <= stats.max);
            assert!(stats.total >= stats.max);
        }
    }
}

#[test]
fn test_solvers_agree_on_existence_counts() {
    let result = Benchmark::new(small_config().with_iterations(200)).run().unwrap();
    for size in &result.sizes {
        let found = size.stats(SolverKind::BruteForce).found;
        for stats in &size.solvers {
            assert_eq!(stats.found, found, "{} at n = {}", stats.solver, size.size);
        }
    }
    assert!(result.size(50).unwrap().stats(SolverKind::Pincer).found > 0);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let first = Benchmark::new(small_config()).run().unwrap();
    let second = Benchmark::new(small_config()).run().unwrap();
    for (a, b) in first.sizes.iter().zip(&second.sizes) {
        for solver in SolverKind::ALL {
            assert_eq!(a.stats(solver).found, b.stats(solver).found);
        }
    }
}

#[test]
fn test_warmup_trials_are_not_measured() {
    let config = small_config().with_sizes([20]).with_warmup_count(15);
    let result = Benchmark::new(config).run().unwrap();
    assert_eq!(result.warmup_count, 15);
    assert_eq!(result.sizes[0].trials, 40);
    assert_eq!(result.sizes[0].stats(SolverKind::LookupTable).runs, 40);
}

#[test]
fn test_run_with_reports_sizes_in_order() {
    let mut seen = Vec::new();
    Benchmark::new(small_config())
        .run_with(|size| seen.push(size.size))
        .unwrap();
    assert_eq!(seen, vec![2, 10, 50]);
}

#[test]
fn test_trial_measures_unsorted_then_sorted() {
    let benchmark = Benchmark::new(small_config());
    let mut generator = SampleGenerator::new(ValueDomain::new(-100, 100), Some(9));
    let trial = benchmark.run_trial(&mut generator, 30, 0).unwrap();

    let order: Vec<SolverKind> = trial.measurements.iter().map(|m| m.solver).collect();
    assert_eq!(order, SolverKind::ALL.to_vec());
    assert_eq!(trial.outcomes(Phase::Unsorted).len(), 3);
    assert_eq!(trial.outcomes(Phase::Sorted).len(), 2);
}

#[test]
fn test_narrow_domain() {
    let config = small_config().with_domain(0, 3).with_sizes([8]);
    let result = Benchmark::new(config).run().unwrap();
    let size = &result.sizes[0];
    let found = size.stats(SolverKind::Pincer).found;
    assert_eq!(size.stats(SolverKind::LookupTable).found, found);
    assert_eq!(result.domain, ValueDomain::new(0, 3));
}

#[test]
fn test_disagreement_is_fatal() {
    let benchmark = Benchmark::new(small_config());
    let sample = [1, 5, 3, -2, 9];
    let mut trial = TrialResult::new(7);
    trial.push(Measurement {
        solver: SolverKind::BruteForce,
        indices: SolutionIndices::Found(3, 4),
        elapsed: Duration::ZERO,
    });
    trial.push(Measurement {
        solver: SolverKind::LookupTable,
        indices: SolutionIndices::NotFound,
        elapsed: Duration::ZERO,
    });

    let err = benchmark
        .check_phase(Phase::Unsorted, &sample, &trial, 5, 11, false)
        .unwrap_err();
    match &err {
        BenchmarkError::Disagreement {
            size,
            trial,
            warmup,
            phase,
            sample: failing,
            source,
        } => {
            assert_eq!((*size, *trial, *phase), (5, 11, Phase::Unsorted));
            assert!(!warmup);
            assert_eq!(failing, &sample.to_vec());
            assert_eq!(source.reason, DisagreementReason::ExistenceMismatch);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(err.outcomes().len(), 2);
    assert!(err.to_string().contains("unsorted solvers disagree on trial 11 for size 5"));
}

#[test]
fn test_invalid_config_rejected() {
    for config in [
        small_config().with_sizes(Vec::new()),
        small_config().with_sizes([1]),
        small_config().with_iterations(0),
    ] {
        let err = Benchmark::new(config).run().unwrap_err();
        assert!(matches!(err, BenchmarkError::Config(ConfigError::Invalid(_))));
    }
}

#[test]
fn test_reports_written_to_configured_paths() {
    let csv_path = temp_path("results.csv");
    let md_path = temp_path("report.md");
    let config = small_config()
        .with_sizes([16])
        .with_csv_output(&csv_path)
        .with_markdown_output(&md_path);

    let result = Benchmark::new(config).run().unwrap();

    let csv = fs::read_to_string(&csv_path).unwrap();
    let md = fs::read_to_string(&md_path).unwrap();
    let _ = fs::remove_file(&csv_path);
    let _ = fs::remove_file(&md_path);

    assert_eq!(csv, CsvExporter::to_string(&result));
    assert_eq!(csv.lines().count(), 1 + SolverKind::ALL.len());
    assert!(md.contains("## n = 16"));
    assert!(md.contains("| pincer_sorted | sorted |"));
    assert!(md.contains("- **Seed**: 42"));
}

#[test]
fn test_unwritable_report_path() {
    let config = small_config()
        .with_sizes([4])
        .with_csv_output(temp_path("missing-dir").join("results.csv"));
    let err = Benchmark::new(config).run().unwrap_err();
    assert!(matches!(err, BenchmarkError::Report { .. }));
}

#[test]
fn test_text_report_layout() {
    let result = Benchmark::new(small_config().with_sizes([10])).run().unwrap();
    let text = TextReport::to_string(&result);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Now solving for input size n = 10");
    assert_eq!(lines[1], "UNSORTED:");
    assert!(lines[2].starts_with("Brute solution: avg time is "));
    assert!(lines[3].starts_with("     w/ MinMax: avg time is "));
    assert!(lines[4].starts_with("Table solution: avg time is "));
    assert_eq!(lines[5], "SORTED:");
    assert!(lines[6].starts_with("Brute w/MinMax: avg time is "));
    assert!(lines[7].starts_with("        Pincer: avg time is "));
    assert!(lines[7].ends_with("ns"));
    assert_eq!(lines[8], "");
}

#[test]
fn test_generator_is_seeded() {
    let domain = ValueDomain::new(-100, 100);
    let mut a = SampleGenerator::new(domain, Some(3));
    let mut b = SampleGenerator::new(domain, Some(3));
    assert_eq!(a.trial(64), b.trial(64));

    let mut narrow = SampleGenerator::new(ValueDomain::new(5, 5), None);
    let (sample, target) = narrow.trial(4);
    assert_eq!(sample, vec![5, 5, 5, 5]);
    assert_eq!(target, 10);
}

#[test]
fn test_config_round_trips_through_file_config() {
    let config = small_config().with_warmup_count(2).with_domain(-7, 9);
    let file_config = findsum_config::FindSumConfig::from(&config);
    assert_eq!(BenchmarkConfig::from_config(&file_config), config);
}

#[test]
fn test_warmup_disagreement_is_labelled() {
    let benchmark = Benchmark::new(small_config());
    let sample = [-2, 1, 3, 5, 9];
    let mut trial = TrialResult::new(7);
    for (solver, indices) in [
        (SolverKind::SortedBruteForceMinMax, SolutionIndices::Found(0, 4)),
        (SolverKind::Pincer, SolutionIndices::Found(1, 3)),
    ] {
        trial.push(Measurement {
            solver,
            indices,
            elapsed: Duration::ZERO,
        });
    }

    let err = benchmark
        .check_phase(Phase::Sorted, &sample, &trial, 5, 2, true)
        .unwrap_err();
    assert!(matches!(err, BenchmarkError::Disagreement { warmup: true, trial: 2, .. }));
    assert!(err
        .to_string()
        .starts_with("sorted solvers disagree on warmup trial 2 for size 5: "));
}
