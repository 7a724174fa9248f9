//! Runs the FindSum benchmark and prints average solver times per size.
//!
//! Usage: `findsum [CONFIG]`. Without an argument `findsum.toml` in the
//! working directory is used when present; `.yaml`/`.yml` files are read
//! as YAML.

use std::env;
use std::process::ExitCode;

use findsum::{Benchmark, BenchmarkConfig, BenchmarkError, ConfigError, FindSumConfig, TextReport};

const DEFAULT_CONFIG: &str = "findsum.toml";

fn main() -> ExitCode {
    findsum::console::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let benchmark = Benchmark::new(BenchmarkConfig::from_config(&config));
    match benchmark.run_with(|size| print!("{}", TextReport::size_section(size))) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<FindSumConfig, ConfigError> {
    match env::args_os().nth(1) {
        Some(path) => FindSumConfig::load(path),
        None => FindSumConfig::load_or_default(DEFAULT_CONFIG),
    }
}

fn report_failure(err: &BenchmarkError) {
    eprintln!("error: {}", err);
    if let BenchmarkError::Disagreement { sample, .. } = err {
        for outcome in err.outcomes() {
            eprintln!("  {}", outcome);
        }
        if sample.len() <= 32 {
            eprintln!("  sample: {:?}", sample);
        } else {
            eprintln!("  sample: {} values, first {:?}", sample.len(), &sample[..32]);
        }
    }
}
