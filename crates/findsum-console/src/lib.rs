//! Colored console output for benchmark runs.
//!
//! Provides a `tracing` layer that renders the harness's structured events
//! as one line each on stderr, leaving stdout to the timing report.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark and size start/end, reports written)
//! - **DEBUG**: Progress every tenth of a size's trials
//! - **ERROR**: Solver disagreements
//!
//! `RUST_LOG` overrides the default `findsum_benchmark=info` filter.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static RUN_START: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DIRECTIVE: &str = "findsum_benchmark=info";

/// Initializes console logging.
///
/// Safe to call multiple times; only the first call has effect. Prints the
/// banner to stderr and installs the global subscriber.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut builder = EnvFilter::builder();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            builder = builder.with_default_directive(directive);
        }
        let filter = builder.from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FindSumConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "FindSum".bright_cyan().bold(),
        format!("v{} - two-sum solver benchmark", VERSION).bright_white()
    );
    let _ = stderr.flush();
}

fn elapsed_secs() -> f64 {
    RUN_START
        .get()
        .map_or(0.0, |start| start.elapsed().as_secs_f64())
}

/// A tracing layer that formats benchmark events with colors.
pub struct FindSumConsoleLayer;

impl<S: Subscriber> Layer<S> for FindSumConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("findsum") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    domain: Option<String>,
    phase: Option<String>,
    reason: Option<String>,
    fastest: Option<String>,
    path: Option<String>,
    size: Option<u64>,
    size_count: Option<u64>,
    iterations: Option<u64>,
    warmup_count: Option<u64>,
    trial: Option<u64>,
    mean_ns: Option<u64>,
    duration_ms: Option<u64>,
    target: Option<i64>,
    warmup: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &str, value: String) {
        let slot = match field {
            "event" => &mut self.event,
            "name" => &mut self.name,
            "domain" => &mut self.domain,
            "phase" => &mut self.phase,
            "reason" => &mut self.reason,
            "fastest" => &mut self.fastest,
            "path" => &mut self.path,
            _ => return,
        };
        *slot = Some(value);
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "size_count" => self.size_count = Some(value),
            "iterations" => self.iterations = Some(value),
            "warmup_count" => self.warmup_count = Some(value),
            "trial" => self.trial = Some(value),
            "mean_ns" => self.mean_ns = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "warmup" {
            self.warmup = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "target" {
            self.target = Some(value);
        } else if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "benchmark_start" => format_benchmark_start(v),
        "size_start" => format_size_start(v),
        "progress" if level >= Level::DEBUG => format_progress(v),
        "size_end" => format_size_end(v),
        "benchmark_end" => format_benchmark_end(v),
        "report_written" => format_report_written(v),
        "disagreement" => format_disagreement(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    RUN_START.get_or_init(Instant::now);
    format!(
        "{} {} Benchmark {} │ {} sizes │ {} trials │ {} warmup │ domain {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.name.as_deref().unwrap_or("FindSum").white().bold(),
        count(v.size_count).bright_yellow(),
        count(v.iterations).bright_yellow(),
        count(v.warmup_count).bright_yellow(),
        v.domain.as_deref().unwrap_or("?").bright_magenta()
    )
}

fn format_size_start(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} │ {} trials",
        format_elapsed(),
        "▶".bright_blue(),
        count(v.size).white().bold(),
        count(v.iterations).bright_yellow()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let trial = v.trial.unwrap_or(0);
    let iterations = v.iterations.unwrap_or(0).max(1);
    let percent = trial.saturating_mul(100) / iterations;
    format!(
        "{} {} n = {} │ {:>12} trials │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(v.size).white(),
        trial.to_formatted_string(&Locale::en).white(),
        format!("{:>3}%", percent).bright_magenta()
    )
}

fn format_size_end(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} │ fastest {} at {}",
        format_elapsed(),
        "◀".bright_blue(),
        count(v.size).white().bold(),
        v.fastest.as_deref().unwrap_or("none").bright_green(),
        format_nanos(v.mean_ns.unwrap_or(0)).bright_magenta().bold()
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark complete │ {} sizes │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(v.size_count).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    )
}

fn format_report_written(v: &EventVisitor) -> String {
    format!(
        "{} {} Report written to {}",
        format_elapsed(),
        "✓".bright_green(),
        v.path.as_deref().unwrap_or("?").white()
    )
}

fn format_disagreement(v: &EventVisitor) -> String {
    let trial = if v.warmup == Some(true) {
        "warmup trial"
    } else {
        "trial"
    };
    format!(
        "{} {} Disagreement │ n = {} │ {} {} │ {} phase │ target {} │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        count(v.size).white().bold(),
        trial,
        count(v.trial).white(),
        v.phase.as_deref().unwrap_or("?").white(),
        v.target.unwrap_or(0).bright_yellow(),
        v.reason.as_deref().unwrap_or("unknown").bright_red()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_nanos(ns: u64) -> String {
    if ns < 10_000 {
        format!("{}ns", ns)
    } else if ns < 10_000_000 {
        format!("{:.1}µs", ns as f64 / 1_000.0)
    } else {
        format!("{:.1}ms", ns as f64 / 1_000_000.0)
    }
}
