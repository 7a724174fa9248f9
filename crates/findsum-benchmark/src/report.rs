//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use findsum_core::{Phase, SolverKind};

use crate::result::{BenchmarkResult, SizeResult};

const PHASES: [Phase; 2] = [Phase::Unsorted, Phase::Sorted];

/// Plain-text report, the format printed to stdout.
///
/// Each size renders as a header, an `UNSORTED:` section with three
/// solvers, a `SORTED:` section with two, and a trailing blank line.
///
/// # Example
///
/// ```
/// use findsum_benchmark::{SizeResult, TextReport};
///
/// let text = TextReport::size_section(&SizeResult::new(100));
/// assert!(text.starts_with("Now solving for input size n = 100\nUNSORTED:\n"));
/// assert!(text.contains("Table solution: avg time is 0ns"));
/// assert!(text.contains("        Pincer: avg time is 0ns"));
/// ```
pub struct TextReport;

impl TextReport {
    /// Renders every size of a result.
    pub fn to_string(result: &BenchmarkResult) -> String {
        result
            .sizes
            .iter()
            .map(Self::size_section)
            .collect::<Vec<_>>()
            .concat()
    }

    /// Renders the section for one size.
    pub fn size_section(size: &SizeResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_size_section(size, &mut output);
        output
    }

    fn write_size_section(size: &SizeResult, output: &mut impl fmt::Write) -> fmt::Result {
        writeln!(output, "Now solving for input size n = {}", size.size)?;
        for phase in PHASES {
            writeln!(output, "{}:", phase.heading())?;
            for stats in size.phase_stats(phase) {
                writeln!(
                    output,
                    "{}: avg time is {}ns",
                    stats.solver.label(),
                    stats.mean_nanos()
                )?;
            }
        }
        writeln!(output)
    }

    /// Writes the full text report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// CSV exporter for benchmark results.
///
/// Exports one row per size and solver with columns for mean, min and max
/// time in nanoseconds and the fraction of trials that found a pair.
///
/// # Example
///
/// ```
/// use findsum_benchmark::{BenchmarkResult, CsvExporter, SizeResult};
/// use findsum_core::ValueDomain;
///
/// let mut result = BenchmarkResult::new("Test", ValueDomain::new(-100, 100), 10, 0, None);
/// result.add_size(SizeResult::new(100));
///
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("size,solver,phase,runs,mean_ns,min_ns,max_ns,found_rate\n"));
/// assert!(csv.contains("100,pincer_sorted,sorted,0,0,0,0,0.0000"));
/// assert_eq!(csv.lines().count(), 6);
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark result to CSV string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_rows(result, &mut output);
        output
    }

    fn write_rows(result: &BenchmarkResult, output: &mut impl fmt::Write) -> fmt::Result {
        writeln!(
            output,
            "size,solver,phase,runs,mean_ns,min_ns,max_ns,found_rate"
        )?;

        for size in &result.sizes {
            for stats in &size.solvers {
                writeln!(
                    output,
                    "{},{},{},{},{},{},{},{:.4}",
                    size.size,
                    stats.solver.name(),
                    stats.solver.phase(),
                    stats.runs,
                    stats.mean_nanos(),
                    stats.min.as_nanos(),
                    stats.max.as_nanos(),
                    stats.found_rate(),
                )?;
            }
        }
        Ok(())
    }

    /// Exports benchmark result to a CSV file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        let csv = Self::to_string(result);
        fs::write(path, csv)
    }

    /// Writes benchmark result as CSV to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        let csv = Self::to_string(result);
        writer.write_all(csv.as_bytes())
    }
}

/// Markdown report generator.
///
/// Generates a human-readable report with the run parameters, a
/// solver-by-size comparison of mean times, and a detail table per size.
///
/// # Example
///
/// ```
/// use findsum_benchmark::{BenchmarkResult, MarkdownReport};
/// use findsum_core::ValueDomain;
///
/// let result = BenchmarkResult::new("Test", ValueDomain::new(-100, 100), 10, 0, Some(1));
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No sizes completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_report(result, &mut output);
        output
    }

    fn write_report(result: &BenchmarkResult, output: &mut impl fmt::Write) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;

        writeln!(output, "- **Domain**: {}", result.domain)?;
        writeln!(output, "- **Iterations**: {}", result.iterations)?;
        writeln!(output, "- **Warmup**: {}", result.warmup_count)?;
        match result.random_seed {
            Some(seed) => writeln!(output, "- **Seed**: {}", seed)?,
            None => writeln!(output, "- **Seed**: random")?,
        }
        writeln!(output)?;

        if result.sizes.is_empty() {
            return writeln!(output, "*No sizes completed.*");
        }

        output.write_str(&Self::comparison(result))?;
        writeln!(output)?;

        for size in &result.sizes {
            writeln!(output, "## n = {}", size.size)?;
            writeln!(output)?;
            writeln!(
                output,
                "| Solver | Phase | Mean (ns) | Min (ns) | Max (ns) | Found % |"
            )?;
            writeln!(
                output,
                "|--------|-------|-----------|----------|----------|---------|"
            )?;
            for stats in &size.solvers {
                writeln!(
                    output,
                    "| {} | {} | {} | {} | {} | {:.2}% |",
                    stats.solver.name(),
                    stats.solver.phase(),
                    stats.mean_nanos(),
                    stats.min.as_nanos(),
                    stats.max.as_nanos(),
                    stats.found_rate() * 100.0,
                )?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Generates a table of mean times with one row per solver and one
    /// column per size.
    ///
    /// # Example
    ///
    /// ```
    /// use findsum_benchmark::{BenchmarkResult, MarkdownReport, SizeResult};
    /// use findsum_core::ValueDomain;
    ///
    /// let mut result = BenchmarkResult::new("Test", ValueDomain::new(-100, 100), 10, 0, None);
    /// result.add_size(SizeResult::new(100));
    /// result.add_size(SizeResult::new(1000));
    ///
    /// let comparison = MarkdownReport::comparison(&result);
    /// assert!(comparison.contains("| Solver | n = 100 | n = 1000 |"));
    /// assert!(comparison.contains("| lookup_table_unsorted | 0 | 0 |"));
    /// ```
    pub fn comparison(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::write_comparison(result, &mut output);
        output
    }

    fn write_comparison(result: &BenchmarkResult, output: &mut impl fmt::Write) -> fmt::Result {
        writeln!(output, "## Comparison (mean ns)")?;
        writeln!(output)?;

        write!(output, "| Solver |")?;
        for size in &result.sizes {
            write!(output, " n = {} |", size.size)?;
        }
        writeln!(output)?;

        write!(output, "|--------|")?;
        for _ in &result.sizes {
            write!(output, "------|")?;
        }
        writeln!(output)?;

        for solver in SolverKind::ALL {
            write!(output, "| {} |", solver.name())?;
            for size in &result.sizes {
                write!(output, " {} |", size.stats(solver).mean_nanos())?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Writes Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        let md = Self::to_string(result);
        fs::write(path, md)
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        let md = Self::to_string(result);
        writer.write_all(md.as_bytes())
    }
}
