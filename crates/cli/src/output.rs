use std::fmt;

use anyhow::Result;
use rootscan_core::{Interval, Polynomial};
use rootscan_solvers::bisection::{Solution, Status};
use serde::Serialize;

use crate::args::OutputFormat;

/// The outcome of one command, ready to print.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Scan(ScanReport),
    Solve(SolveReport),
    Run(RunReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub function: String,
    pub low: f64,
    pub high: f64,
    pub candidates: Vec<Interval>,
}

impl ScanReport {
    pub fn new(polynomial: &Polynomial, low: f64, high: f64, candidates: Vec<Interval>) -> Self {
        Self {
            function: polynomial.to_string(),
            low,
            high,
            candidates,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub function: String,
    pub interval: Interval,
    pub tolerance: f64,
    pub solution: Solution,
}

impl SolveReport {
    pub fn new(
        polynomial: &Polynomial,
        interval: Interval,
        tolerance: f64,
        solution: Solution,
    ) -> Self {
        Self {
            function: polynomial.to_string(),
            interval,
            tolerance,
            solution,
        }
    }
}

/// A scan followed by the refinement of one picked candidate.
///
/// `pick` and `solve` are absent when the scan found nothing.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub scan: ScanReport,
    pub pick: Option<usize>,
    pub solve: Option<SolveReport>,
}

/// Renders a report in the requested format, without a trailing newline.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string().trim_end().to_owned()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Scan(scan) => fmt::Display::fmt(scan, f),
            Report::Solve(solve) => fmt::Display::fmt(solve, f),
            Report::Run(run) => fmt::Display::fmt(run, f),
        }
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f(x) = {}", self.function)?;
        write_candidates(f, self)
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f(x) = {}", self.function)?;
        write_solution(f, self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.scan, f)?;
        if let (Some(pick), Some(solve)) = (self.pick, &self.solve) {
            writeln!(f)?;
            writeln!(f, "Refining candidate {pick}")?;
            write_solution(f, solve)?;
        }
        Ok(())
    }
}

fn write_candidates(f: &mut fmt::Formatter<'_>, scan: &ScanReport) -> fmt::Result {
    writeln!(f, "Scanning [{}, {}] in unit steps", scan.low, scan.high)?;

    if scan.candidates.is_empty() {
        return writeln!(f, "No root indicators in range");
    }

    for (number, candidate) in scan.candidates.iter().enumerate() {
        let note = if candidate.is_degenerate() {
            " (exact root)"
        } else {
            ""
        };
        writeln!(f, "{:>4}. {candidate}{note}", number + 1)?;
    }
    Ok(())
}

fn write_solution(f: &mut fmt::Formatter<'_>, solve: &SolveReport) -> fmt::Result {
    let solution = &solve.solution;
    writeln!(
        f,
        "Bisection on {} with tolerance {:e}",
        solve.interval, solve.tolerance
    )?;

    if solution.is_exact() {
        return writeln!(f, "Root: {:.8} (exact at point)", solution.root);
    }

    writeln!(
        f,
        "{:>4} | {:>12} | {:>12} | {:>12} | {:>12}",
        "k", "a", "b", "m", "f(m)"
    )?;
    for row in &solution.trace {
        writeln!(
            f,
            "{:>4} | {:>12.6} | {:>12.6} | {:>12.6} | {:>12.6}",
            row.index, row.left, row.right, row.midpoint, row.value
        )?;
    }

    writeln!(
        f,
        "Root: {:.8} | Error: {:.3e} | Iterations: {}",
        solution.root, solution.error_bound, solution.iters
    )?;
    match solution.status {
        Status::MaxIters => writeln!(f, "Iteration limit reached before the tolerance was met"),
        Status::StoppedByObserver => writeln!(f, "Stopped early"),
        Status::Exact | Status::Converged => Ok(()),
    }
}
