//! rootscan CLI - bracket real roots of a polynomial and refine them by bisection

mod args;
mod output;
mod settings;

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rootscan_core::{Interval, Polynomial};
use rootscan_solvers::{bisection, scan};
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

use args::{Args, Command, PolynomialArgs, Verbosity};
use output::{Report, RunReport, ScanReport, SolveReport};
use settings::Settings;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    init_logging(settings.verbosity(args.verbosity))?;
    debug!(?settings, "settings resolved");

    let report = execute(&args.command, &settings)?;
    println!("{}", output::render(&report, settings.format(args.format))?);
    Ok(())
}

/// Installs a stderr subscriber so stdout carries results only.
fn init_logging(verbosity: Verbosity) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(verbosity.level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn execute(command: &Command, settings: &Settings) -> Result<Report> {
    match command {
        Command::Scan { polynomial, range } => {
            let polynomial = build_polynomial(polynomial)?;
            let (low, high) = settings.range(range.low, range.high)?;
            Ok(Report::Scan(scan_range(&polynomial, low, high)?))
        }
        Command::Solve {
            polynomial,
            bracket,
            tol,
        } => {
            let polynomial = build_polynomial(polynomial)?;
            let &[left, right] = bracket.as_slice() else {
                bail!("--bracket takes exactly two values, got {}", bracket.len());
            };
            let interval = Interval::new(left, right).context("invalid bracket")?;
            let config = settings.solver_config(*tol);
            Ok(Report::Solve(refine(&polynomial, interval, &config)?))
        }
        Command::Run {
            polynomial,
            range,
            pick,
            tol,
        } => {
            let polynomial = build_polynomial(polynomial)?;
            let (low, high) = settings.range(range.low, range.high)?;
            let config = settings.solver_config(*tol);
            Ok(Report::Run(scan_and_refine(
                &polynomial,
                low,
                high,
                *pick,
                &config,
            )?))
        }
    }
}

fn build_polynomial(args: &PolynomialArgs) -> Result<Polynomial> {
    let polynomial =
        Polynomial::from_descending(&args.coefficients).context("invalid coefficients")?;
    info!(%polynomial, degree = polynomial.degree(), "polynomial built");
    Ok(polynomial)
}

fn scan_range(polynomial: &Polynomial, low: f64, high: f64) -> Result<ScanReport> {
    let candidates = scan::scan(polynomial, low, high).context("scan failed")?;
    Ok(ScanReport::new(polynomial, low, high, candidates))
}

fn refine(
    polynomial: &Polynomial,
    interval: Interval,
    config: &bisection::Config,
) -> Result<SolveReport> {
    let solution = bisection::solve_unobserved(polynomial, interval, config)
        .with_context(|| format!("cannot refine {interval}"))?;
    Ok(SolveReport::new(
        polynomial,
        interval,
        config.tolerance(),
        solution,
    ))
}

fn scan_and_refine(
    polynomial: &Polynomial,
    low: f64,
    high: f64,
    pick: usize,
    config: &bisection::Config,
) -> Result<RunReport> {
    let scan = scan_range(polynomial, low, high)?;
    if scan.candidates.is_empty() {
        return Ok(RunReport {
            scan,
            pick: None,
            solve: None,
        });
    }

    let Some(&interval) = pick
        .checked_sub(1)
        .and_then(|index| scan.candidates.get(index))
    else {
        bail!(
            "--pick {pick} is out of range: the scan found {} candidate(s)",
            scan.candidates.len()
        );
    };

    let solve = refine(polynomial, interval, config)?;
    Ok(RunReport {
        scan,
        pick: Some(pick),
        solve: Some(solve),
    })
}
