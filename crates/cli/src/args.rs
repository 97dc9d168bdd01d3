use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::Level;

/// How much diagnostic logging goes to stderr.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Scan and solve summaries
    Verbose,
    /// Candidates and solver results
    Debug,
    /// Every bisection step
    Trace,
}

impl Verbosity {
    /// Maximum tracing level for this verbosity.
    pub fn level(self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
            Verbosity::Trace => Level::TRACE,
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Find and refine real roots of polynomials by bisection.
#[derive(Parser, Debug, Clone)]
#[command(name = "rootscan")]
#[command(version)]
#[command(about = "Bracket real roots of a polynomial and refine them by bisection")]
pub struct Args {
    /// Settings file (defaults to ./rootscan.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging verbosity
    #[arg(short, long, global = true, value_enum)]
    pub verbosity: Option<Verbosity>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List unit-step brackets and grid roots in a range
    Scan {
        #[command(flatten)]
        polynomial: PolynomialArgs,

        #[command(flatten)]
        range: RangeArgs,
    },

    /// Refine one bracket by bisection
    Solve {
        #[command(flatten)]
        polynomial: PolynomialArgs,

        /// Bracket endpoints
        #[arg(
            short,
            long,
            required = true,
            num_args = 2,
            value_names = ["A", "B"],
            allow_negative_numbers = true
        )]
        bracket: Vec<f64>,

        /// Convergence tolerance
        #[arg(short, long, allow_negative_numbers = true)]
        tol: Option<f64>,
    },

    /// Scan a range, then refine one of the candidates
    Run {
        #[command(flatten)]
        polynomial: PolynomialArgs,

        #[command(flatten)]
        range: RangeArgs,

        /// Candidate to refine, counting from 1
        #[arg(short, long, default_value_t = 1)]
        pick: usize,

        /// Convergence tolerance
        #[arg(short, long, allow_negative_numbers = true)]
        tol: Option<f64>,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct PolynomialArgs {
    /// Coefficients, highest power first (`1 0 -4` is x^2 - 4)
    #[arg(
        short = 'c',
        long = "coef",
        value_name = "COEF",
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub coefficients: Vec<f64>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RangeArgs {
    /// Start of the scan range
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// End of the scan range
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,
}
