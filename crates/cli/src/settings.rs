use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rootscan_solvers::bisection::Config;
use serde::Deserialize;

use crate::args::{OutputFormat, Verbosity};

/// Settings file read from the working directory when `--config` is absent.
pub const DEFAULT_FILE: &str = "rootscan.toml";

/// Defaults loaded from a TOML settings file.
///
/// Every field is optional and command-line arguments take precedence.
///
/// ```toml
/// tolerance = 1e-9
/// low = -10.0
/// high = 10.0
/// format = "json"
/// verbosity = "verbose"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tolerance: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub format: Option<OutputFormat>,
    pub verbosity: Option<Verbosity>,
}

impl Settings {
    /// Loads settings from `path`, or from [`DEFAULT_FILE`] if it exists.
    ///
    /// A missing default file yields empty settings. An explicit path that
    /// cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// Parses settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Resolves the output format, preferring the command-line value.
    pub fn format(&self, arg: Option<OutputFormat>) -> OutputFormat {
        arg.or(self.format).unwrap_or_default()
    }

    /// Resolves the verbosity, preferring the command-line value.
    pub fn verbosity(&self, arg: Option<Verbosity>) -> Verbosity {
        arg.or(self.verbosity).unwrap_or_default()
    }

    /// Resolves the solver config, preferring the command-line tolerance.
    pub fn solver_config(&self, tol: Option<f64>) -> Config {
        Config::from_option(tol.or(self.tolerance))
    }

    /// Resolves the scan range, preferring the command-line bounds.
    ///
    /// Bounds are only required to be present here; the scanner validates them.
    pub fn range(&self, low: Option<f64>, high: Option<f64>) -> Result<(f64, f64)> {
        let low = low
            .or(self.low)
            .context("missing scan start: pass --low or set `low` in the settings file")?;
        let high = high
            .or(self.high)
            .context("missing scan end: pass --high or set `high` in the settings file")?;
        Ok((low, high))
    }
}
