use tracing::debug;

/// Tolerance used when none (or an unusable one) is given.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Configuration for the bisection solver.
///
/// The tolerance bounds both the final half-width of the bracket and the
/// magnitude of a midpoint value accepted as a root. It is always finite and
/// positive: invalid input falls back to [`DEFAULT_TOLERANCE`] rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a config, falling back to the default for a tolerance that is
    /// non-positive or non-finite.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        if tolerance.is_finite() && tolerance > 0.0 {
            return Self { tolerance };
        }

        debug!(
            tolerance,
            fallback = DEFAULT_TOLERANCE,
            "unusable tolerance, using default"
        );
        Self::default()
    }

    /// Creates a config from an optional tolerance.
    #[must_use]
    pub fn from_option(tolerance: Option<f64>) -> Self {
        tolerance.map_or_else(Self::default, Self::new)
    }

    /// Returns the tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
