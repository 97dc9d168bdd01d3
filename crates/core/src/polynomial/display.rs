use std::fmt;

use super::Polynomial;

/// Renders terms highest power first, e.g. `x^3 - 2x + 1`.
///
/// Zero and non-finite coefficients are skipped, a unit coefficient is
/// written only on the constant term, and an empty sum renders as `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = false;

        for (exponent, coefficient) in self.terms().rev() {
            if !coefficient.is_finite() || coefficient == 0.0 {
                continue;
            }

            let negative = coefficient < 0.0;
            match (written, negative) {
                (false, false) => {}
                (false, true) => f.write_str("-")?,
                (true, false) => f.write_str(" + ")?,
                (true, true) => f.write_str(" - ")?,
            }

            let magnitude = coefficient.abs();
            #[allow(clippy::float_cmp)]
            if magnitude != 1.0 || exponent == 0 {
                write!(f, "{magnitude}")?;
            }

            match exponent {
                0 => {}
                1 => f.write_str("x")?,
                e => write!(f, "x^{e}")?,
            }
            written = true;
        }

        if !written {
            f.write_str("0")?;
        }
        Ok(())
    }
}
