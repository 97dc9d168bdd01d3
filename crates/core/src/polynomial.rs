mod display;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::Function;

/// Errors that can occur when constructing a [`Polynomial`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    /// No coefficients were supplied.
    #[error("no coefficients given")]
    Empty,

    /// More coefficients were supplied than a `u32` exponent can index.
    #[error("too many coefficients: {count}")]
    TooManyTerms { count: usize },

    /// The same exponent was supplied more than once.
    #[error("exponent {exponent} given more than once")]
    DuplicateExponent { exponent: u32 },

    /// An exponent exceeds the declared degree.
    #[error("exponent {exponent} exceeds declared degree {degree}")]
    ExponentAboveDegree { exponent: u32, degree: u32 },
}

/// A real polynomial in one variable, stored as exponent → coefficient.
///
/// Exponents are unique by construction and absent exponents read as zero.
/// Once built, a polynomial is never mutated; callers build a new one when the
/// coefficients change.
///
/// Evaluation follows IEEE-754 semantics. Large exponents or magnitudes may
/// overflow to infinity, and a `NaN` coefficient makes every value `NaN`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polynomial {
    degree: u32,
    coefficients: BTreeMap<u32, f64>,
}

impl Polynomial {
    /// Creates a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// The degree is the highest exponent supplied (zero if none).
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::DuplicateExponent`] if an exponent repeats.
    pub fn new(terms: impl IntoIterator<Item = (u32, f64)>) -> Result<Self, PolynomialError> {
        let mut coefficients = BTreeMap::new();
        for (exponent, coefficient) in terms {
            if coefficients.insert(exponent, coefficient).is_some() {
                return Err(PolynomialError::DuplicateExponent { exponent });
            }
        }

        let degree = coefficients.keys().next_back().copied().unwrap_or(0);
        Ok(Self {
            degree,
            coefficients,
        })
    }

    /// Creates a polynomial with a declared degree.
    ///
    /// Exponents in `0..=degree` that are not supplied read as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if an exponent repeats or exceeds `degree`.
    pub fn with_degree(
        degree: u32,
        terms: impl IntoIterator<Item = (u32, f64)>,
    ) -> Result<Self, PolynomialError> {
        let mut polynomial = Self::new(terms)?;
        if let Some(&exponent) = polynomial.coefficients.keys().next_back()
            && exponent > degree
        {
            return Err(PolynomialError::ExponentAboveDegree { exponent, degree });
        }
        polynomial.degree = degree;
        Ok(polynomial)
    }

    /// Creates a polynomial from coefficients listed highest power first.
    ///
    /// `[1.0, 0.0, -4.0]` is `x^2 - 4`. The degree is `len - 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is empty or too long to index by `u32`.
    pub fn from_descending(coefficients: &[f64]) -> Result<Self, PolynomialError> {
        let count = coefficients.len();
        let degree = count
            .checked_sub(1)
            .ok_or(PolynomialError::Empty)
            .and_then(|top| {
                u32::try_from(top).map_err(|_| PolynomialError::TooManyTerms { count })
            })?;

        let terms = (0..=degree).rev().zip(coefficients.iter().copied());
        Self::with_degree(degree, terms)
    }

    /// Returns the degree (declared, or the highest exponent supplied).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the coefficient of `x^exponent`, or zero if it is absent.
    #[must_use]
    pub fn coefficient(&self, exponent: u32) -> f64 {
        self.coefficients.get(&exponent).copied().unwrap_or(0.0)
    }

    /// Returns the stored `(exponent, coefficient)` pairs in ascending order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.coefficients.iter().map(|(&e, &c)| (e, c))
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.values().all(|&c| c == 0.0)
    }

    /// Evaluates `Σ c·x^e` over the stored terms.
    ///
    /// `x^0` is one for every `x`, including zero.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |sum, (&exponent, &coefficient)| {
                sum + coefficient * power(x, exponent)
            })
    }
}

impl Function for Polynomial {
    fn call(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

fn power(x: f64, exponent: u32) -> f64 {
    match i32::try_from(exponent) {
        Ok(n) => x.powi(n),
        Err(_) => x.powf(f64::from(exponent)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn x_squared_minus_four() -> Polynomial {
        Polynomial::new([(2, 1.0), (0, -4.0)]).expect("valid polynomial")
    }

    #[test]
    fn evaluates_known_values() {
        let p = x_squared_minus_four();
        assert_relative_eq!(p.evaluate(0.0), -4.0);
        assert_relative_eq!(p.evaluate(2.0), 0.0);
        assert_relative_eq!(p.evaluate(3.0), 5.0);
        assert_relative_eq!(p.evaluate(-3.0), 5.0);
    }

    #[test]
    fn zero_power_is_one_at_zero() {
        let p = Polynomial::new([(0, 7.0), (1, 3.0)]).expect("valid polynomial");
        assert_relative_eq!(p.evaluate(0.0), 7.0);
    }

    #[test]
    fn empty_polynomial_evaluates_to_zero() {
        let p = Polynomial::new([]).expect("valid polynomial");
        assert!(p.is_zero());
        assert_eq!(p.degree(), 0);
        assert_relative_eq!(p.evaluate(12.5), 0.0);
    }

    #[test]
    fn rejects_duplicate_exponent() {
        let result = Polynomial::new([(1, 2.0), (0, 1.0), (1, -2.0)]);
        assert_eq!(
            result,
            Err(PolynomialError::DuplicateExponent { exponent: 1 })
        );
    }

    #[test]
    fn declared_degree_fills_missing_terms_with_zero() {
        let p = Polynomial::with_degree(4, [(4, 1.0), (0, -1.0)]).expect("valid polynomial");
        assert_eq!(p.degree(), 4);
        assert_relative_eq!(p.coefficient(3), 0.0);
        assert_relative_eq!(p.coefficient(4), 1.0);
        assert_relative_eq!(p.evaluate(1.0), 0.0);
    }

    #[test]
    fn rejects_exponent_above_degree() {
        let result = Polynomial::with_degree(2, [(3, 1.0)]);
        assert_eq!(
            result,
            Err(PolynomialError::ExponentAboveDegree {
                exponent: 3,
                degree: 2
            })
        );
    }

    #[test]
    fn builds_from_descending_coefficients() {
        let p = Polynomial::from_descending(&[1.0, 0.0, -4.0]).expect("valid polynomial");
        let terms: Vec<_> = p.terms().collect();
        assert_eq!(terms, vec![(0, -4.0), (1, 0.0), (2, 1.0)]);
        assert_eq!(p.degree(), 2);
        assert_relative_eq!(p.evaluate(3.0), 5.0);
    }

    #[test]
    fn rejects_empty_descending_coefficients() {
        assert_eq!(
            Polynomial::from_descending(&[]),
            Err(PolynomialError::Empty)
        );
    }

    #[test]
    fn constant_from_descending_has_degree_zero() {
        let p = Polynomial::from_descending(&[3.5]).expect("valid polynomial");
        assert_eq!(p.degree(), 0);
        assert_relative_eq!(p.evaluate(-100.0), 3.5);
    }

    #[test]
    fn huge_exponent_uses_float_power() {
        let p = Polynomial::new([(u32::MAX, 1.0)]).expect("valid polynomial");
        assert_relative_eq!(p.evaluate(1.0), 1.0);
        assert_relative_eq!(p.evaluate(0.5), 0.0);
    }

    #[test]
    fn overflow_follows_ieee_754() {
        let p = Polynomial::new([(400, 1.0)]).expect("valid polynomial");
        assert_eq!(p.evaluate(10.0), f64::INFINITY);

        let p = Polynomial::new([(1, f64::NAN), (0, 1.0)]).expect("valid polynomial");
        assert!(p.evaluate(2.0).is_nan());
    }

    #[test]
    fn polynomial_is_a_function() {
        let p = x_squared_minus_four();
        assert_relative_eq!(Function::call(&p, 1.0), -3.0);
    }
}
