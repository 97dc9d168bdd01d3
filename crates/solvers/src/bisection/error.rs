use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The endpoint values do not change sign and the interval is not an
    /// exact root.
    #[error("invalid bracket [{left}, {right}]: f({left})={left_value} and f({right})={right_value} do not change sign")]
    InvalidBracket {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}
