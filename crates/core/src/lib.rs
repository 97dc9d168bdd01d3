//! Core types and traits for rootscan.
//!
//! This crate defines the values the scanner and solvers operate on:
//!
//! - [`Function`]: a real-valued function of one real variable
//! - [`Polynomial`]: an immutable exponent → coefficient mapping that
//!   implements [`Function`]
//! - [`Interval`]: an ordered pair of finite endpoints, possibly zero-width
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for [`Polynomial`] and [`Interval`].

mod function;
mod interval;
mod observer;
mod polynomial;

pub use function::Function;
pub use interval::{Interval, IntervalError};
pub use observer::Observer;
pub use polynomial::{Polynomial, PolynomialError};
