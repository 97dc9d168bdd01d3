//! Root bracketing and refinement for real functions of one variable.
//!
//! The two stages are independent, stateless entry points:
//!
//! - [`scan`]: walks a range in unit steps and reports candidate brackets
//!   (sign changes) and exact roots found on the step grid
//! - [`bisection`]: refines one chosen bracket to a requested tolerance and
//!   records every step in a trace
//!
//! Both accept any [`Function`], including
//! [`Polynomial`](rootscan_core::Polynomial).
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for solver results.
//!
//! [`Function`]: rootscan_core::Function

pub mod bisection;
pub mod scan;

mod sign;

#[cfg(test)]
mod proptests;
