//! Lazy formal power series for gfun.
//!
//! This crate provides:
//! - [`PowerSeries`]: lazy evaluation with memoization
//! - Arithmetic with series and scalar operands on either side
//! - Inversion, integer powers (cached per series) and real powers
//! - Formal derivative and antiderivative
//! - [`exp`], [`sin`] and [`cos`] of a series
//!
//! Coefficients are [`gfun_core::Value`]s, so a series may carry symbolic
//! coefficients and still support every operation above.
//!
//! # Key algorithms
//!
//! - Inverse: `1/f = (1/a) Σ q^i` with `q = 1 - f/a`, `q_0 = 0`
//! - Real power: generalized binomial series in `q = f/a - 1`
//! - Exp: `e^a Σ q^i / i!` with `q = f - a`
//!
//! Each recurrence reads only operand coefficients up to `n` and
//! coefficients of other series, so lazy evaluation always terminates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculus;
pub mod config;
pub mod error;
pub mod ops;
pub mod pow;
pub mod power_series;
mod source;
pub mod transcendental;

#[cfg(test)]
mod proptests;

pub use calculus::{derivative, integral};
pub use config::SeriesConfig;
pub use error::{Result, SeriesError};
pub use power_series::{CoefficientSource, PowerSeries};
pub use transcendental::{cos, exp, sin};
