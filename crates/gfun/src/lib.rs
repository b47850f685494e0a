//! # gfun
//!
//! Generating functions as lazy formal power series with numeric or symbolic
//! coefficients.
//!
//! A series is never truncated up front: coefficients are computed on demand
//! and memoized. Coefficients may contain free symbols, so closed forms such
//! as the Legendre generating function `1/sqrt(1 - 2xt + x²)` can be expanded
//! with `t` left symbolic and substituted later.
//!
//! ## Features
//!
//! - **Lazy Series**: memoized coefficients, cached integer powers
//! - **Closed Forms**: inverse, real powers, `exp`, `sin`, `cos`
//! - **Calculus**: formal derivative and antiderivative
//! - **Symbolic Coefficients**: a small expression engine with simplification
//!   and structural substitution
//!
//! ## Quick Start
//!
//! ```rust
//! use gfun::prelude::*;
//!
//! let x = PowerSeries::x();
//! let geometric = (1 / (1 - &x)).unwrap();
//! assert_eq!(geometric.coeff(10), Value::from(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gfun_core as core;
pub use gfun_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gfun_core::{substitution, Expr, Number, Substitution, Symbol, Value};
    pub use gfun_series::{
        cos, derivative, exp, integral, sin, PowerSeries, SeriesConfig, SeriesError,
    };
}
