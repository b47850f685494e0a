//! # gfun-core
//!
//! Value domain and expression engine for gfun.
//!
//! This crate provides:
//! - [`Number`]: integer, real or complex scalars with automatic promotion
//! - [`Expr`]: immutable symbolic trees (symbols, sums, products, powers, fractions)
//! - [`Value`]: the union of the two, used as power-series coefficients
//! - Rule-based simplification and structural substitution
//!
//! ## Design Principles
//!
//! - **Structural Identity**: equal trees compare and hash equal, so any
//!   subtree can be a substitution key
//! - **Shared Subtrees**: children are reference-counted and never copied on
//!   rebuild
//! - **Raw Construction**: operators on [`Expr`] only build; [`Expr::simplify`]
//!   normalizes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expr;
pub mod number;
pub mod simplify;
pub mod subs;
pub mod value;

#[cfg(test)]
mod proptests;

pub use expr::{Expr, Symbol};
pub use number::Number;
pub use subs::{substitution, Substitution};
pub use value::Value;
