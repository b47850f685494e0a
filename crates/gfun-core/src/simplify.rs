//! Rule-based simplification.
//!
//! Simplification is post-order: children are simplified first, then a small
//! fixed set of node-specific identities is applied.
//!
//! - `Sum`: numeric terms are folded into a single leading number; a zero
//!   fold is dropped.
//! - `Product`: numeric factors are folded into a single leading number;
//!   zero absorbs everything, a one fold is dropped.
//! - `Power`: numeric powers are evaluated; `0^e = 0`, `1^e = 1`, `b^0 = 1`,
//!   `b^1 = b`.
//! - `Fraction`: a numeric zero denominator yields positive infinity; numeric
//!   quotients are evaluated; `0/d = 0`, `n/1 = n`.
//!
//! Simplified children that are themselves sums (in a sum) or products (in a
//! product) are spliced before folding, so the result is flat and
//! simplification is idempotent. The simplifier never fails.

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::expr::Expr;
use crate::number::Number;
use crate::value::Value;

impl Expr {
    /// Simplifies the expression, possibly down to a plain number.
    #[must_use]
    pub fn simplify(&self) -> Value {
        match self {
            Expr::Symbol(_) => Value::Expr(self.clone()),
            Expr::Sum(terms) => simplify_sum(terms),
            Expr::Product(terms) => simplify_product(terms),
            Expr::Power { base, exponent } => {
                simplify_power(base.simplify(), exponent.simplify())
            }
            Expr::Fraction {
                numerator,
                denominator,
            } => simplify_fraction(numerator.simplify(), denominator.simplify()),
        }
    }
}

/// Folds numeric terms with `fold` and collects the rest, splicing the terms
/// of nested nodes selected by `nested`.
fn partition(
    terms: &[Value],
    identity: Number,
    fold: fn(Number, Number) -> Number,
    nested: fn(&Expr) -> Option<&[Value]>,
) -> (Number, SmallVec<[Value; 4]>) {
    let mut numeric = identity;
    let mut symbolic = SmallVec::new();

    let mut push = |term: &Value, numeric: &mut Number| match term {
        Value::Number(n) => *numeric = fold(*numeric, *n),
        Value::Expr(_) => symbolic.push(term.clone()),
    };

    for term in terms {
        let term = term.simplify();
        match term.as_expr().and_then(nested) {
            Some(inner) => {
                for t in inner {
                    push(t, &mut numeric);
                }
            }
            None => push(&term, &mut numeric),
        }
    }

    (numeric, symbolic)
}

fn sum_terms(e: &Expr) -> Option<&[Value]> {
    match e {
        Expr::Sum(terms) => Some(&terms[..]),
        _ => None,
    }
}

fn product_terms(e: &Expr) -> Option<&[Value]> {
    match e {
        Expr::Product(terms) => Some(&terms[..]),
        _ => None,
    }
}

fn simplify_sum(terms: &[Value]) -> Value {
    let (numeric, mut symbolic) = partition(terms, Number::ZERO, |a, b| a + b, sum_terms);

    if numeric.is_zero() {
        return match symbolic.len() {
            0 => Value::zero(),
            1 => symbolic.swap_remove(0),
            _ => Value::Expr(Expr::sum(symbolic)),
        };
    }

    if symbolic.is_empty() {
        Value::Number(numeric)
    } else {
        symbolic.insert(0, Value::Number(numeric));
        Value::Expr(Expr::sum(symbolic))
    }
}

fn simplify_product(terms: &[Value]) -> Value {
    let (numeric, mut symbolic) = partition(terms, Number::ONE, |a, b| a * b, product_terms);

    if numeric.is_zero() {
        return Value::zero();
    }

    if numeric.is_one() {
        return match symbolic.len() {
            0 => Value::one(),
            1 => symbolic.swap_remove(0),
            _ => Value::Expr(Expr::product(symbolic)),
        };
    }

    if symbolic.is_empty() {
        Value::Number(numeric)
    } else {
        symbolic.insert(0, Value::Number(numeric));
        Value::Expr(Expr::product(symbolic))
    }
}

fn simplify_power(base: Value, exponent: Value) -> Value {
    match (base.as_number(), exponent.as_number()) {
        (Some(b), Some(e)) => Value::Number(b.pow(e)),
        (Some(b), _) if b.is_zero() => Value::zero(),
        (Some(b), _) if b.is_one() => Value::one(),
        (_, Some(e)) if e.is_zero() => Value::one(),
        (_, Some(e)) if e.is_one() => base,
        _ => Value::Expr(Expr::power(base, exponent)),
    }
}

fn simplify_fraction(numerator: Value, denominator: Value) -> Value {
    match (numerator.as_number(), denominator.as_number()) {
        (_, Some(d)) if d.is_zero() => Value::Number(Number::INFINITY),
        (Some(n), Some(d)) => Value::Number(n / d),
        (Some(n), _) if n.is_zero() => Value::zero(),
        (_, Some(d)) if d.is_one() => numerator,
        _ => Value::Expr(Expr::fraction(numerator, denominator)),
    }
}
