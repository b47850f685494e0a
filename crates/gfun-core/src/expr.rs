//! Expression node types.
//!
//! Expressions are immutable trees whose leaves are [`Value`]s. Two nodes are
//! equal iff they have the same variant and structurally equal operands, and
//! equal nodes hash identically, so whole subtrees can serve as keys of a
//! [`Substitution`](crate::Substitution).
//!
//! `Sum` and `Product` are flattened when constructed: an argument that is
//! itself a `Sum` (respectively `Product`) contributes its terms rather than
//! a nested node. Term order is otherwise preserved.
//!
//! The arithmetic operators on [`Expr`] build raw trees without evaluating
//! anything; call [`Expr::simplify`] to normalize.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::number::Number;
use crate::value::Value;

/// A named symbol. Symbols with the same name are the same symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A symbolic expression tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A free symbol.
    Symbol(Symbol),

    /// Sum of terms: a + b + c + ...
    ///
    /// Invariant: no term is itself a `Sum`.
    Sum(Arc<[Value]>),

    /// Product of terms: a * b * c * ...
    ///
    /// Invariant: no term is itself a `Product`.
    Product(Arc<[Value]>),

    /// Power expression: base^exponent.
    Power {
        /// The base of the power.
        base: Arc<Value>,
        /// The exponent.
        exponent: Arc<Value>,
    },

    /// Division: numerator / denominator.
    Fraction {
        /// The numerator.
        numerator: Arc<Value>,
        /// The denominator.
        denominator: Arc<Value>,
    },
}

fn flatten(
    terms: impl IntoIterator<Item = impl Into<Value>>,
    nested: fn(&Expr) -> Option<&[Value]>,
) -> Arc<[Value]> {
    let mut flat = Vec::new();
    for term in terms {
        let term: Value = term.into();
        match term {
            Value::Expr(e) => match nested(&e) {
                Some(inner) => flat.extend(inner.iter().cloned()),
                None => flat.push(Value::Expr(e)),
            },
            number => flat.push(number),
        }
    }
    Arc::from(flat)
}

fn sum_terms(e: &Expr) -> Option<&[Value]> {
    match e {
        Expr::Sum(inner) => Some(&inner[..]),
        _ => None,
    }
}

fn product_terms(e: &Expr) -> Option<&[Value]> {
    match e {
        Expr::Product(inner) => Some(&inner[..]),
        _ => None,
    }
}

impl Expr {
    /// Creates a symbol leaf.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// Creates a flattened sum.
    pub fn sum(terms: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Expr::Sum(flatten(terms, sum_terms))
    }

    /// Creates a flattened product.
    pub fn product(terms: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Expr::Product(flatten(terms, product_terms))
    }

    /// Creates a power node.
    pub fn power(base: impl Into<Value>, exponent: impl Into<Value>) -> Self {
        Expr::Power {
            base: Arc::new(base.into()),
            exponent: Arc::new(exponent.into()),
        }
    }

    /// Creates a fraction node.
    pub fn fraction(numerator: impl Into<Value>, denominator: impl Into<Value>) -> Self {
        Expr::Fraction {
            numerator: Arc::new(numerator.into()),
            denominator: Arc::new(denominator.into()),
        }
    }

    /// Builds `self^exponent` without evaluating.
    #[must_use]
    pub fn pow(&self, exponent: impl Into<Value>) -> Expr {
        Expr::power(self.clone(), exponent)
    }

    /// Returns the terms of a `Sum` or `Product`.
    #[must_use]
    pub fn terms(&self) -> Option<&[Value]> {
        match self {
            Expr::Sum(terms) | Expr::Product(terms) => Some(&terms[..]),
            _ => None,
        }
    }

    /// Returns the operands of this node, in field order.
    #[must_use]
    pub fn children(&self) -> SmallVec<[&Value; 4]> {
        match self {
            Expr::Symbol(_) => SmallVec::new(),
            Expr::Sum(terms) | Expr::Product(terms) => terms.iter().collect(),
            Expr::Power { base, exponent } => smallvec::smallvec![&**base, &**exponent],
            Expr::Fraction {
                numerator,
                denominator,
            } => smallvec::smallvec![&**numerator, &**denominator],
        }
    }

    /// Returns the set of symbols occurring in the expression.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            if let Expr::Symbol(s) = expr {
                symbols.insert(s.clone());
            }
            stack.extend(expr.children().into_iter().filter_map(Value::as_expr));
        }
        symbols
    }

    /// Returns true if the expression contains no symbols.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.free_symbols().is_empty()
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, terms: &[Value], sep: &str) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{term}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(s) => write!(f, "{s}"),
            Expr::Sum(terms) => write_joined(f, terms, " + "),
            Expr::Product(terms) => write_joined(f, terms, " * "),
            Expr::Power { base, exponent } => write!(f, "{base}^{exponent}"),
            Expr::Fraction {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Expr::Symbol(s)
    }
}

// Raw construction: `a - b` is `Sum(a, -b)`, `-a` is `Product(-1, a)`.

fn raw_add(lhs: Value, rhs: Value) -> Expr {
    Expr::sum([lhs, rhs])
}

fn raw_sub(lhs: Value, rhs: Value) -> Expr {
    Expr::sum([lhs, rhs.negated()])
}

fn raw_mul(lhs: Value, rhs: Value) -> Expr {
    Expr::product([lhs, rhs])
}

fn raw_div(lhs: Value, rhs: Value) -> Expr {
    Expr::fraction(lhs, rhs)
}

macro_rules! expr_binop {
    ($trait:ident, $method:ident, $build:ident, $($scalar:ty),*) => {
        impl<T: Into<Value>> $trait<T> for Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                $build(Value::Expr(self), rhs.into())
            }
        }

        impl<T: Into<Value>> $trait<T> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                $build(Value::Expr(self.clone()), rhs.into())
            }
        }

        $(
            impl $trait<Expr> for $scalar {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    $build(Value::from(self), Value::Expr(rhs))
                }
            }

            impl $trait<&Expr> for $scalar {
                type Output = Expr;

                fn $method(self, rhs: &Expr) -> Expr {
                    $build(Value::from(self), Value::Expr(rhs.clone()))
                }
            }
        )*
    };
}

expr_binop!(Add, add, raw_add, i64, f64, Complex64, Number);
expr_binop!(Sub, sub, raw_sub, i64, f64, Complex64, Number);
expr_binop!(Mul, mul, raw_mul, i64, f64, Complex64, Number);
expr_binop!(Div, div, raw_div, i64, f64, Complex64, Number);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::product([Value::from(-1), Value::Expr(self)])
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(e: &Expr) -> Value {
        Value::Expr(e.clone())
    }

    #[test]
    fn test_symbol_identity() {
        assert_eq!(Expr::symbol("x"), Expr::symbol("x"));
        assert_ne!(Expr::symbol("x"), Expr::symbol("y"));
        assert_eq!(Symbol::new("x").name(), "x");
    }

    #[test]
    fn test_sum_flattens_on_construction() {
        let s = Expr::sum([Value::Expr(Expr::sum([1, 2])), Value::from(3)]);
        assert_eq!(s, Expr::sum([1, 2, 3]));
        assert_eq!(s.terms().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn test_product_flattens_on_construction() {
        let p = Expr::product([
            Value::Expr(Expr::product([1, 2])),
            Value::Expr(Expr::product([3, 4])),
        ]);
        assert_eq!(p, Expr::product([1, 2, 3, 4]));
    }

    #[test]
    fn test_product_does_not_absorb_sum() {
        let x = Expr::symbol("x");
        let p = Expr::product([v(&Expr::sum([v(&x), Value::from(1)])), Value::from(2)]);
        assert_eq!(p.terms().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_operators_build_raw_trees() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");

        assert_eq!(&x + 1, Expr::sum([v(&x), Value::from(1)]));
        assert_eq!(1 + &x, Expr::sum([Value::from(1), v(&x)]));
        assert_eq!(&x - 1, Expr::sum([v(&x), Value::from(-1)]));
        assert_eq!(&x * 2, Expr::product([v(&x), Value::from(2)]));
        assert_eq!(1 / &x, Expr::fraction(1, v(&x)));
        assert_eq!(&x / 2, Expr::fraction(v(&x), 2));
        assert_eq!(x.pow(3), Expr::power(v(&x), 3));
        assert_eq!(x.pow(v(&y)), Expr::power(v(&x), v(&y)));
        assert_eq!(-&x, Expr::product([Value::from(-1), v(&x)]));
        assert_eq!(
            &x - &y,
            Expr::sum([v(&x), Value::Expr(Expr::product([Value::from(-1), v(&y)]))])
        );
    }

    #[test]
    fn test_long_sum_is_flat() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        assert_eq!(&x + 1 + &y, Expr::sum([v(&x), Value::from(1), v(&y)]));
    }

    #[test]
    fn test_display() {
        let x = Expr::symbol("x");
        assert_eq!(Expr::sum([1, 2, 3, 4]).to_string(), "1 + 2 + 3 + 4");
        assert_eq!(Expr::product([1, 2]).to_string(), "1 * 2");
        assert_eq!(Expr::power(2, 3).to_string(), "2^3");
        assert_eq!(Expr::fraction(2, 3).to_string(), "2/3");
        assert_eq!(x.to_string(), "x");
        assert_eq!((-&x).to_string(), "-1 * x");
    }

    #[test]
    fn test_equality_and_fields() {
        let f = Expr::fraction(2, 3);
        assert_eq!(f, Expr::fraction(2, 3));
        assert_ne!(f, Expr::fraction(2, 4));
        match f {
            Expr::Fraction {
                numerator,
                denominator,
            } => {
                assert_eq!(*numerator, Value::from(2));
                assert_eq!(*denominator, Value::from(3));
            }
            _ => panic!("expected a fraction"),
        }
    }

    #[test]
    fn test_free_symbols() {
        let x = Expr::symbol("x");
        let y = Expr::symbol("y");
        let e = (&x + 1) * y.pow(v(&x));
        let names: Vec<_> = e.free_symbols().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(Expr::sum([1, 2]).is_constant());
        assert!(!e.is_constant());
    }
}
