//! The value domain shared by coefficients and symbolic operands.
//!
//! A [`Value`] is either a [`Number`] or an [`Expr`]. Arithmetic on values is
//! coefficient arithmetic: two numbers are combined numerically, anything
//! involving an expression builds the corresponding node and simplifies it
//! immediately, so results stay in canonical form.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::expr::{Expr, Symbol};
use crate::number::Number;

/// A number or a symbolic expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// A primitive number.
    Number(Number),
    /// A symbolic expression tree.
    Expr(Expr),
}

impl Value {
    /// Creates a symbol value.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Value::Expr(Expr::symbol(name))
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Expr(_) => None,
        }
    }

    /// Returns the expression payload, if any.
    #[must_use]
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Value::Number(_) => None,
            Value::Expr(e) => Some(e),
        }
    }

    /// Returns true if this is a number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Simplifies the value. Numbers are already simple.
    #[must_use]
    pub fn simplify(&self) -> Value {
        match self {
            Value::Number(_) => self.clone(),
            Value::Expr(e) => e.simplify(),
        }
    }

    /// Raises this value to a power.
    #[must_use]
    pub fn pow(&self, exponent: &Value) -> Value {
        match (self, exponent) {
            (Value::Number(b), Value::Number(e)) => Value::Number(b.pow(*e)),
            _ => Expr::power(self.clone(), exponent.clone()).simplify(),
        }
    }

    /// The exponential function.
    ///
    /// Symbolic arguments produce `e^v`, with `e` the real constant.
    #[must_use]
    pub fn exp(&self) -> Value {
        match self {
            Value::Number(n) => Value::Number(n.exp()),
            Value::Expr(_) => Value::Expr(Expr::power(std::f64::consts::E, self.clone())),
        }
    }

    /// Negation without simplification: numbers are negated, expressions
    /// become `-1 * e`.
    pub(crate) fn negated(self) -> Value {
        match self {
            Value::Number(n) => Value::Number(-n),
            Value::Expr(_) => Value::Expr(Expr::product([Value::from(-1), self])),
        }
    }

    fn combine(
        &self,
        rhs: &Value,
        numeric: fn(Number, Number) -> Number,
        symbolic: fn(Value, Value) -> Expr,
    ) -> Value {
        match (self, rhs) {
            (Value::Number(a), Value::Number(b)) => Value::Number(numeric(*a, *b)),
            _ => symbolic(self.clone(), rhs.clone()).simplify(),
        }
    }

    fn add_value(&self, rhs: &Value) -> Value {
        self.combine(rhs, Add::add, |a, b| Expr::sum([a, b]))
    }

    fn sub_value(&self, rhs: &Value) -> Value {
        self.combine(rhs, Sub::sub, |a, b| Expr::sum([a, b.negated()]))
    }

    fn mul_value(&self, rhs: &Value) -> Value {
        self.combine(rhs, Mul::mul, |a, b| Expr::product([a, b]))
    }

    fn div_value(&self, rhs: &Value) -> Value {
        self.combine(rhs, Div::div, |a, b| Expr::fraction(a, b))
    }

    fn neg_value(&self) -> Value {
        match self {
            Value::Number(n) => Value::Number(-*n),
            Value::Expr(_) => self.clone().negated().simplify(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::zero()
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::Number(Number::ZERO)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_zero())
    }
}

impl One for Value {
    fn one() -> Self {
        Value::Number(Number::ONE)
    }

    fn is_one(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_one())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Expr(e) => write!(f, "{e}"),
        }
    }
}

macro_rules! value_from_number {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(Number::from(n))
            }
        }
    )*};
}

value_from_number!(i64, i32, u32, usize, f64, Complex64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Expr> for Value {
    fn from(e: Expr) -> Self {
        Value::Expr(e)
    }
}

impl From<&Expr> for Value {
    fn from(e: &Expr) -> Self {
        Value::Expr(e.clone())
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Expr(Expr::Symbol(s))
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

macro_rules! value_binop {
    ($trait:ident, $method:ident, $imp:ident) => {
        impl $trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self.$imp(&rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                self.$imp(rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                self.$imp(&rhs)
            }
        }

        impl $trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                self.$imp(rhs)
            }
        }
    };
}

value_binop!(Add, add, add_value);
value_binop!(Sub, sub, sub_value);
value_binop!(Mul, mul, mul_value);
value_binop!(Div, div, div_value);

macro_rules! value_scalar_binop {
    ($trait:ident, $method:ident, $imp:ident, $($scalar:ty),*) => {$(
        impl $trait<$scalar> for Value {
            type Output = Value;

            fn $method(self, rhs: $scalar) -> Value {
                self.$imp(&Value::from(rhs))
            }
        }

        impl $trait<$scalar> for &Value {
            type Output = Value;

            fn $method(self, rhs: $scalar) -> Value {
                self.$imp(&Value::from(rhs))
            }
        }

        impl $trait<Value> for $scalar {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                Value::from(self).$imp(&rhs)
            }
        }

        impl $trait<&Value> for $scalar {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                Value::from(self).$imp(rhs)
            }
        }
    )*};
}

value_scalar_binop!(Add, add, add_value, i64, f64, Complex64, Number);
value_scalar_binop!(Sub, sub, sub_value, i64, f64, Complex64, Number);
value_scalar_binop!(Mul, mul, mul_value, i64, f64, Complex64, Number);
value_scalar_binop!(Div, div, div_value, i64, f64, Complex64, Number);

macro_rules! value_expr_binop {
    ($trait:ident, $method:ident, $imp:ident) => {
        impl $trait<Expr> for Value {
            type Output = Value;

            fn $method(self, rhs: Expr) -> Value {
                self.$imp(&Value::Expr(rhs))
            }
        }

        impl $trait<&Expr> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Expr) -> Value {
                self.$imp(&Value::from(rhs))
            }
        }
    };
}

value_expr_binop!(Add, add, add_value);
value_expr_binop!(Sub, sub, sub_value);
value_expr_binop!(Mul, mul, mul_value);
value_expr_binop!(Div, div, div_value);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        self.neg_value()
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        self.neg_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_arithmetic() {
        assert_eq!(Value::from(2) + Value::from(3), Value::from(5));
        assert_eq!(Value::from(1) / Value::from(2), Value::from(0.5));
        assert_eq!(-Value::from(4), Value::from(-4));
        assert_eq!(Value::from(2).pow(&Value::from(3)), Value::from(8));
    }

    #[test]
    fn test_symbolic_arithmetic_is_canonical() {
        let t = Value::symbol("t");

        assert_eq!(Value::zero() + &t, t);
        assert_eq!(&t * Value::one(), t);
        assert_eq!(&t * 0, Value::zero());
        assert_eq!(
            &t * &t,
            Value::Expr(Expr::product([t.clone(), t.clone()]))
        );
        assert_eq!(
            2 * &t + 3,
            Value::Expr(Expr::sum([
                Value::from(3),
                Value::Expr(Expr::product([Value::from(2), t.clone()])),
            ]))
        );
    }

    #[test]
    fn test_negation_of_negation() {
        let t = Value::symbol("t");
        assert_eq!(-(-&t), t);
    }

    #[test]
    fn test_subtraction_cancels_numbers() {
        let t = Value::symbol("t");
        let v = (&t + 5) - 5;
        assert_eq!(v, t);
    }

    #[test]
    fn test_exp_of_symbol_is_power_of_e() {
        let t = Value::symbol("t");
        assert_eq!(
            t.exp(),
            Value::Expr(Expr::power(std::f64::consts::E, t.clone()))
        );
        assert_eq!(Value::zero().exp(), Value::one());
    }

    #[test]
    fn test_zero_and_one_are_numeric_only() {
        assert!(Value::from(0.0).is_zero());
        assert!(Value::from(Complex64::new(1.0, 0.0)).is_one());
        assert!(!Value::symbol("x").is_zero());
        assert!(!Value::symbol("x").is_one());
    }
}
