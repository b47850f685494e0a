//! Numeric leaves of the value domain.
//!
//! A [`Number`] is an integer, a real or a complex number. Arithmetic
//! promotes along integer → real → complex, so mixed expressions never
//! need explicit conversions:
//!
//! - integer `+ - *` integer stays an integer unless it overflows
//! - integer `/` integer is true division and yields a real
//! - a negative real raised to a non-integral power yields a complex
//!
//! Equality is numeric across kinds (`1 == 1.0 == 1+0i`) and hashing agrees
//! with it, so numbers can be used inside hashed expression keys. Unlike
//! IEEE comparison, NaN equals NaN, which keeps `Eq` reflexive.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};

/// A primitive number: integer, real or complex.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    /// A machine integer.
    Integer(i64),
    /// A double precision real.
    Real(f64),
    /// A double precision complex number.
    Complex(Complex64),
}

/// Smallest `f64` that no longer fits in an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    /// The integer zero.
    pub const ZERO: Number = Number::Integer(0);
    /// The integer one.
    pub const ONE: Number = Number::Integer(1);
    /// Positive infinity, produced by division by a zero denominator.
    pub const INFINITY: Number = Number::Real(f64::INFINITY);
    /// The imaginary unit.
    pub const I: Number = Number::Complex(Complex64::new(0.0, 1.0));

    /// Returns the value as a complex number.
    #[must_use]
    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Integer(i) => Complex64::new(i as f64, 0.0),
            Number::Real(r) => Complex64::new(r, 0.0),
            Number::Complex(c) => c,
        }
    }

    /// Returns the value as a real, if it has no imaginary part.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        match self {
            Number::Integer(i) => Some(i as f64),
            Number::Real(r) => Some(r),
            Number::Complex(c) if c.im == 0.0 => Some(c.re),
            Number::Complex(_) => None,
        }
    }

    /// Returns the exact integer value, if the number is integral.
    #[must_use]
    pub fn as_integer(self) -> Option<i64> {
        let real = match self {
            Number::Integer(i) => return Some(i),
            Number::Real(r) => r,
            Number::Complex(c) if c.im == 0.0 => c.re,
            Number::Complex(_) => return None,
        };
        if real.fract() == 0.0 && real >= -I64_BOUND && real < I64_BOUND {
            Some(real as i64)
        } else {
            None
        }
    }

    /// Returns true if this is an integer or real (no complex part).
    #[must_use]
    pub fn is_real(self) -> bool {
        !matches!(self, Number::Complex(_))
    }

    /// Real part for the integer/real arms. Complex numbers yield their real part.
    fn re(self) -> f64 {
        match self {
            Number::Integer(i) => i as f64,
            Number::Real(r) => r,
            Number::Complex(c) => c.re,
        }
    }

    /// Raises this number to the given power.
    ///
    /// Integer powers of integers stay exact while they fit; a negative real
    /// base with a non-integral exponent takes the principal complex branch.
    #[must_use]
    pub fn pow(self, exponent: Number) -> Number {
        match (self, exponent) {
            (Number::Integer(base), Number::Integer(exp)) => {
                if exp >= 0 {
                    u32::try_from(exp)
                        .ok()
                        .and_then(|e| base.checked_pow(e))
                        .map_or_else(
                            || Number::Real((base as f64).powf(exp as f64)),
                            Number::Integer,
                        )
                } else {
                    Number::Real((base as f64).powf(exp as f64))
                }
            }
            (Number::Complex(_), _) | (_, Number::Complex(_)) => {
                complex_pow(self.to_complex(), exponent.to_complex())
            }
            _ => {
                let (base, exp) = (self.re(), exponent.re());
                if base < 0.0 && exp.fract() != 0.0 {
                    complex_pow(Complex64::new(base, 0.0), Complex64::new(exp, 0.0))
                } else {
                    Number::Real(base.powf(exp))
                }
            }
        }
    }

    /// The exponential function. Real for real input, complex for complex input.
    #[must_use]
    pub fn exp(self) -> Number {
        match self {
            Number::Complex(c) => Number::Complex(c.exp()),
            other => Number::Real(other.re().exp()),
        }
    }

    /// Computes `n!`, exact while it fits in an `i64`.
    #[must_use]
    pub fn factorial(n: usize) -> Number {
        Number::falling_product(1, n)
    }

    /// Computes the product `from * (from + 1) * ... * to`.
    ///
    /// The empty product (`from > to`) is one.
    #[must_use]
    pub fn falling_product(from: usize, to: usize) -> Number {
        let mut acc = Number::ONE;
        for m in from..=to {
            acc = acc * Number::from_usize(m);
        }
        acc
    }

    fn from_usize(n: usize) -> Number {
        i64::try_from(n).map_or(Number::Real(n as f64), Number::Integer)
    }
}

fn complex_pow(base: Complex64, exponent: Complex64) -> Number {
    if exponent.is_zero() {
        return Number::Complex(Complex64::one());
    }
    if base.is_zero() {
        return if exponent.re > 0.0 {
            Number::Complex(Complex64::zero())
        } else {
            Number::Complex(Complex64::new(f64::INFINITY, 0.0))
        };
    }
    Number::Complex(base.powc(exponent))
}

/// Canonical bit pattern so that `0.0`/`-0.0` and all NaNs hash alike.
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Integer(a), n) | (n, Number::Integer(a)) => n.as_integer() == Some(a),
            (a, b) => {
                let (a, b) = (a.to_complex(), b.to_complex());
                same_float(a.re, b.re) && same_float(a.im, b.im)
            }
        }
    }
}

fn same_float(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(i) = self.as_integer() {
            0u8.hash(state);
            i.hash(state);
            return;
        }
        let c = self.to_complex();
        if c.im == 0.0 {
            1u8.hash(state);
            canonical_bits(c.re).hash(state);
        } else {
            2u8.hash(state);
            canonical_bits(c.re).hash(state);
            canonical_bits(c.im).hash(state);
        }
    }
}

macro_rules! number_ring_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Integer(a), Number::Integer(b)) => a.$checked(b).map_or_else(
                        || Number::Real((a as f64).$method(b as f64)),
                        Number::Integer,
                    ),
                    (Number::Complex(_), _) | (_, Number::Complex(_)) => {
                        Number::Complex(self.to_complex().$method(rhs.to_complex()))
                    }
                    _ => Number::Real(self.re().$method(rhs.re())),
                }
            }
        }
    };
}

number_ring_op!(Add, add, checked_add);
number_ring_op!(Sub, sub, checked_sub);
number_ring_op!(Mul, mul, checked_mul);

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        if self.is_real() && rhs.is_real() {
            Number::Real(self.re() / rhs.re())
        } else {
            Number::Complex(self.to_complex() / rhs.to_complex())
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(i) => i
                .checked_neg()
                .map_or(Number::Real(-(i as f64)), Number::Integer),
            Number::Real(r) => Number::Real(-r),
            Number::Complex(c) => Number::Complex(-c),
        }
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::ZERO
    }

    fn is_zero(&self) -> bool {
        match *self {
            Number::Integer(i) => i == 0,
            Number::Real(r) => r == 0.0,
            Number::Complex(c) => c.is_zero(),
        }
    }
}

impl One for Number {
    fn one() -> Self {
        Number::ONE
    }

    fn is_one(&self) -> bool {
        *self == Number::ONE
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Integer(i64::from(n))
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::from_usize(n)
    }
}

impl From<f64> for Number {
    fn from(r: f64) -> Self {
        Number::Real(r)
    }
}

impl From<Complex64> for Number {
    fn from(c: Complex64) -> Self {
        Number::Complex(c)
    }
}

/// Formats a float the way a reader of numeric output expects:
/// `1.0`, `0.5`, `inf`, `1e+20`, `1e-05`.
fn fmt_real(f: &mut fmt::Formatter<'_>, x: f64, keep_point: bool) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("nan");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "inf" } else { "-inf" });
    }
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{x:e}");
        if let Some((mantissa, exp)) = sci.split_once('e') {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            return write!(f, "{mantissa}e{sign}{:02}", exp.abs());
        }
        return f.write_str(&sci);
    }
    if x.fract() == 0.0 {
        if keep_point {
            write!(f, "{x:.1}")
        } else {
            write!(f, "{x:.0}")
        }
    } else {
        write!(f, "{x}")
    }
}

struct Component(f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_real(f, self.0, false)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Real(r) => fmt_real(f, r, true),
            Number::Complex(c) => {
                if c.re == 0.0 && c.re.is_sign_positive() {
                    return write!(f, "{}j", Component(c.im));
                }
                let sign = if c.im.is_sign_negative() { '-' } else { '+' };
                write!(f, "({}{sign}{}j)", Component(c.re), Component(c.im.abs()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(n: Number) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_integer_arithmetic_stays_exact() {
        assert!(matches!(Number::Integer(2) + Number::Integer(3), Number::Integer(5)));
        assert!(matches!(Number::Integer(2) * Number::Integer(3), Number::Integer(6)));
        assert!(matches!(Number::Integer(2) - Number::Integer(3), Number::Integer(-1)));
    }

    #[test]
    fn test_overflow_promotes_to_real() {
        let big = Number::Integer(i64::MAX) + Number::Integer(1);
        assert!(matches!(big, Number::Real(_)));
        assert!(matches!(-Number::Integer(i64::MIN), Number::Real(_)));
    }

    #[test]
    fn test_true_division() {
        assert_eq!(Number::Integer(2) / Number::Integer(4), Number::Real(0.5));
        assert_eq!(Number::Integer(1) / Number::Integer(0), Number::INFINITY);
    }

    #[test]
    fn test_cross_kind_equality_and_hash() {
        assert_eq!(Number::Integer(1), Number::Real(1.0));
        assert_eq!(Number::Real(1.0), Number::Complex(Complex64::new(1.0, 0.0)));
        assert_ne!(Number::Integer(1), Number::Real(1.5));
        assert_eq!(hash_of(Number::Integer(3)), hash_of(Number::Real(3.0)));
        assert_eq!(hash_of(Number::Real(0.0)), hash_of(Number::Real(-0.0)));
    }

    #[test]
    fn test_nan_is_reflexive() {
        let nan = Number::Real(f64::NAN);
        assert_eq!(nan, nan);
        assert_eq!(nan, Number::Real(-f64::NAN));
        assert_eq!(hash_of(nan), hash_of(Number::Real(-f64::NAN)));
        assert_ne!(nan, Number::Real(1.0));
        assert_ne!(nan, Number::Integer(0));
        assert_ne!(nan, Number::Complex(Complex64::new(f64::NAN, 1.0)));

        let keys: std::collections::HashSet<Number> = [nan].into_iter().collect();
        assert!(keys.contains(&Number::Real(f64::NAN)));
    }

    #[test]
    fn test_pow() {
        assert_eq!(Number::Integer(2).pow(Number::Integer(10)), Number::Integer(1024));
        assert_eq!(Number::Integer(2).pow(Number::Integer(-1)), Number::Real(0.5));
        assert_eq!(Number::Real(4.0).pow(Number::Real(0.5)), Number::Real(2.0));

        let root = Number::Real(-1.0).pow(Number::Real(0.5));
        let c = root.to_complex();
        assert!(c.re.abs() < 1e-12);
        assert!((c.im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exp() {
        assert_eq!(Number::Integer(0).exp(), Number::Real(1.0));
        let e_i_pi = Number::Complex(Complex64::new(0.0, std::f64::consts::PI)).exp();
        assert!((e_i_pi.to_complex() - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(Number::factorial(0), Number::Integer(1));
        assert_eq!(Number::factorial(5), Number::Integer(120));
        assert!(matches!(Number::factorial(25), Number::Real(_)));
        assert_eq!(Number::falling_product(3, 5), Number::Integer(60));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Integer(-3).to_string(), "-3");
        assert_eq!(Number::Real(1.0).to_string(), "1.0");
        assert_eq!(Number::Real(0.5).to_string(), "0.5");
        assert_eq!(Number::Real(1e20).to_string(), "1e+20");
        assert_eq!(Number::Real(1e-5).to_string(), "1e-05");
        assert_eq!(Number::INFINITY.to_string(), "inf");
        assert_eq!(Number::Complex(Complex64::new(1.0, 2.0)).to_string(), "(1+2j)");
        assert_eq!(Number::Complex(Complex64::new(1.5, -0.5)).to_string(), "(1.5-0.5j)");
        assert_eq!(Number::I.to_string(), "1j");
    }
}
