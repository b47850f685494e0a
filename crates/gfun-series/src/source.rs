//! Coefficient sources for derived series.
//!
//! Each operator on [`PowerSeries`] is backed by one of these sources. Every
//! recurrence is well founded: a source reads its operands at indices up to
//! `n`, or other already defined series at `n`, never the series it defines.

use gfun_core::{Number, Value};
use num_traits::{One, Zero};

use crate::power_series::{CoefficientSource, Coefficients, PowerSeries};

/// Exponents `0..=n`, clamped to the range of the power cache.
fn exponents(n: usize) -> impl Iterator<Item = u32> {
    0..=u32::try_from(n).unwrap_or(u32::MAX)
}

/// Finitely many coefficients, zero beyond them.
pub(crate) struct Polynomial(pub(crate) Vec<Value>);

impl CoefficientSource for Polynomial {
    fn coefficient(&self, n: usize) -> Value {
        self.0.get(n).cloned().unwrap_or_default()
    }
}

/// `a + b`, pointwise.
pub(crate) struct Sum {
    pub(crate) lhs: Coefficients,
    pub(crate) rhs: Coefficients,
}

impl CoefficientSource for Sum {
    fn coefficient(&self, n: usize) -> Value {
        self.lhs.get(n) + self.rhs.get(n)
    }
}

/// `a - b`, pointwise.
pub(crate) struct Difference {
    pub(crate) lhs: Coefficients,
    pub(crate) rhs: Coefficients,
}

impl CoefficientSource for Difference {
    fn coefficient(&self, n: usize) -> Value {
        self.lhs.get(n) - self.rhs.get(n)
    }
}

/// `-a`.
pub(crate) struct Negation(pub(crate) Coefficients);

impl CoefficientSource for Negation {
    fn coefficient(&self, n: usize) -> Value {
        -self.0.get(n)
    }
}

/// `a + c` for a scalar `c`: only the constant term moves.
pub(crate) struct Shift {
    pub(crate) base: Coefficients,
    pub(crate) constant: Value,
}

impl CoefficientSource for Shift {
    fn coefficient(&self, n: usize) -> Value {
        if n == 0 {
            self.base.get(0) + &self.constant
        } else {
            self.base.get(n)
        }
    }
}

/// `a - a_0`: the constant term is exactly zero, whatever `a_0` is.
pub(crate) struct Tail(pub(crate) Coefficients);

impl CoefficientSource for Tail {
    fn coefficient(&self, n: usize) -> Value {
        if n == 0 {
            Value::zero()
        } else {
            self.0.get(n)
        }
    }
}

/// `a * c` for a scalar `c`.
pub(crate) struct Scaled {
    pub(crate) base: Coefficients,
    pub(crate) factor: Value,
}

impl CoefficientSource for Scaled {
    fn coefficient(&self, n: usize) -> Value {
        self.base.get(n) * &self.factor
    }
}

/// `a / c` for a scalar `c`.
pub(crate) struct Quotient {
    pub(crate) base: Coefficients,
    pub(crate) divisor: Value,
}

impl CoefficientSource for Quotient {
    fn coefficient(&self, n: usize) -> Value {
        self.base.get(n) / &self.divisor
    }
}

/// Cauchy product: `c_n = Σ_{j=0}^{n} a_j b_{n-j}`.
pub(crate) struct Convolution {
    pub(crate) lhs: Coefficients,
    pub(crate) rhs: Coefficients,
}

impl CoefficientSource for Convolution {
    fn coefficient(&self, n: usize) -> Value {
        let mut acc = Value::zero();
        for j in 0..=n {
            acc = acc + self.lhs.get(j) * self.rhs.get(n - j);
        }
        acc
    }
}

/// Multiplicative inverse of `s = a (1 - q)` with `q_0 = 0`:
/// `c_n = (1/a) Σ_{i=0}^{n} (q^i)_n`.
pub(crate) struct Inverse {
    pub(crate) q: PowerSeries,
    pub(crate) constant: Value,
}

impl CoefficientSource for Inverse {
    fn coefficient(&self, n: usize) -> Value {
        let mut acc = Value::zero();
        for i in exponents(n) {
            acc = acc + self.q.pow(i).coeff(n);
        }
        acc / &self.constant
    }
}

/// Real power of `s = a (1 + q)` with `q_0 = 0`:
/// `c_n = a^p Σ_{j=0}^{n} C(p, j) (q^j)_n`.
pub(crate) struct FractionalPower {
    pub(crate) q: PowerSeries,
    pub(crate) leading: Value,
    pub(crate) exponent: f64,
}

impl CoefficientSource for FractionalPower {
    fn coefficient(&self, n: usize) -> Value {
        let mut binomial = Number::ONE;
        let mut acc = Value::zero();
        for j in exponents(n) {
            acc = acc + binomial * self.q.pow(j).coeff(n);
            let k = f64::from(j);
            binomial = binomial * Number::Real(self.exponent - k) / Number::Real(k + 1.0);
        }
        acc * &self.leading
    }
}

/// `d^order/dx^order`: `c_k = (k+1)(k+2)...(k+order) a_{k+order}`.
pub(crate) struct Derivative {
    pub(crate) base: Coefficients,
    pub(crate) order: usize,
}

impl CoefficientSource for Derivative {
    fn coefficient(&self, n: usize) -> Value {
        // Indices past usize::MAX are never populated.
        let Some(top) = n.checked_add(self.order) else {
            return Value::zero();
        };
        let c = self.base.get(top);
        if self.order == 0 || c.is_zero() {
            return c;
        }
        Number::falling_product(n + 1, top) * c
    }
}

/// Formal antiderivative with zero constant term.
pub(crate) struct Integral(pub(crate) Coefficients);

impl CoefficientSource for Integral {
    fn coefficient(&self, n: usize) -> Value {
        if n == 0 {
            Value::zero()
        } else {
            self.0.get(n - 1) / Number::from(n)
        }
    }
}

/// `exp(a + q)` with `q_0 = 0`: `c_n = e^a Σ_{i=0}^{n} (q^i)_n / i!`.
pub(crate) struct Exponential {
    pub(crate) q: PowerSeries,
    pub(crate) scale: Value,
}

impl CoefficientSource for Exponential {
    fn coefficient(&self, n: usize) -> Value {
        let mut factorial = Number::ONE;
        let mut acc = Value::zero();
        for i in exponents(n) {
            if i > 0 {
                factorial = factorial * Number::from(i);
            }
            acc = acc + self.q.pow(i).coeff(n) / factorial;
        }
        if self.scale.is_one() {
            acc
        } else {
            acc * &self.scale
        }
    }
}
