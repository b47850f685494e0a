//! Exponential and trigonometric functions of power series.

use gfun_core::Value;
use num_complex::Complex64;
use tracing::debug;

use crate::power_series::PowerSeries;
use crate::source::Exponential;

/// Computes `exp(s)`.
///
/// With `a = s_0` and `q = s - a`, the result is `e^a Σ_i q^i / i!`; only
/// `i <= n` contributes to coefficient `n`. A symbolic constant term `a`
/// contributes the factor `e^a` as an expression.
#[must_use]
pub fn exp(s: &PowerSeries) -> PowerSeries {
    let constant = s.coeff(0);
    debug!(constant = %constant, "building series exponential");
    let q = s.without_constant();
    PowerSeries::from_source(Exponential {
        q,
        scale: constant.exp(),
    })
}

/// Computes `cos(s) = (exp(is) + exp(-is)) / 2`.
#[must_use]
pub fn cos(s: &PowerSeries) -> PowerSeries {
    let (pos, neg) = euler_pair(s);
    (pos + neg) / 2
}

/// Computes `sin(s) = (exp(is) - exp(-is)) / 2i`.
#[must_use]
pub fn sin(s: &PowerSeries) -> PowerSeries {
    let (pos, neg) = euler_pair(s);
    (pos - neg) / Complex64::new(0.0, 2.0)
}

fn euler_pair(s: &PowerSeries) -> (PowerSeries, PowerSeries) {
    let i = Value::from(Complex64::new(0.0, 1.0));
    (exp(&(&i * s)), exp(&(-&i * s)))
}

impl PowerSeries {
    /// Computes `exp(self)`.
    #[must_use]
    pub fn exp(&self) -> Self {
        exp(self)
    }

    /// Computes `sin(self)`.
    #[must_use]
    pub fn sin(&self) -> Self {
        sin(self)
    }

    /// Computes `cos(self)`.
    #[must_use]
    pub fn cos(&self) -> Self {
        cos(self)
    }
}
