//! Integer and real powers of power series.

use gfun_core::{Number, Value};
use num_traits::Zero;
use tracing::{debug, trace};

use crate::error::{Result, SeriesError};
use crate::power_series::PowerSeries;
use crate::source::FractionalPower;

impl PowerSeries {
    /// Raises to a non-negative integer power.
    ///
    /// Powers are built by repeated squaring over the halving chain
    /// `k, k/2, k/4, ...`, and every exponent on the chain is cached on this
    /// series. Asking for the same exponent again returns the cached series.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if let Some(cached) = self.cached_power(exp) {
            return cached;
        }

        let mut chain = Vec::new();
        let mut e = exp;
        let mut acc = loop {
            if let Some(cached) = self.cached_power(e) {
                break cached;
            }
            if e == 0 {
                break self.store_power(0, Self::one());
            }
            chain.push(e);
            e /= 2;
        };

        debug!(exponent = exp, squarings = chain.len(), "building integer power chain");
        for &e in chain.iter().rev() {
            let square = Self::mul(&acc, &acc);
            let next = if e % 2 == 0 {
                square
            } else {
                Self::mul(&square, self)
            };
            acc = self.store_power(e, next);
        }
        acc
    }

    fn cached_power(&self, exp: u32) -> Option<Self> {
        let cached = self.powers.read().get(&exp).cloned();
        if cached.is_some() {
            trace!(exponent = exp, "power cache hit");
        }
        cached
    }

    fn store_power(&self, exp: u32, series: Self) -> Self {
        self.powers.write().entry(exp).or_insert(series).clone()
    }

    /// Raises to a real power using the generalized binomial series.
    ///
    /// With `a = f_0` and `q = f/a - 1`, the result is
    /// `a^p Σ_j C(p, j) q^j`. A negative real `a` with non-integral `p` gives
    /// complex coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DivisionByZero`] if the constant term is
    /// numerically zero.
    pub fn powf(&self, exp: f64) -> Result<Self> {
        let constant = self.coeff(0);
        if constant.is_zero() {
            return Err(SeriesError::DivisionByZero {
                operation: "fractional power",
            });
        }

        debug!(exponent = exp, constant = %constant, "building fractional power");
        let leading = constant.pow(&Value::from(exp));
        let q = self.div_scalar(constant).without_constant();
        Ok(Self::from_source(FractionalPower {
            q,
            leading,
            exponent: exp,
        }))
    }

    /// Raises to a power given as a [`Value`].
    ///
    /// Non-negative integers use [`PowerSeries::pow`], reals use
    /// [`PowerSeries::powf`].
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::UnsupportedExponent`] for negative integers,
    /// complex numbers and symbolic exponents, and
    /// [`SeriesError::ExponentOutOfRange`] for integers above `u32::MAX`.
    /// Propagates the errors of [`PowerSeries::powf`].
    pub fn pow_value(&self, exp: &Value) -> Result<Self> {
        match exp {
            Value::Number(Number::Integer(k)) if *k < 0 => {
                Err(SeriesError::UnsupportedExponent(k.to_string()))
            }
            Value::Number(Number::Integer(k)) => u32::try_from(*k)
                .map(|k| self.pow(k))
                .map_err(|_| SeriesError::ExponentOutOfRange(*k)),
            Value::Number(Number::Real(r)) => self.powf(*r),
            other => Err(SeriesError::UnsupportedExponent(other.to_string())),
        }
    }
}
