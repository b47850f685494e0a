//! Arithmetic operations on power series.
//!
//! Series combine with series or with scalars ([`Value`], [`Number`], `i64`,
//! `f64`, `Complex64`) on either side. Division by a series goes through the
//! inverse and is fallible; everything else always succeeds.

use std::ops::{Add, Div, Mul, Neg, Sub};

use gfun_core::{Number, Value};
use num_complex::Complex64;
use num_traits::Zero;
use tracing::debug;

use crate::error::{Result, SeriesError};
use crate::power_series::PowerSeries;
use crate::source::{
    self, Convolution, Difference, Inverse, Negation, Quotient, Scaled, Shift, Tail,
};

impl PowerSeries {
    /// Adds two power series.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_source(source::Sum {
            lhs: self.coeffs.clone(),
            rhs: other.coeffs.clone(),
        })
    }

    /// Subtracts two power series.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_source(Difference {
            lhs: self.coeffs.clone(),
            rhs: other.coeffs.clone(),
        })
    }

    /// Adds a scalar to the constant term.
    pub fn add_scalar(&self, c: impl Into<Value>) -> Self {
        Self::from_source(Shift {
            base: self.coeffs.clone(),
            constant: c.into(),
        })
    }

    /// Scales every coefficient by a constant.
    pub fn scale(&self, c: impl Into<Value>) -> Self {
        Self::from_source(Scaled {
            base: self.coeffs.clone(),
            factor: c.into(),
        })
    }

    /// Divides every coefficient by a constant.
    ///
    /// A zero divisor is not an error: the coefficients follow the value
    /// domain's division.
    pub fn div_scalar(&self, c: impl Into<Value>) -> Self {
        Self::from_source(Quotient {
            base: self.coeffs.clone(),
            divisor: c.into(),
        })
    }

    /// The series with its constant term replaced by an exact zero.
    ///
    /// Used for the `q` series of inverse, real power and exponential, whose
    /// constant term cancels only symbolically when built by subtraction.
    pub(crate) fn without_constant(&self) -> Self {
        Self::from_source(Tail(self.coeffs.clone()))
    }

    /// Multiplies two power series (Cauchy product).
    ///
    /// (f * g)_n = Σᵢ f_i * g_{n-i}
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_source(Convolution {
            lhs: self.coeffs.clone(),
            rhs: other.coeffs.clone(),
        })
    }

    /// Computes the multiplicative inverse.
    ///
    /// With `a = f_0` and `q = 1 - f/a`, so that `q_0 = 0`, the inverse is
    /// `(1/a) Σ q^i`, and only `i <= n` contributes to coefficient `n`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DivisionByZero`] if the constant term is
    /// numerically zero. A symbolic constant term is accepted.
    pub fn inverse(&self) -> Result<Self> {
        let constant = self.coeff(0);
        if constant.is_zero() {
            return Err(SeriesError::DivisionByZero {
                operation: "inverse",
            });
        }

        debug!(constant = %constant, "building series inverse");
        let q = (-&self.div_scalar(constant.clone())).without_constant();
        Ok(Self::from_source(Inverse { q, constant }))
    }

    /// Divides two power series: f / g = f * (1/g).
    ///
    /// # Errors
    ///
    /// Fails if `other` cannot be inverted.
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.inverse()?))
    }
}

impl Neg for &PowerSeries {
    type Output = PowerSeries;

    fn neg(self) -> PowerSeries {
        PowerSeries::from_source(Negation(self.coeffs.clone()))
    }
}

impl Neg for PowerSeries {
    type Output = PowerSeries;

    fn neg(self) -> PowerSeries {
        -&self
    }
}

macro_rules! series_binop {
    ($trait:ident, $method:ident, $output:ty) => {
        impl $trait<PowerSeries> for PowerSeries {
            type Output = $output;

            fn $method(self, rhs: PowerSeries) -> $output {
                PowerSeries::$method(&self, &rhs)
            }
        }

        impl $trait<&PowerSeries> for PowerSeries {
            type Output = $output;

            fn $method(self, rhs: &PowerSeries) -> $output {
                PowerSeries::$method(&self, rhs)
            }
        }

        impl $trait<PowerSeries> for &PowerSeries {
            type Output = $output;

            fn $method(self, rhs: PowerSeries) -> $output {
                PowerSeries::$method(self, &rhs)
            }
        }

        impl $trait<&PowerSeries> for &PowerSeries {
            type Output = $output;

            fn $method(self, rhs: &PowerSeries) -> $output {
                PowerSeries::$method(self, rhs)
            }
        }
    };
}

series_binop!(Add, add, PowerSeries);
series_binop!(Sub, sub, PowerSeries);
series_binop!(Mul, mul, PowerSeries);
series_binop!(Div, div, Result<PowerSeries>);

macro_rules! series_scalar_ops {
    ($($scalar:ty),*) => {$(
        impl Add<$scalar> for PowerSeries {
            type Output = PowerSeries;

            fn add(self, rhs: $scalar) -> PowerSeries {
                self.add_scalar(rhs)
            }
        }

        impl Add<$scalar> for &PowerSeries {
            type Output = PowerSeries;

            fn add(self, rhs: $scalar) -> PowerSeries {
                self.add_scalar(rhs)
            }
        }

        impl Add<PowerSeries> for $scalar {
            type Output = PowerSeries;

            fn add(self, rhs: PowerSeries) -> PowerSeries {
                rhs.add_scalar(self)
            }
        }

        impl Add<&PowerSeries> for $scalar {
            type Output = PowerSeries;

            fn add(self, rhs: &PowerSeries) -> PowerSeries {
                rhs.add_scalar(self)
            }
        }

        impl Sub<$scalar> for PowerSeries {
            type Output = PowerSeries;

            fn sub(self, rhs: $scalar) -> PowerSeries {
                self.add_scalar(-Value::from(rhs))
            }
        }

        impl Sub<$scalar> for &PowerSeries {
            type Output = PowerSeries;

            fn sub(self, rhs: $scalar) -> PowerSeries {
                self.add_scalar(-Value::from(rhs))
            }
        }

        impl Sub<PowerSeries> for $scalar {
            type Output = PowerSeries;

            fn sub(self, rhs: PowerSeries) -> PowerSeries {
                (-&rhs).add_scalar(self)
            }
        }

        impl Sub<&PowerSeries> for $scalar {
            type Output = PowerSeries;

            fn sub(self, rhs: &PowerSeries) -> PowerSeries {
                (-rhs).add_scalar(self)
            }
        }

        impl Mul<$scalar> for PowerSeries {
            type Output = PowerSeries;

            fn mul(self, rhs: $scalar) -> PowerSeries {
                self.scale(rhs)
            }
        }

        impl Mul<$scalar> for &PowerSeries {
            type Output = PowerSeries;

            fn mul(self, rhs: $scalar) -> PowerSeries {
                self.scale(rhs)
            }
        }

        impl Mul<PowerSeries> for $scalar {
            type Output = PowerSeries;

            fn mul(self, rhs: PowerSeries) -> PowerSeries {
                rhs.scale(self)
            }
        }

        impl Mul<&PowerSeries> for $scalar {
            type Output = PowerSeries;

            fn mul(self, rhs: &PowerSeries) -> PowerSeries {
                rhs.scale(self)
            }
        }

        impl Div<$scalar> for PowerSeries {
            type Output = PowerSeries;

            fn div(self, rhs: $scalar) -> PowerSeries {
                self.div_scalar(rhs)
            }
        }

        impl Div<$scalar> for &PowerSeries {
            type Output = PowerSeries;

            fn div(self, rhs: $scalar) -> PowerSeries {
                self.div_scalar(rhs)
            }
        }

        impl Div<PowerSeries> for $scalar {
            type Output = Result<PowerSeries>;

            fn div(self, rhs: PowerSeries) -> Result<PowerSeries> {
                Ok(rhs.inverse()?.scale(self))
            }
        }

        impl Div<&PowerSeries> for $scalar {
            type Output = Result<PowerSeries>;

            fn div(self, rhs: &PowerSeries) -> Result<PowerSeries> {
                Ok(rhs.inverse()?.scale(self))
            }
        }
    )*};
}

series_scalar_ops!(Value, &Value, Number, i64, f64, Complex64);
