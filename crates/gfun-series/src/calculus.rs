//! Formal differentiation and integration.

use crate::power_series::PowerSeries;
use crate::source::{Derivative, Integral};

/// Computes the `order`-th formal derivative.
///
/// (f⁽ᵐ⁾)_k = (k+1)(k+2)...(k+m) f_{k+m}
///
/// An order of zero yields a series with the same coefficients.
#[must_use]
pub fn derivative(s: &PowerSeries, order: usize) -> PowerSeries {
    PowerSeries::from_source(Derivative {
        base: s.coeffs.clone(),
        order,
    })
}

/// Computes the formal antiderivative with zero constant term.
///
/// (∫f)_n = f_{n-1} / n
#[must_use]
pub fn integral(s: &PowerSeries) -> PowerSeries {
    PowerSeries::from_source(Integral(s.coeffs.clone()))
}

impl PowerSeries {
    /// Computes the first formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        derivative(self, 1)
    }

    /// Computes the formal antiderivative with zero constant term.
    #[must_use]
    pub fn integral(&self) -> Self {
        integral(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfun_core::Value;

    #[test]
    fn test_derivative() {
        // d/dx (13x² + 23x + 1) = 26x + 23
        let a = PowerSeries::from_coeffs([1, 23, 13]);
        let da = derivative(&a, 1);
        assert_eq!(da.coeffs(6), PowerSeries::from_coeffs([23, 26]).coeffs(6));
        assert_eq!(a.derivative().coeffs(6), da.coeffs(6));
    }

    #[test]
    fn test_second_derivative() {
        // d²/dx² (x³ + x²) = 6x + 2
        let a = PowerSeries::from_coeffs([0, 0, 1, 1]);
        assert_eq!(derivative(&a, 2).coeffs(4), PowerSeries::from_coeffs([2, 6]).coeffs(4));
    }

    #[test]
    fn test_zeroth_derivative_is_identity() {
        let a = PowerSeries::from_coeffs([4, 5, 6]);
        assert_eq!(derivative(&a, 0).coeffs(5), a.coeffs(5));
    }

    #[test]
    fn test_integral_of_derivative() {
        let a = PowerSeries::from_coeffs([1, 2, 3]);
        let b = 1 + integral(&derivative(&a, 1));
        assert_eq!(b.coeffs(10), a.coeffs(10));
    }

    #[test]
    fn test_derivative_of_symbolic_coefficients() {
        let t = Value::symbol("t");
        let a = PowerSeries::from_coeffs([Value::from(1), t.clone()]);
        assert_eq!(derivative(&a, 1).coeff(0), t);
    }
}
