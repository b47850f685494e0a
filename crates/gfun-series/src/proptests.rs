//! Property-based tests for series arithmetic.

#[cfg(test)]
mod tests {
    use gfun_core::Value;
    use proptest::prelude::*;

    use crate::{derivative, integral, PowerSeries};

    const ORDER: usize = 8;

    fn small_int() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    fn polynomial() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(small_int(), 0..5)
    }

    fn unit_polynomial() -> impl Strategy<Value = Vec<i64>> {
        // Small coefficients keep every intermediate value exactly representable.
        (prop_oneof![Just(1i64), Just(-1i64)], prop::collection::vec(-5i64..5i64, 0..4))
            .prop_map(|(c, mut rest)| {
                rest.insert(0, c);
                rest
            })
    }

    fn series(coeffs: &[i64]) -> PowerSeries {
        PowerSeries::from_coeffs(coeffs.iter().copied())
    }

    fn close(a: &Value, b: &Value) -> bool {
        match (a.as_number().and_then(|n| n.to_f64()), b.as_number().and_then(|n| n.to_f64())) {
            (Some(x), Some(y)) => (x - y).abs() <= 1e-9 * (1.0 + x.abs().max(y.abs())),
            _ => a == b,
        }
    }

    proptest! {
        #[test]
        fn add_commutative(a in polynomial(), b in polynomial()) {
            let (a, b) = (series(&a), series(&b));
            prop_assert_eq!((&a + &b).coeffs(ORDER), (&b + &a).coeffs(ORDER));
        }

        #[test]
        fn mul_commutative(a in polynomial(), b in polynomial()) {
            let (a, b) = (series(&a), series(&b));
            prop_assert_eq!((&a * &b).coeffs(ORDER), (&b * &a).coeffs(ORDER));
        }

        #[test]
        fn mul_distributes_over_add(a in polynomial(), b in polynomial(), c in polynomial()) {
            let (a, b, c) = (series(&a), series(&b), series(&c));
            prop_assert_eq!(
                (&a * &(&b + &c)).coeffs(ORDER),
                (&(&a * &b) + &(&a * &c)).coeffs(ORDER)
            );
        }

        #[test]
        fn sub_then_add_is_identity(a in polynomial(), b in polynomial()) {
            let (a, b) = (series(&a), series(&b));
            prop_assert_eq!((&(&a - &b) + &b).coeffs(ORDER), a.coeffs(ORDER));
        }

        #[test]
        fn inverse_is_multiplicative_inverse(s in unit_polynomial()) {
            let s = series(&s);
            let product = &s * &s.inverse().unwrap();
            let one = PowerSeries::one();
            for n in 0..ORDER {
                prop_assert!(close(&product.coeff(n), &one.coeff(n)), "coefficient {}", n);
            }
        }

        #[test]
        fn integer_power_matches_repeated_product(s in polynomial(), k in 0u32..5) {
            let s = series(&s);
            let mut expected = PowerSeries::one();
            for _ in 0..k {
                expected = &expected * &s;
            }
            prop_assert_eq!(s.pow(k).coeffs(ORDER), expected.coeffs(ORDER));
        }

        #[test]
        fn derivative_undoes_integral(a in polynomial()) {
            let a = series(&a);
            let back = derivative(&integral(&a), 1);
            for n in 0..ORDER {
                prop_assert!(close(&back.coeff(n), &a.coeff(n)), "coefficient {}", n);
            }
        }
    }
}
