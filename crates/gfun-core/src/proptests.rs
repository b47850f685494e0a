//! Property-based tests for simplification and substitution.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{substitution, Expr, Number, Value};

    fn small_int() -> impl Strategy<Value = i64> {
        -50i64..50i64
    }

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            (-5i64..5i64).prop_map(Value::from),
            prop_oneof![Just("x"), Just("y"), Just("z")].prop_map(Value::symbol),
        ]
    }

    // Denominators are nonzero integers or symbols and exponents are small
    // naturals or symbols, so numeric evaluation never produces NaN.
    fn denominator() -> impl Strategy<Value = Value> {
        prop_oneof![
            prop_oneof![(-9i64..=-1i64), (1i64..=9i64)].prop_map(Value::from),
            Just(Value::symbol("x")),
        ]
    }

    fn exponent() -> impl Strategy<Value = Value> {
        prop_oneof![(0i64..3i64).prop_map(Value::from), Just(Value::symbol("y"))]
    }

    fn value() -> impl Strategy<Value = Value> {
        leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4)
                    .prop_map(|terms| Value::Expr(Expr::sum(terms))),
                prop::collection::vec(inner.clone(), 0..4)
                    .prop_map(|terms| Value::Expr(Expr::product(terms))),
                (inner.clone(), exponent())
                    .prop_map(|(b, e)| Value::Expr(Expr::power(b, e))),
                (inner, denominator())
                    .prop_map(|(n, d)| Value::Expr(Expr::fraction(n, d))),
            ]
        })
    }

    fn has_nested(v: &Value) -> bool {
        let Some(e) = v.as_expr() else {
            return false;
        };
        let nested = match e {
            Expr::Sum(terms) => terms
                .iter()
                .any(|t| matches!(t, Value::Expr(Expr::Sum(_)))),
            Expr::Product(terms) => terms
                .iter()
                .any(|t| matches!(t, Value::Expr(Expr::Product(_)))),
            _ => false,
        };
        nested || e.children().into_iter().any(has_nested)
    }

    proptest! {
        #[test]
        fn simplify_is_idempotent(v in value()) {
            let once = v.simplify();
            prop_assert_eq!(once.simplify(), once);
        }

        #[test]
        fn simplified_trees_are_flat(v in value()) {
            prop_assert!(!has_nested(&v.simplify()));
        }

        #[test]
        fn equal_trees_hash_equal(v in value()) {
            let m = substitution([(v.clone(), Value::from(1))]);
            prop_assert_eq!(m.get(&v.clone()), Some(&Value::from(1)));
        }

        #[test]
        fn integer_sums_fold(a in small_int(), b in small_int(), c in small_int()) {
            let s = Expr::sum([a, b, c]).simplify();
            prop_assert_eq!(s, Value::from(a + b + c));
        }

        #[test]
        fn integer_products_fold(a in small_int(), b in small_int()) {
            let p = Expr::product([a, b]).simplify();
            prop_assert_eq!(p, Value::from(a * b));
        }

        #[test]
        fn number_add_commutative(a in small_int(), b in -1.0e3f64..1.0e3f64) {
            let (a, b) = (Number::from(a), Number::from(b));
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn number_mul_commutative(a in small_int(), b in small_int()) {
            let (a, b) = (Number::from(a), Number::from(b));
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn substituting_every_symbol_gives_a_number(
            v in value(),
            x in 1i64..5,
            y in 0i64..3,
            z in small_int(),
        ) {
            let m = substitution([("x", x), ("y", y), ("z", z)].map(|(s, n)| (Value::symbol(s), n)));
            prop_assert!(v.subs(&m, true).is_number());
        }
    }
}
