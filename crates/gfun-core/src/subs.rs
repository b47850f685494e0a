//! Substitution of symbols and subexpressions.

use rustc_hash::FxHashMap;

use crate::expr::Expr;
use crate::value::Value;

/// A mapping from targets to replacements.
///
/// Keys may be symbols or any compound expression; numbers are never
/// substituted.
pub type Substitution = FxHashMap<Value, Value>;

/// Builds a [`Substitution`] from `(target, replacement)` pairs.
pub fn substitution<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Substitution
where
    K: Into<Value>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl Expr {
    /// Replaces matching subtrees by their images under `mapping`.
    ///
    /// The tree is rebuilt bottom-up; every rebuilt node, including the
    /// root, is looked up in `mapping` before any simplification. When
    /// `simplify` is set the result is simplified.
    #[must_use]
    pub fn subs(&self, mapping: &Substitution, simplify: bool) -> Value {
        let replaced = replace(self, mapping);
        if simplify {
            replaced.simplify()
        } else {
            replaced
        }
    }
}

impl Value {
    /// Substitutes into an expression value. Numbers are returned unchanged.
    #[must_use]
    pub fn subs(&self, mapping: &Substitution, simplify: bool) -> Value {
        match self {
            Value::Number(_) => self.clone(),
            Value::Expr(e) => e.subs(mapping, simplify),
        }
    }
}

fn replace_value(value: &Value, mapping: &Substitution) -> Value {
    match value {
        Value::Number(_) => value.clone(),
        Value::Expr(e) => replace(e, mapping),
    }
}

fn replace(expr: &Expr, mapping: &Substitution) -> Value {
    let rebuilt = match expr {
        Expr::Symbol(_) => Value::Expr(expr.clone()),
        Expr::Sum(terms) => Value::Expr(Expr::sum(
            terms.iter().map(|t| replace_value(t, mapping)),
        )),
        Expr::Product(terms) => Value::Expr(Expr::product(
            terms.iter().map(|t| replace_value(t, mapping)),
        )),
        Expr::Power { base, exponent } => Value::Expr(Expr::power(
            replace_value(base, mapping),
            replace_value(exponent, mapping),
        )),
        Expr::Fraction {
            numerator,
            denominator,
        } => Value::Expr(Expr::fraction(
            replace_value(numerator, mapping),
            replace_value(denominator, mapping),
        )),
    };

    match mapping.get(&rebuilt) {
        Some(image) => image.clone(),
        None => rebuilt,
    }
}
