//! Lazy, memoized formal power series.
//!
//! A [`PowerSeries`] wraps a coefficient source `n -> Value`. Coefficients are
//! computed on first request and cached forever; the series is conceptually
//! infinite and only realized at the indices actually queried.
//!
//! Every series also carries a cache of its integer powers, so repeated
//! requests for `s^k` reuse the same [`PowerSeries`] object.

use std::fmt;
use std::sync::Arc;

use gfun_core::Value;
use num_traits::{One, Zero};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::config::SeriesConfig;
use crate::source::Polynomial;
use crate::transcendental;

/// A rule producing the coefficient at a given index.
///
/// Implementations must be pure: the same index always yields the same value.
/// A source may query other series at any index, and its own operands at
/// indices up to `n`, but never the series it defines.
pub trait CoefficientSource: Send + Sync {
    /// Computes the coefficient at index `n`.
    fn coefficient(&self, n: usize) -> Value;
}

impl<F> CoefficientSource for F
where
    F: Fn(usize) -> Value + Send + Sync,
{
    fn coefficient(&self, n: usize) -> Value {
        self(n)
    }
}

struct SeriesCore {
    source: Box<dyn CoefficientSource>,
    memo: RwLock<FxHashMap<usize, Value>>,
}

/// Shared, memoized coefficient storage.
///
/// Derived sources hold operands through this handle rather than through a
/// full [`PowerSeries`], so cached powers never keep their base's power cache
/// alive.
#[derive(Clone)]
pub(crate) struct Coefficients(Arc<SeriesCore>);

impl Coefficients {
    fn new(source: impl CoefficientSource + 'static) -> Self {
        Self(Arc::new(SeriesCore {
            source: Box::new(source),
            memo: RwLock::new(FxHashMap::default()),
        }))
    }

    /// Returns the coefficient at `n`, computing it on a miss.
    ///
    /// No lock is held while the source runs. Concurrent misses on the same
    /// index may compute twice; the first stored value wins.
    pub(crate) fn get(&self, n: usize) -> Value {
        if let Some(v) = self.0.memo.read().get(&n) {
            return v.clone();
        }

        trace!(index = n, "coefficient memo miss");
        let computed = self.0.source.coefficient(n);
        self.0.memo.write().entry(n).or_insert(computed).clone()
    }

    fn memoized(&self) -> usize {
        self.0.memo.read().len()
    }
}

/// A formal power series with lazily computed coefficients.
///
/// Cloning is cheap and yields a handle to the same series: clones share the
/// coefficient memo and the power cache.
#[derive(Clone)]
pub struct PowerSeries {
    pub(crate) coeffs: Coefficients,
    pub(crate) powers: Arc<RwLock<FxHashMap<u32, PowerSeries>>>,
}

impl PowerSeries {
    /// Creates a series from a coefficient function.
    ///
    /// # Example
    ///
    /// ```
    /// use gfun_core::Value;
    /// use gfun_series::PowerSeries;
    ///
    /// let naturals = PowerSeries::new(|n| Value::from(n));
    /// assert_eq!(naturals.coeff(3), Value::from(3));
    /// ```
    pub fn new(f: impl Fn(usize) -> Value + Send + Sync + 'static) -> Self {
        Self::from_source(f)
    }

    /// Creates a series from an arbitrary coefficient source.
    pub fn from_source(source: impl CoefficientSource + 'static) -> Self {
        Self {
            coeffs: Coefficients::new(source),
            powers: Arc::new(RwLock::new(FxHashMap::default())),
        }
    }

    /// Creates a polynomial with the given coefficients, zero beyond them.
    pub fn from_coeffs(coeffs: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self::from_source(Polynomial(coeffs.into_iter().map(Into::into).collect()))
    }

    /// Creates the constant series `c`.
    pub fn constant(c: impl Into<Value>) -> Self {
        Self::from_coeffs([c.into()])
    }

    /// The series `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// The series `x`.
    #[must_use]
    pub fn x() -> Self {
        Self::from_coeffs([0, 1])
    }

    /// The constant series `e`, built as `exp(1)`.
    #[must_use]
    pub fn e() -> Self {
        transcendental::exp(&Self::one())
    }

    /// Returns the coefficient of `x^n`.
    #[must_use]
    pub fn coeff(&self, n: usize) -> Value {
        self.coeffs.get(n)
    }

    /// Returns the first `n` coefficients.
    #[must_use]
    pub fn coeffs(&self, n: usize) -> Vec<Value> {
        (0..n).map(|i| self.coeff(i)).collect()
    }

    /// Returns true if both handles refer to the same series.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.coeffs.0, &other.coeffs.0)
    }

    /// Evaluates the partial sum `Σ_{i<30} c_i * x^i`.
    pub fn evaluate(&self, x: impl Into<Value>) -> Value {
        self.evaluate_with(x, &SeriesConfig::default())
    }

    /// Evaluates the partial sum with `config.eval_precision` terms.
    pub fn evaluate_with(&self, x: impl Into<Value>, config: &SeriesConfig) -> Value {
        let x = x.into();
        let mut power = Value::one();
        let mut acc = Value::zero();
        for i in 0..config.eval_precision {
            acc = acc + self.coeff(i) * &power;
            power = power * &x;
        }
        acc
    }

    /// Renders the leading non-zero terms, e.g. `<1 + 2x + 3x² + ...>`.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&SeriesConfig::default())
    }

    /// Renders with the term and scan limits of `config`.
    #[must_use]
    pub fn render_with(&self, config: &SeriesConfig) -> String {
        let mut terms = Vec::with_capacity(config.display_terms);
        let mut i = 0;
        while terms.len() < config.display_terms && i < config.display_scan_limit {
            let c = self.coeff(i);
            if !c.is_zero() {
                terms.push(render_term(&c, i));
            }
            i += 1;
        }
        format!("<{} + ...>", terms.join(" + ").replace(" + -", " - "))
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn superscript(n: usize) -> String {
    n.to_string()
        .chars()
        .filter_map(|d| d.to_digit(10))
        .map(|d| SUPERSCRIPT_DIGITS[d as usize])
        .collect()
}

fn render_term(c: &Value, i: usize) -> String {
    if i == 0 {
        return c.to_string();
    }
    let coef = if c.is_one() { String::new() } else { c.to_string() };
    let exponent = if i == 1 { String::new() } else { superscript(i) };
    format!("{coef}x{exponent}")
}

impl fmt::Display for PowerSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for PowerSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerSeries")
            .field("memoized", &self.coeffs.memoized())
            .field("cached_powers", &self.powers.read().len())
            .finish()
    }
}
