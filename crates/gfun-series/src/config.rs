//! Rendering and evaluation settings.

/// Configuration for rendering and evaluating power series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Maximum number of non-zero terms shown when rendering.
    pub display_terms: usize,
    /// Number of leading indices scanned for non-zero terms when rendering.
    pub display_scan_limit: usize,
    /// Number of terms in the partial sum used by evaluation.
    pub eval_precision: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            display_terms: 6,
            display_scan_limit: 100,
            eval_precision: 30,
        }
    }
}
