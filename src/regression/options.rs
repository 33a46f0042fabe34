//! regression::options — run configuration for the regression pipeline.
//!
//! Purpose
//! -------
//! Bundle the knobs shared by every stage of an analysis (rounding
//! precision, significance level, verbosity) so that the [`Sample`]
//! methods take one explicit options value instead of loose arguments.
//!
//! Invariants & assumptions
//! ------------------------
//! - `alpha` lies strictly inside (0, 1); this is checked once by
//!   [`RegressionOptions::new`].
//! - `ndec` is any `i32`; negative values round to the left of the decimal
//!   point.
//! - `verbose` only has an effect when the crate is built with the
//!   `obs_slog` feature.
//!
//! [`Sample`]: crate::regression::data::Sample

use crate::regression::rounding::DEFAULT_NDEC;
use crate::statistical_tests::{
    errors::TestResult,
    validation::{validate_alpha, DEFAULT_ALPHA},
};

/// RegressionOptions — precision, significance level, and verbosity.
///
/// Fields
/// ------
/// - `ndec`: `i32`
///   Decimal digits applied after every stage. Defaults to [`DEFAULT_NDEC`].
/// - `alpha`: `f64`
///   Significance level for the t-test, F-test, and ANOVA. Defaults to
///   [`DEFAULT_ALPHA`].
/// - `verbose`: `bool`
///   When `true` and the `obs_slog` feature is enabled, test outcomes are
///   logged as structured records. Defaults to `false`.
///
/// Notes
/// -----
/// - Fields are public for ergonomic struct-update syntax; prefer
///   [`RegressionOptions::new`] when `alpha` comes from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionOptions {
    pub ndec: i32,
    pub alpha: f64,
    pub verbose: bool,
}

impl RegressionOptions {
    /// Build validated options.
    ///
    /// Errors
    /// ------
    /// - `TestError::InvalidAlpha(alpha)` unless 0 < `alpha` < 1.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_lra::regression::options::RegressionOptions;
    ///
    /// let opts = RegressionOptions::new(2, 0.01, false).unwrap();
    /// assert_eq!(opts.ndec, 2);
    /// assert!(RegressionOptions::new(4, 1.5, false).is_err());
    /// ```
    pub fn new(ndec: i32, alpha: f64, verbose: bool) -> TestResult<Self> {
        validate_alpha(alpha)?;
        Ok(RegressionOptions { ndec, alpha, verbose })
    }
}

impl Default for RegressionOptions {
    fn default() -> Self {
        RegressionOptions { ndec: DEFAULT_NDEC, alpha: DEFAULT_ALPHA, verbose: false }
    }
}
