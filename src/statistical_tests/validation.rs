//! statistical_tests::validation — guards for test tuning parameters.
//!
//! Purpose
//! -------
//! Check the significance level shared by the t-test, F-test, and ANOVA
//! before any distribution lookup is attempted. Sample-shape checks live in
//! `regression::validation`; degrees-of-freedom checks are delegated to the
//! distribution constructors in `statistical_tests::distributions`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `alpha` must lie in the open interval (0, 1); NaN is rejected.

use crate::statistical_tests::errors::{TestError, TestResult};

/// Default significance level for the t-test, F-test, and ANOVA.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Validate a significance level.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha(alpha)` unless `0 < alpha < 1`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_lra::statistical_tests::validation::validate_alpha;
/// # use rust_lra::statistical_tests::errors::TestError;
/// assert!(validate_alpha(0.05).is_ok());
/// assert_eq!(validate_alpha(0.0), Err(TestError::InvalidAlpha(0.0)));
/// ```
pub fn validate_alpha(alpha: f64) -> TestResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(TestError::InvalidAlpha(alpha))
    }
}
