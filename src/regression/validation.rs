//! regression::validation — shared input guards for the regression formulas.
//!
//! Purpose
//! -------
//! Centralize the checks every formula performs before touching the data:
//! non-empty input, equal predictor/response lengths, finiteness, and a
//! minimum sample size for degree-of-freedom dependent statistics.
//!
//! Invariants & assumptions
//! ------------------------
//! - All observations must be finite (`!NaN`, not ±∞).
//! - `x` and `y` must have the same length.
//! - Statistics that divide by `n − 2` require `n ≥ MIN_INFERENCE_LEN`.
//!
//! Conventions
//! -----------
//! - Guards are pure and report the first violated constraint as a
//!   [`RegressionError`]; they never panic.
//! - Significance-level checks live in `statistical_tests::validation`
//!   because they belong to the test procedures, not the formulas.

use crate::regression::errors::{RegressionError, RegressionResult};

/// Smallest sample for which n − 2 residual degrees of freedom are positive.
pub const MIN_INFERENCE_LEN: usize = 3;

/// Validate a single series: non-empty and all values finite.
///
/// Errors
/// ------
/// - `RegressionError::EmptySeries` when `data` is empty.
/// - `RegressionError::NonFiniteData { index, value }` for the first
///   NaN or ±∞ entry.
pub fn validate_series(data: &[f64]) -> RegressionResult<()> {
    if data.is_empty() {
        return Err(RegressionError::EmptySeries);
    }

    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(RegressionError::NonFiniteData { index, value });
        }
    }

    Ok(())
}

/// Validate a predictor/response pair.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Predictor observations.
/// - `y`: `&[f64]`
///   Response observations; must match `x` in length.
/// - `min_len`: `usize`
///   Minimum number of observations the caller needs. Use `1` for plain
///   sums and [`MIN_INFERENCE_LEN`] for anything depending on `n − 2`.
///
/// Errors
/// ------
/// - `RegressionError::LengthMismatch` when `x.len() != y.len()`.
/// - `RegressionError::EmptySeries` when both are empty.
/// - `RegressionError::InsufficientData` when `x.len() < min_len`.
/// - `RegressionError::NonFiniteData` from either series; indices refer
///   to the series in which the value was found.
pub fn validate_pair(x: &[f64], y: &[f64], min_len: usize) -> RegressionResult<()> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    validate_series(x)?;
    validate_series(y)?;

    if x.len() < min_len {
        return Err(RegressionError::InsufficientData { required: min_len, actual: x.len() });
    }

    Ok(())
}
