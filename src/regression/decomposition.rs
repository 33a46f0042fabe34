//! regression::decomposition — analysis-of-variance sums and mean squares.
//!
//! Purpose
//! -------
//! Split the total variation of the response into the part explained by the
//! fitted line and the residual part, and scale both by their degrees of
//! freedom.
//!
//! Key behaviors
//! -------------
//! - [`ssr`]: SSR = β̂₁·S_xy, with 1 degree of freedom.
//! - [`sse`]: SSE = SST − β̂₁·S_xy, with n − 2 degrees of freedom.
//! - [`msr`]: MSR = SSR (regression degrees of freedom are 1).
//! - [`mse`]: MSE = SSE / (n − 2).
//!
//! Invariants & assumptions
//! ------------------------
//! - SST ≈ SSR + SSE up to the compounded per-stage rounding error; the
//!   identity is exact only when no stage rounds.
//! - [`mse`] requires n ≥ 3 and returns
//!   `RegressionError::InsufficientData` otherwise.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the rocket-propellant reference values, the
//!   decomposition identity, and the degrees-of-freedom guard.

use crate::regression::{
    coefficients::beta1,
    errors::RegressionResult,
    rounding::round_to,
    sums::{sst, sxy},
    validation::{validate_pair, MIN_INFERENCE_LEN},
};

/// Regression sum of squares, SSR = β̂₁·S_xy.
pub fn ssr(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    let s_xy = sxy(x, y, ndec)?;
    let slope = beta1(x, y, ndec)?;
    Ok(round_to(slope * s_xy, ndec))
}

/// Residual sum of squares, SSE = SST − β̂₁·S_xy.
pub fn sse(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    let s_st = sst(y, ndec)?;
    let s_xy = sxy(x, y, ndec)?;
    let slope = beta1(x, y, ndec)?;
    Ok(round_to(s_st - slope * s_xy, ndec))
}

/// Mean square for regression. Identical to [`ssr`] since the regression
/// has one degree of freedom.
pub fn msr(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    ssr(x, y, ndec)
}

/// Mean square error, MSE = SSE / (n − 2).
///
/// Errors
/// ------
/// - `InsufficientData { required: 3, actual: n }` when n ≤ 2.
/// - Any error from [`sse`].
pub fn mse(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    validate_pair(x, y, MIN_INFERENCE_LEN)?;
    let residual_ss = sse(x, y, ndec)?;
    let residual_dof = (x.len() - 2) as f64;
    Ok(round_to(residual_ss / residual_dof, ndec))
}
