//! regression::sums — leaf sums of squares S_xx, S_xy, and SST.
//!
//! Purpose
//! -------
//! Compute the corrected sums of squares and cross-products from which every
//! other least-squares quantity is derived. These are the only formulas that
//! read the raw observations directly; everything downstream consumes their
//! rounded outputs.
//!
//! Key behaviors
//! -------------
//! - [`sxx`]: S_xx = Σ(xᵢ − x̄)².
//! - [`sxy`]: S_xy = Σ yᵢ(xᵢ − x̄).
//! - [`sst`]: SST = Σ(yᵢ − ȳ)².
//! - Each result is rounded to `ndec` decimals via
//!   [`round_to`](crate::regression::rounding::round_to).
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated with `regression::validation` before use.
//! - S_xy multiplies the raw response by the centred predictor. This equals
//!   Σ(xᵢ − x̄)(yᵢ − ȳ) analytically but not in floating point.
//!
//! Testing notes
//! -------------
//! - Unit tests check the rocket-propellant reference values at two
//!   decimals and a hand-computable toy sample.

use crate::regression::{
    errors::RegressionResult,
    rounding::round_to,
    validation::{validate_pair, validate_series},
};
use ndarray::ArrayView1;

/// Corrected sum of squares of the predictor, S_xx = Σ(xᵢ − x̄)².
///
/// Errors
/// ------
/// - `EmptySeries` or `NonFiniteData` from input validation.
pub fn sxx(x: &[f64], ndec: i32) -> RegressionResult<f64> {
    validate_series(x)?;
    Ok(round_to(centred_sum_of_squares(x), ndec))
}

/// Corrected cross-product, S_xy = Σ yᵢ(xᵢ − x̄).
///
/// Errors
/// ------
/// - `LengthMismatch`, `EmptySeries`, or `NonFiniteData` from input
///   validation.
pub fn sxy(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    validate_pair(x, y, 1)?;
    let x = ArrayView1::from(x);
    let y = ArrayView1::from(y);
    let x_bar = mean(x);
    Ok(round_to(y.dot(&x.mapv(|x_i| x_i - x_bar)), ndec))
}

/// Total corrected sum of squares of the response, SST = Σ(yᵢ − ȳ)².
///
/// Errors
/// ------
/// - `EmptySeries` or `NonFiniteData` from input validation.
pub fn sst(y: &[f64], ndec: i32) -> RegressionResult<f64> {
    validate_series(y)?;
    Ok(round_to(centred_sum_of_squares(y), ndec))
}

/// Arithmetic mean of a validated, non-empty view.
#[inline]
pub(crate) fn mean(data: ArrayView1<'_, f64>) -> f64 {
    data.sum() / data.len() as f64
}

#[inline]
fn centred_sum_of_squares(data: &[f64]) -> f64 {
    let data = ArrayView1::from(data);
    let centre = mean(data);
    data.mapv(|v| (v - centre).powi(2)).sum()
}
