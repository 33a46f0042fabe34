//! regression::coefficients — OLS slope, intercept, and fitted values.
//!
//! Purpose
//! -------
//! Estimate the least-squares line ŷ = β̂₀ + β̂₁·x from the rounded leaf
//! sums and evaluate it at the observed predictor values.
//!
//! Key behaviors
//! -------------
//! - [`beta1`]: β̂₁ = S_xy / S_xx.
//! - [`beta0`]: β̂₀ = ȳ − β̂₁·x̄, using the rounded slope.
//! - [`predicted`]: ŷᵢ = β̂₀ + β̂₁·xᵢ for every observation, with β̂₀ held
//!   at [`DEFAULT_NDEC`] decimals.
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficients are recomputed on every call; nothing is cached.
//! - A predictor whose S_xx rounds to zero has no identifiable slope and is
//!   reported as `RegressionError::DegenerateDenominator { quantity: "S_xx" }`.

use crate::regression::{
    errors::{RegressionError, RegressionResult},
    rounding::{round_to, DEFAULT_NDEC},
    sums::{mean, sxx, sxy},
    validation::validate_pair,
};
use ndarray::{Array1, ArrayView1};

/// Least-squares slope β̂₁ = S_xy / S_xx, rounded to `ndec` decimals.
///
/// Errors
/// ------
/// - Validation errors for malformed `x`/`y`.
/// - `DegenerateDenominator { quantity: "S_xx" }` when the predictor has no
///   spread at the requested precision.
pub fn beta1(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    let s_xy = sxy(x, y, ndec)?;
    let s_xx = sxx(x, ndec)?;
    if s_xx == 0.0 {
        return Err(RegressionError::DegenerateDenominator { quantity: "S_xx" });
    }
    Ok(round_to(s_xy / s_xx, ndec))
}

/// Least-squares intercept β̂₀ = ȳ − β̂₁·x̄, rounded to `ndec` decimals.
pub fn beta0(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    let slope = beta1(x, y, ndec)?;
    let x_bar = mean(ArrayView1::from(x));
    let y_bar = mean(ArrayView1::from(y));
    Ok(round_to(y_bar - slope * x_bar, ndec))
}

/// Fitted values ŷᵢ = β̂₀ + β̂₁·xᵢ, each rounded to `ndec` decimals.
///
/// The slope and the fitted values use `ndec`; the intercept is always
/// taken at [`DEFAULT_NDEC`] decimals, so coarse `ndec` values do not shift
/// the whole line by the intercept's rounding error. The returned array has
/// one entry per observation, in input order.
pub fn predicted(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<Array1<f64>> {
    validate_pair(x, y, 1)?;
    let intercept = beta0(x, y, DEFAULT_NDEC)?;
    let slope = beta1(x, y, ndec)?;
    Ok(ArrayView1::from(x).mapv(|x_i| round_to(intercept + slope * x_i, ndec)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::fixtures::{AGE, STRENGTH};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reference slope and intercept on the rocket-propellant sample.
    // - Componentwise agreement of `predicted` with β̂₀ + β̂₁·xᵢ.
    // - The degenerate-predictor error path.
    // - Convergence of the coefficients toward an exact line as `ndec` grows.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Reproduce the reference coefficients on the rocket-propellant data.
    //
    // Given
    // -----
    // - age as x and strength as y.
    //
    // Expect
    // ------
    // - β̂₁ = −37.15 at ndec = 2.
    // - β̂₀ = 2627.8225 at ndec = 4 (2627.82 to two decimals), and
    //   2627.77 at ndec = 2 because the slope is rounded first.
    fn rocket_coefficients_match_reference() {
        // Act
        let slope = beta1(&AGE, &STRENGTH, 2).unwrap();
        let intercept_default = beta0(&AGE, &STRENGTH, 4).unwrap();
        let intercept_two = beta0(&AGE, &STRENGTH, 2).unwrap();

        // Assert
        assert_relative_eq!(slope, -37.15, epsilon = 1e-12);
        assert_relative_eq!(intercept_default, 2627.8225, epsilon = 1e-9);
        assert_relative_eq!(round_to(intercept_default, 2), 2627.82, epsilon = 1e-9);
        assert_relative_eq!(intercept_two, 2627.77, epsilon = 1e-9);
    }

    #[test]
    // Purpose
    // -------
    // Verify that fitted values equal β̂₀ + β̂₁·xᵢ componentwise, with the
    // intercept at the default precision.
    //
    // Given
    // -----
    // - The rocket-propellant data at ndec = 2.
    //
    // Expect
    // ------
    // - Each ŷᵢ matches round(β̂₀(ndec = 4) + β̂₁(ndec = 2)·xᵢ, 2) exactly.
    // - Each ŷᵢ agrees with the textbook line 2627.82 − 37.15·xᵢ to a
    //   relative tolerance of 1e-5.
    fn predicted_matches_direct_recomputation() {
        // Arrange
        let intercept = beta0(&AGE, &STRENGTH, DEFAULT_NDEC).unwrap();
        let slope = beta1(&AGE, &STRENGTH, 2).unwrap();

        // Act
        let y_hat = predicted(&AGE, &STRENGTH, 2).unwrap();

        // Assert
        assert_eq!(y_hat.len(), AGE.len());
        for (&x_i, &y_hat_i) in AGE.iter().zip(y_hat.iter()) {
            assert_eq!(y_hat_i, round_to(intercept + slope * x_i, 2));
            assert_relative_eq!(y_hat_i, 2627.82 - 37.15 * x_i, max_relative = 1e-5);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a constant predictor fails fast instead of returning ±∞.
    //
    // Given
    // -----
    // - x = [2, 2, 2], arbitrary y.
    //
    // Expect
    // ------
    // - `DegenerateDenominator { quantity: "S_xx" }` from every coefficient
    //   function.
    fn constant_predictor_is_degenerate() {
        // Arrange
        let x = [2.0, 2.0, 2.0];
        let y = [1.0, 3.0, 5.0];
        let expected = RegressionError::DegenerateDenominator { quantity: "S_xx" };

        // Act / Assert
        assert_eq!(beta1(&x, &y, 4), Err(expected.clone()));
        assert_eq!(beta0(&x, &y, 4), Err(expected.clone()));
        assert_eq!(predicted(&x, &y, 4).unwrap_err(), expected);
    }

    #[test]
    // Purpose
    // -------
    // Check that raising the precision moves the estimates toward the
    // exact coefficients of a noise-free line.
    //
    // Given
    // -----
    // - y = 0.123456789 + x/3 on x = 0, 1, …, 9.
    //
    // Expect
    // ------
    // - The absolute error of β̂₀ and β̂₁ is non-increasing in ndec and
    //   below 1e-9 at ndec = 12.
    fn coefficients_converge_as_precision_increases() {
        // Arrange
        let intercept_true = 0.123456789;
        let slope_true = 1.0 / 3.0;
        let x: Vec<f64> = (0..10).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|x_i| intercept_true + slope_true * x_i).collect();

        // Act
        let errors: Vec<(f64, f64)> = [1, 3, 6, 9, 12]
            .iter()
            .map(|&ndec| {
                let b0 = beta0(&x, &y, ndec).unwrap();
                let b1 = beta1(&x, &y, ndec).unwrap();
                ((b0 - intercept_true).abs(), (b1 - slope_true).abs())
            })
            .collect();

        // Assert
        for pair in errors.windows(2) {
            assert!(pair[1].0 <= pair[0].0 + 1e-15, "intercept error grew: {errors:?}");
            assert!(pair[1].1 <= pair[0].1 + 1e-15, "slope error grew: {errors:?}");
        }
        let (last_b0, last_b1) = errors[errors.len() - 1];
        assert!(last_b0 < 1e-9 && last_b1 < 1e-9, "final errors too large: {errors:?}");
    }
}
