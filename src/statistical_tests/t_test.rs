//! statistical_tests::t_test — standard error of the slope and the t-test.
//!
//! Purpose
//! -------
//! Test H₀: β₁ = 0 against a two-sided alternative using the Student-t
//! distribution with n − 2 degrees of freedom.
//!
//! Key behaviors
//! -------------
//! - [`std_err_beta1`]: se(β̂₁) = √(MSE / S_xx).
//! - [`t_score`]: t₀ = β̂₁ / se(β̂₁).
//! - [`t_critical_value`]: t(dof)₁₋α/₂, the two-sided critical value.
//! - [`p_value_t`]: 2·(1 − F_t(|t₀|; n − 2)).
//! - [`t_test`]: bundles the above into a [`TestOutcome`] and rejects
//!   exactly when |t₀| exceeds the critical value.
//!
//! Invariants & assumptions
//! ------------------------
//! - The statistic and critical value are rounded to `ndec` decimals; the
//!   p-value is left unrounded.
//! - A standard error that rounds to zero (perfect fit) is reported as
//!   `RegressionError::DegenerateDenominator { quantity: "se(beta1)" }`.
//! - A negative MSE produced by per-stage rounding is reported as
//!   `RegressionError::DegenerateDenominator { quantity: "MSE" }`.
//!
//! Downstream usage
//! ----------------
//! - Most callers only need [`t_test`]; the individual pieces are public so
//!   that reports can show intermediate values.

use crate::regression::{
    coefficients::beta1,
    decomposition::mse,
    errors::{RegressionError, RegressionResult},
    rounding::round_to,
    sums::sxx,
};
use crate::statistical_tests::{
    distributions::{ReferenceDistribution, TDistribution},
    errors::TestResult,
    outcome::TestOutcome,
    validation::validate_alpha,
};

/// Standard error of the slope, se(β̂₁) = √(MSE / S_xx).
///
/// Errors
/// ------
/// - `InsufficientData` when n ≤ 2 (via MSE).
/// - `DegenerateDenominator { quantity: "MSE" }` when rounding drives the
///   MSE below zero.
/// - `DegenerateDenominator { quantity: "S_xx" }` for a constant predictor.
pub fn std_err_beta1(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    let mean_sq_error = mse(x, y, ndec)?;
    if mean_sq_error < 0.0 {
        return Err(RegressionError::DegenerateDenominator { quantity: "MSE" });
    }
    let s_xx = sxx(x, ndec)?;
    if s_xx == 0.0 {
        return Err(RegressionError::DegenerateDenominator { quantity: "S_xx" });
    }
    Ok(round_to((mean_sq_error / s_xx).sqrt(), ndec))
}

/// Test statistic t₀ = β̂₁ / se(β̂₁) for H₀: β₁ = 0.
///
/// Errors
/// ------
/// - Any error from [`beta1`] or [`std_err_beta1`].
/// - `DegenerateDenominator { quantity: "se(beta1)" }` when the standard
///   error rounds to zero.
pub fn t_score(x: &[f64], y: &[f64], ndec: i32) -> RegressionResult<f64> {
    let slope = beta1(x, y, ndec)?;
    let std_err = std_err_beta1(x, y, ndec)?;
    if std_err == 0.0 {
        return Err(RegressionError::DegenerateDenominator { quantity: "se(beta1)" });
    }
    Ok(round_to(slope / std_err, ndec))
}

/// Two-sided Student-t critical value: the upper α/2 point of t(`dof`).
///
/// Errors
/// ------
/// - `InvalidAlpha` unless 0 < `alpha` < 1.
/// - `InvalidDegreesOfFreedom` unless `dof` is finite and positive.
pub fn t_critical_value(dof: f64, alpha: f64, ndec: i32) -> TestResult<f64> {
    validate_alpha(alpha)?;
    let dist = TDistribution::new(dof)?;
    Ok(round_to(dist.upper_critical_value(alpha / 2.0), ndec))
}

/// Two-sided p-value of [`t_score`] under t(n − 2).
///
/// `ndec` controls the rounding of the statistic; the p-value itself is
/// not rounded.
pub fn p_value_t(x: &[f64], y: &[f64], ndec: i32) -> TestResult<f64> {
    let t0 = t_score(x, y, ndec)?.abs();
    let dist = TDistribution::new(residual_dof(x))?;
    Ok(2.0 * (1.0 - dist.cdf(t0)))
}

/// Run the two-sided t-test of H₀: β₁ = 0 at level `alpha`.
///
/// Returns
/// -------
/// `TestResult<TestOutcome>` with `statistic = t₀`,
/// `critical_value = t(n − 2)₁₋α/₂`, `p_value` from [`p_value_t`], and
/// `reject = |t₀| > critical_value`.
///
/// Errors
/// ------
/// - `InvalidAlpha` for an out-of-range significance level, checked first.
/// - `Regression(_)` when any underlying formula fails.
///
/// Examples
/// --------
/// ```rust
/// use rust_lra::statistical_tests::t_test::t_test;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.1, 3.9, 6.2, 7.8, 10.1];
///
/// let outcome = t_test(&x, &y, 0.05, 4).unwrap();
///
/// assert_eq!(outcome.n(), 5);
/// assert!(outcome.reject());
/// assert_eq!(outcome.reject(), outcome.statistic().abs() > outcome.critical_value());
/// ```
pub fn t_test(x: &[f64], y: &[f64], alpha: f64, ndec: i32) -> TestResult<TestOutcome> {
    validate_alpha(alpha)?;
    let t0 = t_score(x, y, ndec)?;
    let n = x.len();
    let t_value = t_critical_value(residual_dof(x), alpha, ndec)?;
    let p_value = p_value_t(x, y, ndec)?;

    Ok(TestOutcome::new(n, t0, t_value, p_value, t0.abs() > t_value))
}

/// Residual degrees of freedom n − 2 as a float. Callers validate n ≥ 3.
#[inline]
pub(crate) fn residual_dof(x: &[f64]) -> f64 {
    x.len() as f64 - 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regression::fixtures::{AGE, STRENGTH};
    use crate::statistical_tests::errors::TestError;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Reference se(β̂₁), t₀, critical value, and p-value on the
    //   rocket-propellant sample.
    // - The decision rule `reject ⇔ |t₀| > critical value` on both a strong
    //   and a weak relationship, across several alphas.
    // - Idempotence of repeated calls.
    // - Error paths: invalid alpha, invalid dof, too few observations, a
    //   perfect fit with zero standard error, and a negative rounded MSE.
    // -------------------------------------------------------------------------

    const WEAK_X: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    const WEAK_Y: [f64; 6] = [2.0, 1.0, 3.0, 2.0, 1.0, 3.0];

    #[test]
    // Purpose
    // -------
    // Reproduce the reference slope inference on the rocket-propellant data.
    //
    // Given
    // -----
    // - age as x, strength as y.
    //
    // Expect
    // ------
    // - se(β̂₁) = 2.89 and t₀ = −12.85 at ndec = 2.
    // - t(18)₀.₉₇₅ = 2.101 at ndec = 3.
    // - p-value ≈ 1.6433e-10 at ndec = 10 (quoted as 1.66e-10 from the
    //   two-decimal statistic).
    fn rocket_t_inference_matches_reference() {
        // Act
        let std_err = std_err_beta1(&AGE, &STRENGTH, 2).unwrap();
        let t0 = t_score(&AGE, &STRENGTH, 2).unwrap();
        let t_value = t_critical_value(18.0, 0.05, 3).unwrap();
        let p_value = p_value_t(&AGE, &STRENGTH, 10).unwrap();

        // Assert
        assert_relative_eq!(std_err, 2.89, epsilon = 1e-12);
        assert_relative_eq!(t0, -12.85, epsilon = 1e-12);
        assert_relative_eq!(t_value, 2.101, epsilon = 1e-12);
        assert_relative_eq!(p_value, 1.6433e-10, max_relative = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Verify the decision rule on strong and weak relationships.
    //
    // Given
    // -----
    // - The rocket-propellant data (strong negative slope) and a six-point
    //   sample with an almost flat slope.
    // - alpha ∈ {0.01, 0.05, 0.2, 0.5}.
    //
    // Expect
    // ------
    // - `reject == |t₀| > critical value` in every case.
    // - The rocket slope is rejected at 0.05; the flat slope is not.
    fn reject_flag_follows_statistic_versus_critical_value() {
        for alpha in [0.01, 0.05, 0.2, 0.5] {
            for (x, y) in [(&AGE[..], &STRENGTH[..]), (&WEAK_X[..], &WEAK_Y[..])] {
                // Act
                let outcome = t_test(x, y, alpha, 4).unwrap();
                let t_value = t_critical_value(x.len() as f64 - 2.0, alpha, 4).unwrap();

                // Assert
                assert_eq!(outcome.critical_value(), t_value);
                assert_eq!(outcome.reject(), outcome.statistic().abs() > t_value);
                assert!((0.0..=1.0).contains(&outcome.p_value()));
            }
        }

        assert!(t_test(&AGE, &STRENGTH, 0.05, 4).unwrap().reject());
        assert!(!t_test(&WEAK_X, &WEAK_Y, 0.05, 4).unwrap().reject());
    }

    #[test]
    // Purpose
    // -------
    // Ensure repeated calls are bit-identical.
    //
    // Given
    // -----
    // - The rocket-propellant data at the default precision.
    //
    // Expect
    // ------
    // - Two `t_test` calls produce identical outcomes, including p-value
    //   bits.
    fn t_test_is_idempotent() {
        // Act
        let first = t_test(&AGE, &STRENGTH, 0.05, 4).unwrap();
        let second = t_test(&AGE, &STRENGTH, 0.05, 4).unwrap();

        // Assert
        assert_eq!(first, second);
        assert_eq!(first.p_value().to_bits(), second.p_value().to_bits());
    }

    #[test]
    // Purpose
    // -------
    // Check every error path of the t-test surface.
    //
    // Given
    // -----
    // - alpha = 0, dof = 0, a two-point sample, and a perfect linear fit.
    //
    // Expect
    // ------
    // - `InvalidAlpha`, `InvalidDegreesOfFreedom`,
    //   `Regression(InsufficientData)`, and
    //   `DegenerateDenominator { quantity: "se(beta1)" }` respectively.
    fn t_test_error_paths() {
        // Arrange
        let perfect_x = [1.0, 2.0, 3.0];
        let perfect_y = [2.0, 4.0, 6.0];

        // Act / Assert
        assert_eq!(t_test(&AGE, &STRENGTH, 0.0, 4), Err(TestError::InvalidAlpha(0.0)));
        assert_eq!(t_critical_value(0.0, 0.05, 4), Err(TestError::InvalidDegreesOfFreedom(0.0)));
        assert_eq!(
            t_test(&[1.0, 2.0], &[3.0, 5.0], 0.05, 4),
            Err(TestError::Regression(RegressionError::InsufficientData {
                required: 3,
                actual: 2
            }))
        );
        assert_eq!(
            t_score(&perfect_x, &perfect_y, 4),
            Err(RegressionError::DegenerateDenominator { quantity: "se(beta1)" })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a rounded MSE below zero is rejected instead of being fed to the
    // square root.
    //
    // Given
    // -----
    // - x = [0, 1, 2, 3], y = [0, 1.26, 2.52, 3.78] at ndec = 1, where
    //   SSE = SST − β̂₁·S_xy = 7.9 − 1.3·6.3 rounds to −0.3.
    //
    // Expect
    // ------
    // - `mse` is negative.
    // - `std_err_beta1` and `t_score` fail with
    //   `DegenerateDenominator { quantity: "MSE" }`, and `t_test` wraps it.
    fn negative_rounded_mse_is_degenerate() {
        // Arrange
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.26, 2.52, 3.78];
        let degenerate = RegressionError::DegenerateDenominator { quantity: "MSE" };

        // Act
        let mean_sq_error = mse(&x, &y, 1).unwrap();

        // Assert
        assert!(mean_sq_error < 0.0, "expected negative MSE, got {mean_sq_error}");
        assert_eq!(std_err_beta1(&x, &y, 1), Err(degenerate.clone()));
        assert_eq!(t_score(&x, &y, 1), Err(degenerate.clone()));
        assert_eq!(t_test(&x, &y, 0.05, 1), Err(TestError::Regression(degenerate)));
    }
}
