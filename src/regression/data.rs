//! Paired observation container for simple linear regression.
//!
//! Purpose
//! -------
//! Provide a validated, owned (x, y) sample so that the full analysis
//! pipeline (coefficients, fitted values, t-test, F-test, ANOVA) can be run
//! through methods without re-validating the data at every call.
//!
//! Key behaviors
//! -------------
//! - [`Sample::new`] checks equal lengths, n ≥ 3, and finiteness once.
//! - Every method delegates to the corresponding free function with the
//!   precision and significance level from [`RegressionOptions`].
//! - With the `obs_slog` feature and `opts.verbose == true`, test outcomes
//!   are written as structured log records to stderr.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == y.len() >= 3` and every value is finite.
//! - Results are recomputed on every call; nothing is cached, so repeated
//!   calls with the same options are bit-identical.
//!
//! Downstream usage
//! ----------------
//! - Build one [`Sample`] where data enters the crate and pass the same
//!   [`RegressionOptions`] to each method.
//! - The free functions remain the primitive surface; prefer them when
//!   only a single quantity is needed.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction failures and check that each method
//!   agrees with the free function it wraps.

#[cfg(feature = "obs_slog")]
use crate::logging;
use crate::regression::{
    coefficients::{beta0, beta1, predicted},
    errors::RegressionResult,
    options::RegressionOptions,
    validation::{validate_pair, MIN_INFERENCE_LEN},
};
use crate::statistical_tests::{
    anova::{anova, AnovaTable},
    errors::TestResult,
    f_test::f_test,
    outcome::TestOutcome,
    t_test::t_test,
};
use ndarray::Array1;

/// `Sample` — validated predictor/response pair.
///
/// Fields
/// ------
/// - `x`: `Vec<f64>`
///   Predictor observations.
/// - `y`: `Vec<f64>`
///   Response observations.
///
/// Invariants
/// ----------
/// - `x.len() == y.len() >= MIN_INFERENCE_LEN`.
/// - All entries are finite.
///
/// Performance
/// -----------
/// - Validation is a single O(n) pass at construction; each method is O(n).
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Sample {
    /// Construct a validated [`Sample`].
    ///
    /// Errors
    /// ------
    /// - `RegressionError::LengthMismatch` when `x` and `y` differ in length.
    /// - `RegressionError::EmptySeries` or `NonFiniteData` from the series
    ///   guards.
    /// - `RegressionError::InsufficientData` when n < 3.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_lra::regression::{data::Sample, options::RegressionOptions};
    ///
    /// let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 4.1, 5.9, 8.2]).unwrap();
    /// let (b0, b1) = sample.coefficients(&RegressionOptions::default()).unwrap();
    /// assert!(b1 > 1.9 && b1 < 2.1);
    /// assert!(b0.abs() < 0.2);
    /// ```
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> RegressionResult<Self> {
        validate_pair(&x, &y, MIN_INFERENCE_LEN)?;
        Ok(Sample { x, y })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always `false` for a constructed sample; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Predictor observations.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Response observations.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Intercept and slope `(β̂₀, β̂₁)` at `opts.ndec`.
    pub fn coefficients(&self, opts: &RegressionOptions) -> RegressionResult<(f64, f64)> {
        let intercept = beta0(&self.x, &self.y, opts.ndec)?;
        let slope = beta1(&self.x, &self.y, opts.ndec)?;
        Ok((intercept, slope))
    }

    /// Fitted values ŷ at `opts.ndec`.
    pub fn predicted(&self, opts: &RegressionOptions) -> RegressionResult<Array1<f64>> {
        predicted(&self.x, &self.y, opts.ndec)
    }

    /// Two-sided t-test of H₀: β₁ = 0.
    pub fn t_test(&self, opts: &RegressionOptions) -> TestResult<TestOutcome> {
        let outcome = t_test(&self.x, &self.y, opts.alpha, opts.ndec)?;
        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            logging::log_outcome(&logging::term_logger(), "t-test", &outcome);
        }
        Ok(outcome)
    }

    /// F-test for significance of regression.
    pub fn f_test(&self, opts: &RegressionOptions) -> TestResult<TestOutcome> {
        let outcome = f_test(&self.x, &self.y, opts.alpha, opts.ndec)?;
        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            logging::log_outcome(&logging::term_logger(), "F-test", &outcome);
        }
        Ok(outcome)
    }

    /// ANOVA table for the fitted line.
    pub fn anova(&self, opts: &RegressionOptions) -> TestResult<AnovaTable> {
        let table = anova(&self.x, &self.y, opts.alpha, opts.ndec)?;
        #[cfg(feature = "obs_slog")]
        if opts.verbose {
            logging::log_anova(&logging::term_logger(), &table);
        }
        Ok(table)
    }
}
