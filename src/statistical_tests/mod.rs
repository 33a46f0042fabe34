//! statistical_tests — significance tests and the ANOVA table for the slope.
//!
//! Purpose
//! -------
//! Turn the per-stage rounded regression quantities from
//! [`crate::regression`] into inference on H₀: β₁ = 0. This subtree owns the
//! reference distributions, the two-sided t-test, the F-test for
//! significance of regression, and the ANOVA table built on top of them.
//!
//! Key behaviors
//! -------------
//! - [`t_test`] and [`f_test`] return a [`TestOutcome`] with the sample size,
//!   statistic, critical value, p-value, and reject decision.
//! - [`anova`] returns an [`AnovaTable`] whose regression row carries the
//!   F-test and whose residual and total rows carry the decomposition.
//! - [`validate_alpha`] guards every entry point taking a significance level.
//! - Failures surface as [`TestError`] via [`TestResult`], wrapping
//!   [`RegressionError`](crate::regression::RegressionError) when a formula
//!   below the test fails.
//!
//! Invariants & assumptions
//! ------------------------
//! - Statistics and critical values are rounded to `ndec` decimals; p-values
//!   are not.
//! - The t-test decides on |t₀| > critical value; the F-test decides on
//!   p-value < α. The two decisions agree for all practical inputs.
//! - `statrs` is only referenced from [`distributions`]; the tests see the
//!   [`ReferenceDistribution`] trait.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_lra::statistical_tests::{anova, t_test, TestResult};
//!
//!   fn report(x: &[f64], y: &[f64]) -> TestResult<()> {
//!       let outcome = t_test(x, y, 0.05, 4)?;
//!       println!("{outcome}");
//!       println!("{}", anova(x, y, 0.05, 4)?);
//!       Ok(())
//!   }
//!
//!   report(&[1.0, 2.0, 3.0, 4.0], &[1.2, 1.9, 3.2, 3.9]).unwrap();
//!   ```
//!
//! - Python bindings call the same functions and rely on
//!   `From<TestError> for PyErr` to raise `ValueError`.
//!
//! Testing notes
//! -------------
//! - Each module carries unit tests against the rocket-propellant reference
//!   sample and small hand-checked inputs; cross-module consistency
//!   (ANOVA vs. F-test, F₀ vs. t₀²) is tested in [`anova`] and [`f_test`].

pub mod anova;
pub mod distributions;
pub mod errors;
pub mod outcome;
pub mod t_test;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::anova::{anova, format_p_value, AnovaRow, AnovaSource, AnovaTable, ANOVA_COLUMNS};
pub use self::distributions::{FDistribution, ReferenceDistribution, TDistribution};
pub use self::errors::{TestError, TestResult};
pub use self::f_test::{f_critical_value, f_score, f_test, p_value_f};
pub use self::outcome::TestOutcome;
pub use self::t_test::{p_value_t, std_err_beta1, t_critical_value, t_score, t_test};
pub use self::validation::{validate_alpha, DEFAULT_ALPHA};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_lra::statistical_tests::prelude::*;
//
// to import the main statistical-testing surface in a single line.

pub mod prelude {
    pub use super::anova::{anova, AnovaTable};
    pub use super::errors::{TestError, TestResult};
    pub use super::f_test::f_test;
    pub use super::outcome::TestOutcome;
    pub use super::t_test::t_test;
}
