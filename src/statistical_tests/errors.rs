//! statistical_tests::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the hypothesis-test layer
//! (t-test, F-test, ANOVA) together with a conversion layer to Python
//! exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`TestResult`] and [`TestError`] as the canonical result and
//!   error types for critical values, p-values, test procedures, and the
//!   ANOVA table.
//! - Wrap [`RegressionError`] so that failures of the underlying formulas
//!   propagate through `?` unchanged.
//! - Implement `From<TestError> for PyErr` to raise `ValueError` on the
//!   Python side.
//!
//! Invariants & assumptions
//! ------------------------
//! - Distribution parameter failures reported by `statrs` are normalized to
//!   [`TestError::InvalidDegreesOfFreedom`] with the offending value.
//! - The Python-facing conversion preserves the Rust `Display` message
//!   verbatim.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "alpha must satisfy 0 < alpha < 1") rather than library internals.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each [`TestError`] variant's `Display` message
//!   embeds its payload and that wrapped regression errors keep their text.

use crate::regression::errors::RegressionError;
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type TestResult<T> = Result<T, TestError>;

/// TestError — error conditions for hypothesis tests on the fitted line.
///
/// Variants
/// --------
/// - `InvalidAlpha(alpha: f64)`
///   The significance level lies outside the open interval (0, 1).
/// - `InvalidDegreesOfFreedom(dof: f64)`
///   The reference t or F distribution rejected its degrees of freedom
///   (non-positive or non-finite).
/// - `Regression(RegressionError)`
///   A least-squares formula feeding the test failed.
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    InvalidAlpha(f64),
    InvalidDegreesOfFreedom(f64),
    Regression(RegressionError),
}

impl std::error::Error for TestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TestError::Regression(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha value: {alpha}. Must satisfy 0 < alpha < 1.")
            }
            TestError::InvalidDegreesOfFreedom(dof) => {
                write!(f, "Invalid degrees of freedom: {dof}. Must be finite and positive.")
            }
            TestError::Regression(err) => write!(f, "{err}"),
        }
    }
}

impl From<RegressionError> for TestError {
    fn from(err: RegressionError) -> Self {
        TestError::Regression(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<TestError> for PyErr {
    fn from(err: TestError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
