//! regression::errors — error type for the least-squares formulas.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every formula in the
//! `regression` subtree (sums of squares, coefficients, decomposition),
//! together with the conversion into Python exceptions used by the PyO3
//! bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`RegressionResult`] and [`RegressionError`] as the canonical
//!   result and error types for sample validation and degenerate numerics.
//! - Attach `Display` messages phrased in terms of sample constraints
//!   ("need at least 3 observations") rather than low-level failures.
//! - Implement `From<RegressionError> for PyErr`, mapping every variant to
//!   `PyValueError` when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Formulas never return ±∞ or NaN: a denominator that rounds to exactly
//!   zero is reported as [`RegressionError::DegenerateDenominator`].
//! - Variants are small and cloneable so they can be asserted on directly
//!   in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` output embeds its
//!   payload. The PyO3 conversion is exercised from Python.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

pub type RegressionResult<T> = Result<T, RegressionError>;

/// RegressionError — failures of the least-squares formulas.
///
/// Variants
/// --------
/// - `EmptySeries`
///   A required input vector has no observations.
/// - `LengthMismatch { x_len, y_len }`
///   Predictor and response vectors differ in length.
/// - `NonFiniteData { index, value }`
///   An observation is NaN or ±∞.
/// - `InsufficientData { required, actual }`
///   The sample is too small for the requested statistic (e.g. n ≤ 2 for
///   MSE, where n − 2 residual degrees of freedom must be positive).
/// - `DegenerateDenominator { quantity }`
///   A denominator rounded to exactly zero at the working precision, such
///   as `S_xx` for a predictor with no spread.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    // ---- Input validation ----
    EmptySeries,
    LengthMismatch { x_len: usize, y_len: usize },
    NonFiniteData { index: usize, value: f64 },
    InsufficientData { required: usize, actual: usize },

    // ---- Degenerate numerics ----
    DegenerateDenominator { quantity: &'static str },
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::EmptySeries => write!(f, "Input series must not be empty."),
            RegressionError::LengthMismatch { x_len, y_len } => write!(
                f,
                "Predictor and response must have equal length (x has {x_len}, y has {y_len})."
            ),
            RegressionError::NonFiniteData { index, value } => {
                write!(f, "Invalid data value {value} at index {index}. Must be a finite number.")
            }
            RegressionError::InsufficientData { required, actual } => write!(
                f,
                "Need at least {required} observations for this statistic, got {actual}."
            ),
            RegressionError::DegenerateDenominator { quantity } => {
                write!(f, "{quantity} rounds to zero at the requested precision.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<RegressionError> for PyErr {
    fn from(err: RegressionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
