//! rust_lra — simple linear regression analysis with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the regression formulas and significance tests to Python via the
//! `_rust_lra` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing functions of the
//! `simple_linear_regression` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`regression` and `statistical_tests`)
//!   and their primary functions as the public crate surface.
//! - Define `#[pyfunction]` wrappers named after the classic textbook
//!   notation (`S_xx`, `Beta_1`, `TTest`, `ANOVA`, ...) and the
//!   `#[pymodule]` initializer for `_rust_lra`.
//! - Register the `simple_linear_regression` submodule in `sys.modules` so
//!   that dotted imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every formula rounds its own output to `ndec` decimals and recomputes
//!   its inputs from the raw data; results are pure functions of
//!   `(x, y, ndec)` and, for tests, `alpha`.
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue and error mapping.
//!
//! Conventions
//! -----------
//! - Python keyword defaults are `alpha=0.05` and `ndec=4`, matching
//!   [`DEFAULT_ALPHA`] and [`DEFAULT_NDEC`].
//! - Errors from core Rust code are converted to `ValueError` at the PyO3
//!   boundary; unreadable inputs raise `TypeError`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code can call the re-exported free functions directly or
//!   go through [`Sample`] with a [`RegressionOptions`]:
//!
//!   ```rust
//!   use rust_lra::{Sample, RegressionOptions};
//!
//!   let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!   let y = vec![1.1, 2.3, 2.8, 4.2, 4.9];
//!   let sample = Sample::new(x, y).unwrap();
//!   let opts = RegressionOptions::default();
//!   println!("{}", sample.anova(&opts).unwrap());
//!   ```
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_rocket_propellant.rs`.

#[cfg(feature = "obs_slog")]
mod logging;
pub mod regression;
pub mod statistical_tests;
pub mod utils;

pub use crate::regression::{
    beta0, beta1, mse, msr, predicted, sse, sst, ssr, sxx, sxy, RegressionError,
    RegressionOptions, RegressionResult, Sample, DEFAULT_NDEC,
};
pub use crate::statistical_tests::{
    anova, f_critical_value, f_score, f_test, p_value_f, p_value_t, std_err_beta1,
    t_critical_value, t_score, t_test, AnovaTable, TestError, TestOutcome, TestResult,
    ANOVA_COLUMNS, DEFAULT_ALPHA,
};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::utils::{anova_to_tuples, extract_f64_vec, extract_xy, outcome_to_dict, AnovaTuple};

// ---- Sums of squares and coefficients -------------------------------------

/// Corrected sum of squares of `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "S_xx", signature = (x, ndec = DEFAULT_NDEC))]
fn py_s_xx<'py>(py: Python<'py>, x: &Bound<'py, PyAny>, ndec: i32) -> PyResult<f64> {
    Ok(sxx(&extract_f64_vec(py, x)?, ndec)?)
}

/// Corrected cross-product of `x` and `y`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "S_xy", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_s_xy<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(sxy(&x, &y, ndec)?)
}

/// Least-squares intercept.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "Beta_0", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_beta_0<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(beta0(&x, &y, ndec)?)
}

/// Least-squares slope.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "Beta_1", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_beta_1<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(beta1(&x, &y, ndec)?)
}

/// Fitted values as a NumPy array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "y_predicted", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_y_predicted<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(predicted(&x, &y, ndec)?.into_pyarray(py))
}

// ---- Decomposition ---------------------------------------------------------

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "SST", signature = (y, ndec = DEFAULT_NDEC))]
fn py_sst<'py>(py: Python<'py>, y: &Bound<'py, PyAny>, ndec: i32) -> PyResult<f64> {
    Ok(sst(&extract_f64_vec(py, y)?, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "SSR", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_ssr<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(ssr(&x, &y, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "SSE", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_sse<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(sse(&x, &y, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "MSR", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_msr<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(msr(&x, &y, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "MSE", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_mse<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(mse(&x, &y, ndec)?)
}

// ---- t-test ----------------------------------------------------------------

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "se_Beta1", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_se_beta1<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(std_err_beta1(&x, &y, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "TScore", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_t_score<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(t_score(&x, &y, ndec)?)
}

/// Two-sided Student-t critical value with `dof` degrees of freedom.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "TValue", signature = (dof, alpha = DEFAULT_ALPHA, ndec = DEFAULT_NDEC))]
fn py_t_value(dof: f64, alpha: f64, ndec: i32) -> PyResult<f64> {
    Ok(t_critical_value(dof, alpha, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "PValueT", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_p_value_t<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(p_value_t(&x, &y, ndec)?)
}

/// t-test of a zero slope; returns `{n, t0, t_value, p_value, reject}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "TTest", signature = (x, y, alpha = DEFAULT_ALPHA, ndec = DEFAULT_NDEC))]
fn py_t_test<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, alpha: f64, ndec: i32,
) -> PyResult<Bound<'py, PyDict>> {
    let (x, y) = extract_xy(py, x, y)?;
    let outcome = t_test(&x, &y, alpha, ndec)?;
    outcome_to_dict(py, &outcome, "t0", "t_value")
}

// ---- F-test and ANOVA ------------------------------------------------------

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "FScore", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_f_score<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(f_score(&x, &y, ndec)?)
}

/// F(1, `dof`) critical value at tail probability `alpha / 2`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "FValue", signature = (dof, alpha = DEFAULT_ALPHA, ndec = DEFAULT_NDEC))]
fn py_f_value(dof: f64, alpha: f64, ndec: i32) -> PyResult<f64> {
    Ok(f_critical_value(dof, alpha, ndec)?)
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "PValueF", signature = (x, y, ndec = DEFAULT_NDEC))]
fn py_p_value_f<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ndec: i32,
) -> PyResult<f64> {
    let (x, y) = extract_xy(py, x, y)?;
    Ok(p_value_f(&x, &y, ndec)?)
}

/// F-test for significance of regression; returns
/// `{n, f0, f_value, p_value, reject}`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "FTest", signature = (x, y, alpha = DEFAULT_ALPHA, ndec = DEFAULT_NDEC))]
fn py_f_test<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, alpha: f64, ndec: i32,
) -> PyResult<Bound<'py, PyDict>> {
    let (x, y) = extract_xy(py, x, y)?;
    let outcome = f_test(&x, &y, alpha, ndec)?;
    outcome_to_dict(py, &outcome, "f0", "f_value")
}

/// ANOVA table as a list of row tuples in `ANOVA_COLUMNS` order.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "ANOVA", signature = (x, y, alpha = DEFAULT_ALPHA, ndec = DEFAULT_NDEC))]
fn py_anova<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, alpha: f64, ndec: i32,
) -> PyResult<Vec<AnovaTuple>> {
    let (x, y) = extract_xy(py, x, y)?;
    let table = anova(&x, &y, alpha, ndec)?;
    Ok(anova_to_tuples(&table))
}

/// _rust_lra — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_lra` Python module and register the
/// `simple_linear_regression` submodule used by the public package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_lra<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let slr_mod = PyModule::new(_py, "simple_linear_regression")?;
    simple_linear_regression(_py, m, &slr_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_lra.simple_linear_regression", slr_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn simple_linear_regression<'py>(
    _py: Python, rust_lra: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_s_xx, m)?)?;
    m.add_function(wrap_pyfunction!(py_s_xy, m)?)?;
    m.add_function(wrap_pyfunction!(py_beta_0, m)?)?;
    m.add_function(wrap_pyfunction!(py_beta_1, m)?)?;
    m.add_function(wrap_pyfunction!(py_y_predicted, m)?)?;
    m.add_function(wrap_pyfunction!(py_sst, m)?)?;
    m.add_function(wrap_pyfunction!(py_ssr, m)?)?;
    m.add_function(wrap_pyfunction!(py_sse, m)?)?;
    m.add_function(wrap_pyfunction!(py_msr, m)?)?;
    m.add_function(wrap_pyfunction!(py_mse, m)?)?;
    m.add_function(wrap_pyfunction!(py_se_beta1, m)?)?;
    m.add_function(wrap_pyfunction!(py_t_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_t_value, m)?)?;
    m.add_function(wrap_pyfunction!(py_p_value_t, m)?)?;
    m.add_function(wrap_pyfunction!(py_t_test, m)?)?;
    m.add_function(wrap_pyfunction!(py_f_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_f_value, m)?)?;
    m.add_function(wrap_pyfunction!(py_p_value_f, m)?)?;
    m.add_function(wrap_pyfunction!(py_f_test, m)?)?;
    m.add_function(wrap_pyfunction!(py_anova, m)?)?;
    m.add("ANOVA_COLUMNS", ANOVA_COLUMNS.to_vec())?;
    m.add("DEFAULT_ALPHA", DEFAULT_ALPHA)?;
    m.add("DEFAULT_NDEC", DEFAULT_NDEC)?;
    rust_lra.add_submodule(m)?;
    Ok(())
}
