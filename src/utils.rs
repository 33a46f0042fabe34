//! PyO3 conversion helpers shared by the Python bindings in `lib.rs`.
//!
//! Inputs arrive as NumPy arrays, pandas objects, or plain sequences and
//! leave as contiguous `Vec<f64>`; results go back as dicts and tuples.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
    PyUntypedArrayMethods,
};

#[cfg(feature = "python-bindings")]
use crate::statistical_tests::{anova::AnovaTable, outcome::TestOutcome};

/// One ANOVA row as handed to Python:
/// `(source, sum_sq, df, mean_sq, F_0, p_value, reject)`.
#[cfg(feature = "python-bindings")]
pub type AnovaTuple =
    (&'static str, f64, usize, Option<f64>, Option<f64>, Option<String>, Option<bool>);

/// Borrow a 1-D float64 array from a NumPy array, pandas Series, or
/// sequence of floats, copying only when the input is not already a
/// contiguous float64 array.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy an observation vector out of Python, flattening `(n, 1)` and
/// `(1, n)` arrays (including single-column DataFrames).
///
/// Errors
/// ------
/// - `ValueError` for a 2-D input with more than one row and column.
/// - `TypeError` when the object cannot be read as float64 values.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
    let candidate = raw_data.call_method0("to_numpy").unwrap_or_else(|_| raw_data.clone());

    if let Ok(matrix) = candidate.extract::<PyReadonlyArray2<f64>>() {
        let shape = matrix.shape();
        if shape[0] != 1 && shape[1] != 1 {
            return Err(PyValueError::new_err(format!(
                "expected a 1-D array or a single column, got shape ({}, {})",
                shape[0], shape[1]
            )));
        }
        return Ok(matrix.as_array().iter().copied().collect());
    }

    let arr = extract_f64_array(py, &candidate)?;
    arr.as_slice()
        .map(<[f64]>::to_vec)
        .map_err(|_| PyValueError::new_err("data must be a contiguous float64 array or sequence"))
}

/// Extract the predictor and response pair.
#[cfg(feature = "python-bindings")]
pub fn extract_xy<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    Ok((extract_f64_vec(py, x)?, extract_f64_vec(py, y)?))
}

/// Convert a test outcome into a dict keyed by `n`, `<stat_key>`,
/// `<critical_key>`, `p_value`, and `reject`.
#[cfg(feature = "python-bindings")]
pub fn outcome_to_dict<'py>(
    py: Python<'py>, outcome: &TestOutcome, stat_key: &str, critical_key: &str,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("n", outcome.n())?;
    dict.set_item(stat_key, outcome.statistic())?;
    dict.set_item(critical_key, outcome.critical_value())?;
    dict.set_item("p_value", outcome.p_value())?;
    dict.set_item("reject", outcome.reject())?;
    Ok(dict)
}

/// Flatten an ANOVA table into row tuples; the p-value is pre-formatted.
#[cfg(feature = "python-bindings")]
pub fn anova_to_tuples(table: &AnovaTable) -> Vec<AnovaTuple> {
    table
        .rows()
        .iter()
        .map(|row| {
            (
                row.source.label(),
                row.sum_sq,
                row.df,
                row.mean_sq,
                row.f_statistic,
                row.p_value_label(),
                row.reject,
            )
        })
        .collect()
}
