//! utils — Python input conversion for the PyO3 bindings.
//!
//! Purpose
//! -------
//! Turn array-likes handed over from Python (NumPy arrays, pandas objects,
//! nested sequences) into owned `ndarray` buffers that seed the parameter
//! handles of a split prior.
//!
//! Key behaviors
//! -------------
//! - [`extract_f64_vector`]: 1-D array-like → `Array1<f64>`.
//! - [`extract_f64_matrix`]: 2-D array-like → `Array2<f64>`.
//! - Both try a zero-copy read-only NumPy view first, then `.to_numpy()`,
//!   then a plain sequence extraction; the result is always an owned copy
//!   because the prior's parameters own their values.
//! - [`rows_to_array`]: nested rows → `Array2<f64>`, with an explicit column
//!   count for the empty case (a bare `[]` carries no width).
//!
//! Conventions
//! -----------
//! - Everything except [`rows_to_array`] is compiled only with the
//!   `python-bindings` feature.
//! - Conversion failures are `TypeError`; shape problems are `ValueError`.

use crate::parameter::{ParamError, ParamResult};
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyReadonlyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Stack nested `rows` into an `Array2`.
///
/// Parameters
/// ----------
/// - `rows`: one inner vector per isolate.
/// - `empty_columns`: width of the result when `rows` is empty.
///
/// Errors
/// ------
/// - `ParamError::RaggedRows` for the first row whose length differs from
///   the first row's.
pub fn rows_to_array(rows: &[Vec<f64>], empty_columns: usize) -> ParamResult<Array2<f64>> {
    let columns = rows.first().map_or(empty_columns, Vec::len);
    if let Some(row) = rows.iter().position(|r| r.len() != columns) {
        return Err(ParamError::RaggedRows {
            id: "locations".to_string(),
            row,
            expected: columns,
            actual: rows[row].len(),
        });
    }
    Ok(Array2::from_shape_fn((rows.len(), columns), |(i, j)| rows[i][j]))
}

/// Copy a 1-D array-like of `f64` into an `Array1`.
///
/// Errors
/// ------
/// - `TypeError` when `raw` is not a 1-D float array, a pandas object with
///   `to_numpy`, or a sequence of floats.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector(raw: &Bound<'_, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(arr.as_array().to_owned());
        }
    }

    let vec: Vec<f64> = raw.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(Array1::from_vec(vec))
}

/// Copy a 2-D array-like of `f64` into an `Array2` (rows are isolates).
///
/// `empty_columns` sets the width when `raw` is an empty sequence; NumPy and
/// pandas inputs carry their own shape and ignore it.
///
/// Errors
/// ------
/// - `TypeError` when `raw` is not a 2-D float array, a pandas object with
///   `to_numpy`, or a sequence of float sequences.
/// - `ValueError` when a nested sequence is ragged.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix(raw: &Bound<'_, PyAny>, empty_columns: usize) -> PyResult<Array2<f64>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr.as_array().to_owned());
    }

    if let Ok(obj) = raw.call_method0("to_numpy") {
        if let Ok(arr) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(arr.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw.extract().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or sequence of float64 sequences",
        )
    })?;
    Ok(rows_to_array(&rows, empty_columns)?)
}
