//! Errors for the parameter substrate (indexing, bounds, and shape checks).
//!
//! This module defines [`ParamError`], the error type returned by
//! [`Parameter`](crate::parameter::Parameter) and
//! [`MatrixParameter`](crate::parameter::MatrixParameter) operations. It
//! implements `Display`/`Error` and, with the `python-bindings` feature,
//! converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Parameter values themselves are never validated here: a parameter may
//!   hold any `f64`, and bounds are advisory. Only structural problems
//!   (out-of-range indices, malformed bounds, ragged matrices) are errors.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for parameter-substrate operations that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Structural errors raised by parameter handles.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    // ---- Indexing ----
    /// Index is not smaller than the parameter dimension.
    IndexOutOfRange { id: String, index: usize, dimension: usize },

    /// Row index is not smaller than the number of row parameters.
    RowOutOfRange { id: String, row: usize, rows: usize },

    // ---- Bounds ----
    /// Bounds must satisfy lower <= upper and neither may be NaN.
    InvalidBounds { lower: f64, upper: f64, reason: &'static str },

    // ---- Shape ----
    /// Dimension-name list length differs from the parameter dimension.
    DimensionNamesMismatch { id: String, expected: usize, actual: usize },

    /// Replacement value slice length differs from the parameter dimension.
    ValuesLengthMismatch { id: String, expected: usize, actual: usize },

    /// A row parameter of a matrix has the wrong dimension.
    RaggedRows { id: String, row: usize, expected: usize, actual: usize },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Indexing ----
            ParamError::IndexOutOfRange { id, index, dimension } => {
                write!(f, "Index {index} out of range for parameter '{id}' of dimension {dimension}.")
            }
            ParamError::RowOutOfRange { id, row, rows } => {
                write!(f, "Row {row} out of range for matrix parameter '{id}' with {rows} rows.")
            }
            // ---- Bounds ----
            ParamError::InvalidBounds { lower, upper, reason } => {
                write!(f, "Invalid bounds [{lower}, {upper}]: {reason}")
            }
            // ---- Shape ----
            ParamError::DimensionNamesMismatch { id, expected, actual } => {
                write!(
                    f,
                    "Parameter '{id}' expects {expected} dimension names, got {actual}."
                )
            }
            ParamError::ValuesLengthMismatch { id, expected, actual } => {
                write!(f, "Parameter '{id}' expects {expected} values, got {actual}.")
            }
            ParamError::RaggedRows { id, row, expected, actual } => {
                write!(
                    f,
                    "Row {row} of matrix parameter '{id}' has dimension {actual}; expected {expected}."
                )
            }
        }
    }
}

/// Convert a [`ParamError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
