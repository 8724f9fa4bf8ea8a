//! Errors for the split antigenic-drift prior (construction shape checks,
//! evaluation domain checks, and named-slot binding).
//!
//! This module defines [`SplitPriorError`] and the [`SplitResult`] alias used
//! across `antigenic::core` and `antigenic::models`. Structural failures of
//! the parameter substrate are wrapped through `From<ParamError>`.
//!
//! ## Conventions
//! - **Indices are 0-based.**
//! - Construction errors (shape, dimension, missing slots) are returned by
//!   constructors; evaluation errors (non-positive precision, shapes changed
//!   by the host after construction) are returned by `log_likelihood`.
//! - Nothing here is logged or swallowed: every failure reaches the caller.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::parameter::ParamError;

/// Result alias for split-prior operations that may produce
/// [`SplitPriorError`].
pub type SplitResult<T> = Result<T, SplitPriorError>;

/// Unified error type for the split antigenic-drift prior.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitPriorError {
    // ---- Construction / shape ----
    /// Locations must have at least one antigenic coordinate per isolate.
    ZeroDimension,

    /// A location row does not have the embedding dimension.
    RaggedLocations { row: usize, expected: usize, actual: usize },

    /// A per-isolate parameter does not have one entry per isolate.
    DimensionMismatch { name: &'static str, expected: usize, actual: usize },

    /// A hyperparameter has no value to read.
    EmptyHyperparameter { name: &'static str },

    // ---- Evaluation ----
    /// Precision must be finite and > 0 for the log term to be defined.
    InvalidPrecision { value: f64 },

    // ---- Slot binding ----
    /// A required slot was never bound.
    MissingSlot { slot: &'static str },

    /// No slot with this name exists.
    UnknownSlot { name: String },

    /// The bound value has the wrong parameter kind for the slot.
    SlotKindMismatch { slot: &'static str, expected: &'static str },

    // ---- Parameter substrate ----
    /// Wrapper for structural parameter errors.
    Parameter(ParamError),
}

impl std::error::Error for SplitPriorError {}

impl std::fmt::Display for SplitPriorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Construction / shape ----
            SplitPriorError::ZeroDimension => {
                write!(f, "Locations must have at least one antigenic dimension.")
            }
            SplitPriorError::RaggedLocations { row, expected, actual } => {
                write!(f, "Location row {row} has dimension {actual}; expected {expected}.")
            }
            SplitPriorError::DimensionMismatch { name, expected, actual } => {
                write!(
                    f,
                    "Parameter '{name}' must have one entry per isolate: expected {expected}, got {actual}."
                )
            }
            SplitPriorError::EmptyHyperparameter { name } => {
                write!(f, "Hyperparameter '{name}' has dimension 0.")
            }
            // ---- Evaluation ----
            SplitPriorError::InvalidPrecision { value } => {
                write!(f, "Regression precision must be finite and > 0; got: {value}")
            }
            // ---- Slot binding ----
            SplitPriorError::MissingSlot { slot } => {
                write!(f, "Required slot '{slot}' was not bound.")
            }
            SplitPriorError::UnknownSlot { name } => {
                write!(f, "Unknown slot '{name}'.")
            }
            SplitPriorError::SlotKindMismatch { slot, expected } => {
                write!(f, "Slot '{slot}' expects a {expected}.")
            }
            // ---- Parameter substrate ----
            SplitPriorError::Parameter(err) => write!(f, "{err}"),
        }
    }
}

impl From<ParamError> for SplitPriorError {
    fn from(err: ParamError) -> SplitPriorError {
        match err {
            ParamError::RaggedRows { row, expected, actual, .. } => {
                SplitPriorError::RaggedLocations { row, expected, actual }
            }
            other => SplitPriorError::Parameter(other),
        }
    }
}

/// Convert a [`SplitPriorError`] into a Python `ValueError` with the error
/// message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<SplitPriorError> for PyErr {
    fn from(err: SplitPriorError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
