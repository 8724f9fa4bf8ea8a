//! Advisory bounds attached to parameters.
//!
//! Purpose
//! -------
//! Provide a small, validated `[lower, upper]` interval that a host sampler
//! can query when proposing new parameter values. Bounds are declarations,
//! not constraints: nothing in this crate clamps or rejects a value that
//! falls outside them.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower <= upper` and neither endpoint is NaN.
//! - The interval is closed; infinite or `f64::MAX` endpoints are allowed.
//! - One interval applies uniformly to every dimension of a parameter.
use crate::parameter::errors::{ParamError, ParamResult};

/// Bounds — closed interval `[lower, upper]` declared on a parameter.
///
/// Fields
/// ------
/// - `lower`: `f64`
///   Smallest admissible value (inclusive).
/// - `upper`: `f64`
///   Largest admissible value (inclusive).
///
/// Invariants
/// ----------
/// - `lower <= upper`, both non-NaN, when built through [`Bounds::new`].
///
/// Notes
/// -----
/// - Fields are public so that compile-time tables of declared bounds can be
///   written as struct literals; such literals must respect the invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl Bounds {
    /// Construct validated bounds.
    ///
    /// Errors
    /// ------
    /// - `ParamError::InvalidBounds`
    ///   Returned when either endpoint is NaN or when `lower > upper`.
    pub fn new(lower: f64, upper: f64) -> ParamResult<Self> {
        if lower.is_nan() || upper.is_nan() {
            return Err(ParamError::InvalidBounds {
                lower,
                upper,
                reason: "Bounds must not be NaN.",
            });
        }
        if lower > upper {
            return Err(ParamError::InvalidBounds {
                lower,
                upper,
                reason: "Lower bound must not exceed upper bound.",
            });
        }
        Ok(Bounds { lower, upper })
    }

    /// Whether `value` lies inside the closed interval. NaN is never inside.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}
