//! Validation helpers for split-prior construction and evaluation.
//!
//! Each helper checks a single invariant and returns a typed
//! [`SplitPriorError`] instead of panicking. Constructors call the shape
//! helpers once; evaluation calls [`validate_precision`] and
//! [`validate_isolate_lengths`] because the host may change values (or
//! resize parameters) between evaluations.
use crate::{
    antigenic::{
        core::inputs::SplitPriorInputs,
        errors::{SplitPriorError, SplitResult},
    },
    parameter::MatrixParameter,
};

/// Check that the locations have at least one coordinate and that every row
/// has exactly `column_count()` coordinates. Returns `(N, D)`.
///
/// Errors
/// ------
/// - `SplitPriorError::ZeroDimension` when `D == 0`.
/// - `SplitPriorError::RaggedLocations` for the first mis-sized row.
pub fn validate_locations(locations: &MatrixParameter) -> SplitResult<(usize, usize)> {
    let dimension = locations.column_count();
    if dimension == 0 {
        return Err(SplitPriorError::ZeroDimension);
    }
    for (row, p) in locations.rows().iter().enumerate() {
        let actual = p.dimension();
        if actual != dimension {
            return Err(SplitPriorError::RaggedLocations { row, expected: dimension, actual });
        }
    }
    Ok((locations.row_count(), dimension))
}

/// Check construction-time shapes of every input. Returns `(N, D)`.
///
/// The assignment is not checked: the prior resizes it to `N`.
///
/// Errors
/// ------
/// - Anything from [`validate_locations`].
/// - `SplitPriorError::DimensionMismatch` when `dates.dimension() != N`.
/// - `SplitPriorError::EmptyHyperparameter` when a scalar input is empty.
pub fn validate_inputs(inputs: &SplitPriorInputs) -> SplitResult<(usize, usize)> {
    let (count, dimension) = validate_locations(&inputs.locations)?;
    let dates = inputs.dates.dimension();
    if dates != count {
        return Err(SplitPriorError::DimensionMismatch {
            name: "dates",
            expected: count,
            actual: dates,
        });
    }
    for (name, p) in inputs.hyperparameters() {
        if p.dimension() == 0 {
            return Err(SplitPriorError::EmptyHyperparameter { name });
        }
    }
    Ok((count, dimension))
}

/// Check that per-isolate vectors still have one entry per isolate.
pub fn validate_isolate_lengths(count: usize, dates: usize, assignments: usize) -> SplitResult<()> {
    if dates != count {
        return Err(SplitPriorError::DimensionMismatch {
            name: "dates",
            expected: count,
            actual: dates,
        });
    }
    if assignments != count {
        return Err(SplitPriorError::DimensionMismatch {
            name: "splitAssignment",
            expected: count,
            actual: assignments,
        });
    }
    Ok(())
}

/// Precision must be finite and strictly positive.
pub fn validate_precision(value: f64) -> SplitResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SplitPriorError::InvalidPrecision { value });
    }
    Ok(())
}
