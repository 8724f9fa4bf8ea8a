//! Sum of squared residuals between observed and expected locations.
//!
//! Purpose
//! -------
//! Reduce all isolates' locations to a single non-negative SSR against the
//! forking trajectory:
//!
//! `SSR = Σᵢ ((L[i,0] − AG1)² + [D ≥ 2](L[i,1] − AG2)² + Σ_{j≥2} L[i,j]²)`.
//!
//! Key behaviors
//! -------------
//! - [`isolate_squared_residual`]: one isolate's contribution from a borrowed
//!   coordinate slice; allocation-free.
//! - [`sum_of_squared_residuals`]: walks the location rows in lockstep with
//!   dates and assignments, re-checking each row's dimension.
//!
//! Conventions
//! -----------
//! - `D = 1` keeps only the AG1 term, `D = 2` adds the AG2 term, and `D ≥ 3`
//!   shrinks every extra coordinate toward zero.
//! - Callers guarantee `dates.len() == assignments.len() == rows`; see
//!   `validation::validate_isolate_lengths`.
use crate::{
    antigenic::{
        core::trajectory::{Branch, TrajectoryParams},
        errors::{SplitPriorError, SplitResult},
    },
    parameter::MatrixParameter,
};

/// Squared residual of one isolate's `coords` against the trajectory.
///
/// Returns `0.0` for an empty slice.
#[inline]
pub fn isolate_squared_residual(
    coords: &[f64], date: f64, branch: Branch, params: &TrajectoryParams,
) -> f64 {
    let Some((&ag1, rest)) = coords.split_first() else {
        return 0.0;
    };
    let r1 = ag1 - params.expected_ag1(date);
    let mut ssr = r1 * r1;

    if let Some((&ag2, extra)) = rest.split_first() {
        let r2 = ag2 - params.expected_ag2(date, branch);
        ssr += r2 * r2;
        ssr += extra.iter().map(|x| x * x).sum::<f64>();
    }
    ssr
}

/// Total SSR over every location row.
///
/// Parameters
/// ----------
/// - `locations`: one row parameter per isolate.
/// - `dates`, `assignments`: per-isolate slices aligned with the rows.
/// - `params`: trajectory snapshot for this evaluation.
/// - `dimension`: embedding dimension fixed when the prior was built.
///
/// Errors
/// ------
/// - `SplitPriorError::RaggedLocations` if a row no longer has `dimension`
///   coordinates.
/// - `SplitPriorError::DimensionMismatch` if `dates` or `assignments` are
///   shorter than the number of rows.
pub fn sum_of_squared_residuals(
    locations: &MatrixParameter, dates: &[f64], assignments: &[f64], params: &TrajectoryParams,
    dimension: usize,
) -> SplitResult<f64> {
    let rows = locations.rows();
    if dates.len() < rows.len() {
        return Err(SplitPriorError::DimensionMismatch {
            name: "dates",
            expected: rows.len(),
            actual: dates.len(),
        });
    }
    if assignments.len() < rows.len() {
        return Err(SplitPriorError::DimensionMismatch {
            name: "splitAssignment",
            expected: rows.len(),
            actual: assignments.len(),
        });
    }

    let mut ssr = 0.0;
    for (row, ((p, &date), &assignment)) in rows.iter().zip(dates).zip(assignments).enumerate() {
        let branch = Branch::from_assignment(assignment);
        ssr += p.with_values(|coords| {
            if coords.len() != dimension {
                return Err(SplitPriorError::RaggedLocations {
                    row,
                    expected: dimension,
                    actual: coords.len(),
                });
            }
            Ok(isolate_squared_residual(coords, date, branch, params))
        })?;
    }
    Ok(ssr)
}
