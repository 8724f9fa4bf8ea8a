//! Expected antigenic trajectory under a forking linear drift.
//!
//! Purpose
//! -------
//! Map an isolate's sampling date and branch label to its expected position
//! in antigenic space. Drift runs along AG1 at rate β until the elapsed time
//! reaches the split time `s`; afterwards two sub-lineages leave the AG1 axis
//! symmetrically at half-angle ±θ.
//!
//! Key behaviors
//! -------------
//! - [`TrajectoryParams::expected_ag1`]:
//!   `β·Δ` before the split, `β·s + β·(Δ − s)·cos θ` after.
//! - [`TrajectoryParams::expected_ag2`]:
//!   `0` before the split, `±β·(Δ − s)·sin θ` after, `+` for
//!   [`Branch::Upper`] and `−` for [`Branch::Lower`].
//! - Every coordinate past AG2 is expected at `0`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `Δ = date − t₀` where `t₀` is the earliest date captured when the prior
//!   was built; it is not refreshed when dates change afterwards.
//! - The split point itself (`Δ == s`) belongs to the pre-split segment.
//! - Pure functions: no I/O, no allocation except
//!   [`TrajectoryParams::expected_location`].
use ndarray::Array1;

/// Branch — which post-split sub-lineage an isolate follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Assignment 0; AG2 is `+magnitude` after the split.
    Upper,
    /// Assignment 1; AG2 is `−magnitude` after the split.
    Lower,
}

impl Branch {
    /// Coerce a real-valued assignment into a branch.
    ///
    /// The value is truncated toward zero; an integer part of exactly `1`
    /// selects [`Branch::Lower`], anything else (including NaN, negatives,
    /// and values ≥ 2) selects [`Branch::Upper`].
    pub fn from_assignment(value: f64) -> Branch {
        if value.trunc() == 1.0 { Branch::Lower } else { Branch::Upper }
    }

    /// Sign applied to the AG2 magnitude.
    pub fn sign(self) -> f64 {
        match self {
            Branch::Upper => 1.0,
            Branch::Lower => -1.0,
        }
    }
}

/// TrajectoryParams — snapshot of the drift hyperparameters for one
/// evaluation.
///
/// Fields
/// ------
/// - `slope`: β, drift rate along AG1.
/// - `split_time`: `s`, elapsed time of the fork.
/// - `split_angle`: θ, half-angle between the branches (radians).
/// - `earliest_date`: `t₀`, origin of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryParams {
    pub slope: f64,
    pub split_time: f64,
    pub split_angle: f64,
    pub earliest_date: f64,
}

impl TrajectoryParams {
    pub fn new(slope: f64, split_time: f64, split_angle: f64, earliest_date: f64) -> Self {
        TrajectoryParams { slope, split_time, split_angle, earliest_date }
    }

    /// Elapsed time since the earliest isolate.
    #[inline]
    pub fn elapsed(&self, date: f64) -> f64 {
        date - self.earliest_date
    }

    #[inline]
    pub fn expected_ag1(&self, date: f64) -> f64 {
        let time = self.elapsed(date);
        if time <= self.split_time {
            self.slope * time
        } else {
            self.slope * self.split_time
                + self.slope * (time - self.split_time) * self.split_angle.cos()
        }
    }

    #[inline]
    pub fn expected_ag2(&self, date: f64, branch: Branch) -> f64 {
        let time = self.elapsed(date);
        if time <= self.split_time {
            return 0.0;
        }
        branch.sign() * self.slope * (time - self.split_time) * self.split_angle.sin()
    }

    /// Expected value on `axis` (0 = AG1, 1 = AG2, ≥ 2 = 0).
    pub fn expected_coordinate(&self, date: f64, branch: Branch, axis: usize) -> f64 {
        match axis {
            0 => self.expected_ag1(date),
            1 => self.expected_ag2(date, branch),
            _ => 0.0,
        }
    }

    /// Expected position in a `dimension`-dimensional embedding.
    pub fn expected_location(&self, date: f64, branch: Branch, dimension: usize) -> Array1<f64> {
        Array1::from_iter((0..dimension).map(|axis| self.expected_coordinate(date, branch, axis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Pre- and post-split AG1/AG2 values, including the split point itself.
    // - Branch sign handling and the assignment coercion policy.
    // - Zero expectation for coordinates beyond AG2.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    fn params() -> TrajectoryParams {
        TrajectoryParams::new(1.0, 30.0, FRAC_PI_2, 0.0)
    }

    #[test]
    // Purpose
    // -------
    // Before the split AG1 is linear in elapsed time and AG2 is zero on both
    // branches and for any angle.
    //
    // Given
    // -----
    // - β = 2, s = 30, t₀ = 10, dates 10, 25, 40 (Δ = 0, 15, 30).
    //
    // Expect
    // ------
    // - AG1 = 0, 30, 60 and AG2 = 0 for both branches.
    fn pre_split_is_linear_along_ag1() {
        for angle in [0.5, 1.0, FRAC_PI_2] {
            let p = TrajectoryParams::new(2.0, 30.0, angle, 10.0);
            for (date, ag1) in [(10.0, 0.0), (25.0, 30.0), (40.0, 60.0)] {
                assert!((p.expected_ag1(date) - ag1).abs() < TOL);
                assert_eq!(p.expected_ag2(date, Branch::Upper), 0.0);
                assert_eq!(p.expected_ag2(date, Branch::Lower), 0.0);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Post-split values follow the fork geometry at θ = π/2.
    //
    // Given
    // -----
    // - β = 1, s = 30, θ = π/2, t₀ = 0, date = 100 (Δ − s = 70).
    //
    // Expect
    // ------
    // - AG1 = 30 (cos θ ≈ 0), AG2 = +70 on the upper branch, −70 on the lower.
    fn post_split_forks_symmetrically() {
        let p = params();

        assert!((p.expected_ag1(100.0) - 30.0).abs() < 1e-9);
        assert!((p.expected_ag2(100.0, Branch::Upper) - 70.0).abs() < TOL);
        assert!((p.expected_ag2(100.0, Branch::Lower) + 70.0).abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // Check a general angle against the closed form.
    //
    // Given
    // -----
    // - β = 0.5, s = 20, θ = 0.8, t₀ = 1990, date = 2030 (Δ = 40).
    //
    // Expect
    // ------
    // - AG1 = 0.5·20 + 0.5·20·cos 0.8; AG2 = 0.5·20·sin 0.8.
    fn post_split_matches_closed_form_for_general_angle() {
        let p = TrajectoryParams::new(0.5, 20.0, 0.8, 1990.0);

        let ag1 = 10.0 + 10.0 * 0.8_f64.cos();
        let ag2 = 10.0 * 0.8_f64.sin();

        assert!((p.expected_ag1(2030.0) - ag1).abs() < TOL);
        assert!((p.expected_ag2(2030.0, Branch::Upper) - ag2).abs() < TOL);
    }

    #[test]
    // Purpose
    // -------
    // Pin the assignment coercion policy: truncate toward zero, `1` is the
    // lower branch, everything else the upper branch.
    //
    // Given
    // -----
    // - Assignment values covering integers, fractions, negatives, and NaN.
    //
    // Expect
    // ------
    // - Only values with integer part 1 map to `Branch::Lower`.
    fn assignment_coercion_truncates_toward_zero() {
        for v in [1.0, 1.4, 1.999] {
            assert_eq!(Branch::from_assignment(v), Branch::Lower, "value {v}");
        }
        for v in [0.0, 0.5, 0.999, -0.7, -1.0, 2.0, f64::NAN] {
            assert_eq!(Branch::from_assignment(v), Branch::Upper, "value {v}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Coordinates past AG2 are expected at zero.
    //
    // Given
    // -----
    // - The standard post-split configuration and a 4-dimensional embedding.
    //
    // Expect
    // ------
    // - `expected_location` = `[AG1, AG2, 0, 0]`.
    fn extra_dimensions_expect_zero() {
        let p = params();

        let loc = p.expected_location(100.0, Branch::Lower, 4);

        assert_eq!(loc.len(), 4);
        assert!((loc[0] - 30.0).abs() < 1e-9);
        assert!((loc[1] + 70.0).abs() < TOL);
        assert_eq!(loc[2], 0.0);
        assert_eq!(loc[3], 0.0);
    }
}
