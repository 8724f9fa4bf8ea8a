//! Declared admissible ranges for the split-prior hyperparameters.
//!
//! Purpose
//! -------
//! Centralize the hard-coded bounds installed on the prior's inputs at
//! construction so that host proposal kernels can query them.
//!
//! Key behaviors
//! -------------
//! - Expose each range as a [`Bounds`] constant.
//! - [`HyperparameterBounds::declared`] bundles them; `install` writes them
//!   onto a [`SplitPriorInputs`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds are advisory. Installing them never modifies or rejects a
//!   current value, and evaluation never consults them.
//! - The open-ended slope and precision ranges use `f64::MAX` as the upper
//!   endpoint and `0.0` as the lower endpoint.
use crate::{antigenic::core::inputs::SplitPriorInputs, parameter::Bounds};
use std::f64::consts::FRAC_PI_2;

/// Drift rate β: `[0, f64::MAX]`.
pub const SLOPE_BOUNDS: Bounds = Bounds { lower: 0.0, upper: f64::MAX };

/// Residual precision τ: `[0, f64::MAX]`.
pub const PRECISION_BOUNDS: Bounds = Bounds { lower: 0.0, upper: f64::MAX };

/// Split time `s`: `[20, 50]`.
pub const SPLIT_TIME_BOUNDS: Bounds = Bounds { lower: 20.0, upper: 50.0 };

/// Split half-angle θ: `[0.5, π/2]`.
pub const SPLIT_ANGLE_BOUNDS: Bounds = Bounds { lower: 0.5, upper: FRAC_PI_2 };

/// Branch assignment: `[0, 1]`.
pub const ASSIGNMENT_BOUNDS: Bounds = Bounds { lower: 0.0, upper: 1.0 };

/// HyperparameterBounds — the full table of declared ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperparameterBounds {
    pub slope: Bounds,
    pub precision: Bounds,
    pub split_time: Bounds,
    pub split_angle: Bounds,
    pub assignment: Bounds,
}

impl HyperparameterBounds {
    /// The ranges installed by every split prior.
    pub const fn declared() -> HyperparameterBounds {
        HyperparameterBounds {
            slope: SLOPE_BOUNDS,
            precision: PRECISION_BOUNDS,
            split_time: SPLIT_TIME_BOUNDS,
            split_angle: SPLIT_ANGLE_BOUNDS,
            assignment: ASSIGNMENT_BOUNDS,
        }
    }

    /// Declare these bounds on the hyperparameters and the assignment.
    pub fn install(&self, inputs: &SplitPriorInputs) {
        inputs.slope.add_bounds(self.slope);
        inputs.precision.add_bounds(self.precision);
        inputs.split_time.add_bounds(self.split_time);
        inputs.split_angle.add_bounds(self.split_angle);
        inputs.assignment.add_bounds(self.assignment);
    }
}

impl Default for HyperparameterBounds {
    fn default() -> Self {
        HyperparameterBounds::declared()
    }
}
