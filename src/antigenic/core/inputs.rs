//! The seven parameters a split prior reads.
use crate::parameter::{ChangeListener, MatrixParameter, Parameter};
use std::rc::Rc;

/// SplitPriorInputs — handles to every parameter the split prior depends on.
///
/// Fields
/// ------
/// - `locations`: `N × D` observed antigenic coordinates (one row per isolate).
/// - `dates`: sampling date per isolate (dimension `N`).
/// - `slope`: drift rate β along AG1 (scalar).
/// - `precision`: Gaussian residual precision τ (scalar).
/// - `split_time`: elapsed time `s` at which the trajectory forks (scalar).
/// - `split_angle`: half-angle θ between the two branches (scalar).
/// - `assignment`: per-isolate branch label (resized to `N` by the prior).
///
/// Notes
/// -----
/// - All fields are shared handles; the host keeps its own clones and
///   mutates through them.
#[derive(Debug, Clone)]
pub struct SplitPriorInputs {
    pub locations: MatrixParameter,
    pub dates: Parameter,
    pub slope: Parameter,
    pub precision: Parameter,
    pub split_time: Parameter,
    pub split_angle: Parameter,
    pub assignment: Parameter,
}

impl SplitPriorInputs {
    /// The scalar hyperparameters paired with their slot names.
    pub fn hyperparameters(&self) -> [(&'static str, &Parameter); 4] {
        [
            ("regressionSlope", &self.slope),
            ("regressionPrecision", &self.precision),
            ("splitTime", &self.split_time),
            ("splitAngle", &self.split_angle),
        ]
    }

    /// Register `listener` on every input (every row, for the locations).
    pub fn subscribe(&self, listener: Rc<dyn ChangeListener>) {
        self.locations.add_listener(Rc::clone(&listener));
        self.dates.add_listener(Rc::clone(&listener));
        for (_, p) in self.hyperparameters() {
            p.add_listener(Rc::clone(&listener));
        }
        self.assignment.add_listener(listener);
    }
}
