//! core — trajectory, residual, kernel, and cache building blocks of the
//! split antigenic-drift prior.
//!
//! Purpose
//! -------
//! Collect the pure numerical pieces (expected trajectory, SSR reduction,
//! Gaussian kernel) and the small stateful pieces (bounds table, dirty flag,
//! store/restore cache) that `antigenic::models` assembles into a prior.
//!
//! Key behaviors
//! -------------
//! - [`TrajectoryParams`] / [`Branch`]: expected AG1/AG2 under the fork.
//! - [`sum_of_squared_residuals`]: SSR over all isolates for any `D ≥ 1`.
//! - [`log_likelihood_kernel`] and [`LikelihoodCache`]: `ℓ` and its
//!   clean/dirty cache with snapshot/rollback.
//! - [`DirtyFlag`]: the listener registered on every input.
//! - [`HyperparameterBounds`]: declared ranges for the hyperparameters.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; axis 0 is AG1, axis 1 is AG2.
//! - This module avoids I/O; it logs only at `trace` level (invalidation
//!   and recompute events).

pub mod bounds;
pub mod cache;
pub mod inputs;
pub mod listener;
pub mod residuals;
pub mod trajectory;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bounds::{
    ASSIGNMENT_BOUNDS, HyperparameterBounds, PRECISION_BOUNDS, SLOPE_BOUNDS, SPLIT_ANGLE_BOUNDS,
    SPLIT_TIME_BOUNDS,
};
pub use self::cache::{LikelihoodCache, log_likelihood_kernel};
pub use self::inputs::SplitPriorInputs;
pub use self::listener::DirtyFlag;
pub use self::residuals::{isolate_squared_residual, sum_of_squared_residuals};
pub use self::trajectory::{Branch, TrajectoryParams};
pub use self::validation::{
    validate_inputs, validate_isolate_lengths, validate_locations, validate_precision,
};
