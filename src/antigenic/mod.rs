//! antigenic — split antigenic-drift prior for isolate locations.
//!
//! Purpose
//! -------
//! Score a set of `D`-dimensional antigenic coordinates against a drift
//! trajectory that moves linearly along AG1 until a split time and then
//! forks into two mirror-image branches in the (AG1, AG2) plane. Every other
//! coordinate is shrunk toward zero.
//!
//! Layout
//! ------
//! - `core`: trajectory geometry, SSR, Gaussian kernel, dirty flag, cache,
//!   bounds, and shape validation.
//! - [`models`]: [`AntigenicSplitPrior`], the [`ModelLikelihood`] protocol,
//!   and [`SplitPriorSlots`].
//! - [`errors`]: [`SplitPriorError`] and the `SplitResult` alias.
//!
//! Downstream usage
//! ----------------
//! - Build parameters with [`crate::parameter`], keep clones for the host,
//!   construct the prior, then drive it with `store_state` → mutate →
//!   `log_likelihood` → `restore_state` / `accept_state`.
//! - `use antigenic_drift::antigenic::prelude::*;` pulls in the common types.

pub mod core;
pub mod errors;
pub mod models;

pub use self::errors::{SplitPriorError, SplitResult};
pub use self::models::{AntigenicSplitPrior, ModelLikelihood, SplitPriorSlots};

pub mod prelude {
    pub use super::core::{Branch, SplitPriorInputs, TrajectoryParams};
    pub use super::errors::{SplitPriorError, SplitResult};
    pub use super::models::{AntigenicSplitPrior, ModelLikelihood, SplitPriorSlots};
    pub use crate::parameter::{Bounds, ChangeEvent, ChangeKind, ChangeListener, MatrixParameter, Parameter};
}
