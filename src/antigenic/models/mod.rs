//! models — the split prior, its likelihood contract, and slot-based
//! assembly.
//!
//! - [`AntigenicSplitPrior`]: cached log-likelihood over host-owned
//!   parameters.
//! - [`ModelLikelihood`]: evaluate / store / restore protocol shared with the
//!   sampling host.
//! - [`SplitPriorSlots`]: build a prior from inputs addressed by slot name.

pub mod slots;
pub mod split_prior;
pub mod traits;

pub use self::slots::SplitPriorSlots;
pub use self::split_prior::AntigenicSplitPrior;
pub use self::traits::ModelLikelihood;
