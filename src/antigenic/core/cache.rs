//! Gaussian log-likelihood kernel and its store/restore cache.
//!
//! Purpose
//! -------
//! Turn an SSR into the log-likelihood kernel
//!
//! `ℓ = (N / 2)·ln τ − (τ / 2)·SSR`
//!
//! and hold the cached / stored values that let a Metropolis–Hastings host
//! evaluate speculative moves cheaply.
//!
//! Key behaviors
//! -------------
//! - [`log_likelihood_kernel`]: validates τ and applies the formula. The
//!   `ln τ` coefficient is `N / 2`, not `N·D / 2`, and the `2π` constant is
//!   omitted.
//! - [`LikelihoodCache::get_or_compute`]: returns the cached value while the
//!   [`DirtyFlag`] is clean; otherwise recomputes, caches, and clears the
//!   flag. A failed recompute leaves both the cache and the flag untouched.
//! - [`LikelihoodCache::store`] / [`LikelihoodCache::restore`]: snapshot and
//!   roll back the cached value; `restore` also marks the flag dirty so the
//!   next read recomputes against whatever values the host restored.
//!
//! Invariants & assumptions
//! ------------------------
//! - Clean flag ⇒ the cached value equals a fresh recompute, provided every
//!   input write went through a notifying setter.
//! - The cache snapshots only the derived value; parameter values are the
//!   host's responsibility.
use crate::antigenic::{
    core::{listener::DirtyFlag, validation::validate_precision},
    errors::SplitResult,
};
use log::trace;

/// Gaussian log-likelihood kernel for `count` observations with shared
/// precision.
///
/// Errors
/// ------
/// - `SplitPriorError::InvalidPrecision` when `precision` is not finite or
///   not strictly positive.
pub fn log_likelihood_kernel(count: usize, precision: f64, ssr: f64) -> SplitResult<f64> {
    validate_precision(precision)?;
    Ok(0.5 * precision.ln() * count as f64 - 0.5 * precision * ssr)
}

/// LikelihoodCache — last computed and last stored log-likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LikelihoodCache {
    log_likelihood: f64,
    stored_log_likelihood: f64,
}

impl LikelihoodCache {
    pub fn new() -> LikelihoodCache {
        LikelihoodCache::default()
    }

    /// Last cached value; may be stale when the flag is dirty.
    pub fn cached(&self) -> f64 {
        self.log_likelihood
    }

    pub fn stored(&self) -> f64 {
        self.stored_log_likelihood
    }

    /// Return the cached value, recomputing first when `flag` is dirty.
    pub fn get_or_compute(
        &mut self, flag: &DirtyFlag, compute: impl FnOnce() -> SplitResult<f64>,
    ) -> SplitResult<f64> {
        if flag.is_dirty() {
            let value = compute()?;
            trace!("recomputed log-likelihood: {value}");
            self.log_likelihood = value;
            flag.clear();
        }
        Ok(self.log_likelihood)
    }

    /// Snapshot the cached value. The flag is left as it is.
    pub fn store(&mut self) {
        self.stored_log_likelihood = self.log_likelihood;
    }

    /// Roll the cached value back to the snapshot and mark `flag` dirty.
    pub fn restore(&mut self, flag: &DirtyFlag) {
        self.log_likelihood = self.stored_log_likelihood;
        flag.mark();
    }
}
