//! Likelihood contract between a Markov-chain host and a cached model.
//!
//! The host drives every implementation with the same protocol:
//!
//! 1. `store_state` before a speculative move,
//! 2. mutate parameters (listeners invalidate the cache),
//! 3. `log_likelihood` to score the proposal,
//! 4. on rejection: roll parameter values back, then `restore_state`;
//!    on acceptance: `accept_state`.
//!
//! Implementations snapshot only their derived cache; parameter values are
//! the host's to snapshot.
use crate::{antigenic::errors::SplitResult, parameter::ChangeEvent};

pub trait ModelLikelihood {
    /// Stable model identifier.
    fn model_name(&self) -> &str;

    /// Current log-likelihood; recomputed only when the cache is stale.
    fn log_likelihood(&mut self) -> SplitResult<f64>;

    /// Force the next `log_likelihood` call to recompute.
    fn make_dirty(&mut self);

    fn store_state(&mut self);

    /// Roll the cached value back to the last `store_state` and force a
    /// recompute on the next read.
    fn restore_state(&mut self);

    fn accept_state(&mut self) {}

    /// Change callback for hosts that route parameter events by hand.
    fn variable_changed(&mut self, event: &ChangeEvent);
}
