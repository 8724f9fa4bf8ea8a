//! parameter — host-owned numeric parameters with change notification.
//!
//! Purpose
//! -------
//! Provide the parameter substrate a Markov-chain host mutates and the
//! likelihoods in this crate read: shared scalar/vector parameters, matrices
//! of row parameters, advisory bounds, and a synchronous observer channel.
//!
//! Key behaviors
//! -------------
//! - [`Parameter`]: shared handle to a named `f64` vector with labels,
//!   bounds, and listeners.
//! - [`MatrixParameter`]: a fixed list of row parameters with a declared
//!   column count.
//! - [`Bounds`]: closed advisory interval, queried but never enforced.
//! - [`ChangeListener`] / [`ChangeEvent`] / [`ChangeKind`]: the notification
//!   channel used to invalidate cached likelihoods.
//!
//! Invariants & assumptions
//! ------------------------
//! - Single-threaded: handles use `Rc<RefCell<_>>`, so every chain owns its
//!   own parameters and likelihoods.
//! - Listeners are invoked after the write is applied, in registration order,
//!   on the writing thread.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover indexing errors, notification vs.
//!   quiet writes, labels, bounds, and matrix row handling.

pub mod bounds;
pub mod errors;
pub mod events;
pub mod matrix;
pub mod variable;

pub use self::bounds::Bounds;
pub use self::errors::{ParamError, ParamResult};
pub use self::events::{ChangeEvent, ChangeKind, ChangeListener};
pub use self::matrix::MatrixParameter;
pub use self::variable::Parameter;
