//! Scalar / vector parameter handles with change notification.
//!
//! Purpose
//! -------
//! Model the host sampler's numeric parameters: a named vector of `f64`
//! values, optional per-coordinate labels, optional advisory bounds, and a
//! list of listeners notified on every write. Scalars are vectors of
//! dimension one.
//!
//! Key behaviors
//! -------------
//! - [`Parameter`] is a cheap-to-clone *handle*; clones share storage, so
//!   the host and any likelihood built on the parameter see the same values.
//! - Notifying writers (`set_value`, `set_values`, `set_dimension`) call
//!   every registered [`ChangeListener`] after the write has been applied
//!   and the internal borrow released.
//! - Quiet writers (`set_value_quietly`) update storage without notifying;
//!   they exist for initialization code that must not trigger invalidation.
//! - Listeners are held weakly: a subscription lives exactly as long as the
//!   subscriber's own `Rc`, and dead entries are pruned on the next write
//!   or count.
//!
//! Invariants & assumptions
//! ------------------------
//! - `dimension_names`, when present, always has length `dimension()`.
//! - Handles are single-threaded (`Rc<RefCell<_>>`); they are neither `Send`
//!   nor `Sync`, and a chain that runs on its own thread must own its own
//!   parameters.
//!
//! Conventions
//! -----------
//! - Indices are 0-based. Unnamed coordinates report the default label
//!   `"{id}{i + 1}"` (1-based suffix).
//! - Reads of out-of-range indices are surfaced as
//!   [`ParamError::IndexOutOfRange`] rather than panics.
use crate::parameter::{
    bounds::Bounds,
    errors::{ParamError, ParamResult},
    events::{ChangeEvent, ChangeKind, ChangeListener},
};
use ndarray::Array1;
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

struct ParameterState {
    id: Rc<str>,
    values: Vec<f64>,
    dimension_names: Option<Vec<String>>,
    bounds: Option<Bounds>,
    listeners: Vec<Weak<dyn ChangeListener>>,
}

/// Parameter — shared handle to a named vector of `f64` values.
///
/// Purpose
/// -------
/// Give the host sampler and the likelihoods it drives a common view of a
/// parameter's values, labels, bounds, and listeners.
///
/// Invariants
/// ----------
/// - All clones of a handle alias the same storage.
/// - Listeners are called in registration order.
///
/// Performance
/// -----------
/// - Cloning is O(1) (reference-count increment).
/// - `with_values` gives borrow-based, allocation-free read access for hot
///   loops; `values` copies.
#[derive(Clone)]
pub struct Parameter {
    inner: Rc<RefCell<ParameterState>>,
}

impl Parameter {
    /// Create a parameter with the given identifier and initial values.
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Parameter {
        let id: String = id.into();
        let state = ParameterState {
            id: Rc::from(id),
            values,
            dimension_names: None,
            bounds: None,
            listeners: Vec::new(),
        };
        Parameter { inner: Rc::new(RefCell::new(state)) }
    }

    /// Create a dimension-one parameter.
    pub fn scalar(id: impl Into<String>, value: f64) -> Parameter {
        Parameter::new(id, vec![value])
    }

    /// Create a parameter from an owned `ndarray` vector.
    pub fn from_array(id: impl Into<String>, values: Array1<f64>) -> Parameter {
        Parameter::new(id, values.to_vec())
    }

    /// Identifier shared by every event this parameter emits.
    pub fn id(&self) -> Rc<str> {
        Rc::clone(&self.inner.borrow().id)
    }

    pub fn dimension(&self) -> usize {
        self.inner.borrow().values.len()
    }

    /// Read the value at `index`.
    ///
    /// Errors
    /// ------
    /// - `ParamError::IndexOutOfRange` when `index >= dimension()`.
    pub fn value(&self, index: usize) -> ParamResult<f64> {
        let state = self.inner.borrow();
        state.values.get(index).copied().ok_or_else(|| ParamError::IndexOutOfRange {
            id: state.id.to_string(),
            index,
            dimension: state.values.len(),
        })
    }

    /// Copy of all values.
    pub fn values(&self) -> Vec<f64> {
        self.inner.borrow().values.clone()
    }

    /// Borrow the values for the duration of `f`.
    ///
    /// Panics
    /// ------
    /// - If `f` writes to this same parameter (`RefCell` borrow violation).
    pub fn with_values<R>(&self, f: impl FnOnce(&[f64]) -> R) -> R {
        let state = self.inner.borrow();
        f(&state.values)
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(self.values())
    }

    /// Overwrite one coordinate and notify listeners with
    /// [`ChangeKind::ValueChanged`].
    pub fn set_value(&self, index: usize, value: f64) -> ParamResult<()> {
        self.set_value_quietly(index, value)?;
        self.fire(Some(index), ChangeKind::ValueChanged);
        Ok(())
    }

    /// Overwrite one coordinate without notifying listeners.
    pub fn set_value_quietly(&self, index: usize, value: f64) -> ParamResult<()> {
        let mut state = self.inner.borrow_mut();
        let dimension = state.values.len();
        if index >= dimension {
            return Err(ParamError::IndexOutOfRange { id: state.id.to_string(), index, dimension });
        }
        state.values[index] = value;
        Ok(())
    }

    /// Overwrite every coordinate at once and notify listeners with
    /// [`ChangeKind::AllValuesChanged`].
    ///
    /// Errors
    /// ------
    /// - `ParamError::ValuesLengthMismatch` when `values.len() != dimension()`.
    pub fn set_values(&self, values: &[f64]) -> ParamResult<()> {
        {
            let mut state = self.inner.borrow_mut();
            if values.len() != state.values.len() {
                return Err(ParamError::ValuesLengthMismatch {
                    id: state.id.to_string(),
                    expected: state.values.len(),
                    actual: values.len(),
                });
            }
            state.values.copy_from_slice(values);
        }
        self.fire(None, ChangeKind::AllValuesChanged);
        Ok(())
    }

    /// Resize the parameter, padding new coordinates with `0.0`, and notify
    /// listeners with [`ChangeKind::DimensionChanged`].
    ///
    /// Dimension names are truncated or padded with default labels so that
    /// the length invariant keeps holding.
    pub fn set_dimension(&self, dimension: usize) {
        {
            let mut state = self.inner.borrow_mut();
            state.values.resize(dimension, 0.0);
            let id = Rc::clone(&state.id);
            if let Some(names) = state.dimension_names.as_mut() {
                let old_len = names.len();
                names.truncate(dimension);
                names.extend((old_len..dimension).map(|i| default_label(&id, i)));
            }
        }
        self.fire(None, ChangeKind::DimensionChanged);
    }

    /// Label of coordinate `index`; falls back to `"{id}{index + 1}"`.
    pub fn dimension_name(&self, index: usize) -> ParamResult<String> {
        let state = self.inner.borrow();
        if index >= state.values.len() {
            return Err(ParamError::IndexOutOfRange {
                id: state.id.to_string(),
                index,
                dimension: state.values.len(),
            });
        }
        Ok(match &state.dimension_names {
            Some(names) => names[index].clone(),
            None => default_label(&state.id, index),
        })
    }

    /// Install per-coordinate labels.
    ///
    /// Errors
    /// ------
    /// - `ParamError::DimensionNamesMismatch` when `names.len() != dimension()`.
    pub fn set_dimension_names(&self, names: Vec<String>) -> ParamResult<()> {
        let mut state = self.inner.borrow_mut();
        if names.len() != state.values.len() {
            return Err(ParamError::DimensionNamesMismatch {
                id: state.id.to_string(),
                expected: state.values.len(),
                actual: names.len(),
            });
        }
        state.dimension_names = Some(names);
        Ok(())
    }

    /// Declare advisory bounds. Replaces any earlier declaration; does not
    /// notify listeners and does not touch the current values.
    pub fn add_bounds(&self, bounds: Bounds) {
        self.inner.borrow_mut().bounds = Some(bounds);
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.inner.borrow().bounds
    }

    /// `true` when no bounds are declared or every value lies inside them.
    pub fn is_within_bounds(&self) -> bool {
        let state = self.inner.borrow();
        match state.bounds {
            Some(b) => state.values.iter().all(|&v| b.contains(v)),
            None => true,
        }
    }

    /// Register a listener; it is called after every notifying write for as
    /// long as some other `Rc` keeps it alive.
    pub fn add_listener(&self, listener: Rc<dyn ChangeListener>) {
        self.inner.borrow_mut().listeners.push(Rc::downgrade(&listener));
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        let mut state = self.inner.borrow_mut();
        state.listeners.retain(|l| l.strong_count() > 0);
        state.listeners.len()
    }

    /// Whether two handles alias the same storage.
    pub fn ptr_eq(&self, other: &Parameter) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn fire(&self, index: Option<usize>, kind: ChangeKind) {
        // Snapshot under the borrow, call without it: listeners may read us.
        let (parameter, listeners) = {
            let mut state = self.inner.borrow_mut();
            state.listeners.retain(|l| l.strong_count() > 0);
            let live: Vec<Rc<dyn ChangeListener>> =
                state.listeners.iter().filter_map(Weak::upgrade).collect();
            (Rc::clone(&state.id), live)
        };
        let event = ChangeEvent { parameter, index, kind };
        for listener in &listeners {
            listener.variable_changed(&event);
        }
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("Parameter")
            .field("id", &state.id)
            .field("values", &state.values)
            .field("bounds", &state.bounds)
            .field("listeners", &state.listeners.iter().filter(|l| l.strong_count() > 0).count())
            .finish()
    }
}

fn default_label(id: &str, index: usize) -> String {
    format!("{id}{}", index + 1)
}
