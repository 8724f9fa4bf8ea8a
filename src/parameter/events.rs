//! Change notifications emitted by parameters.
//!
//! A parameter keeps a list of [`ChangeListener`]s and calls each of them
//! synchronously, on the mutating thread, after every notifying write. The
//! event says which parameter changed, which coordinate (if a single one),
//! and what kind of change it was.
use std::rc::Rc;

/// Kind of change carried by a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A single coordinate changed value.
    ValueChanged,
    /// Every coordinate may have changed value.
    AllValuesChanged,
    /// The parameter was resized.
    DimensionChanged,
}

/// Notification delivered to listeners after a parameter write.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// Identifier of the parameter that changed.
    pub parameter: Rc<str>,
    /// Coordinate that changed, or `None` for whole-parameter changes.
    pub index: Option<usize>,
    /// What kind of change happened.
    pub kind: ChangeKind,
}

/// Observer registered on a parameter.
///
/// Callbacks run while the parameter is *not* borrowed, so an implementation
/// may read the parameter that fired the event. Implementations must not
/// write to that parameter from inside the callback.
pub trait ChangeListener {
    fn variable_changed(&self, event: &ChangeEvent);
}
