//! Dirty flag shared between a cached likelihood and its parameters.
//!
//! The prior owns one `Rc<DirtyFlag>` and registers clones of it on every
//! input parameter. A parameter write calls [`ChangeListener::variable_changed`],
//! which only sets the flag; the next evaluation sees it and recomputes.
//! Parameters hold the flag weakly and the prior holds it strongly, so
//! dropping the prior ends every subscription and there is no cycle.
use crate::parameter::{ChangeEvent, ChangeListener};
use log::trace;
use std::cell::Cell;

#[derive(Debug)]
pub struct DirtyFlag {
    dirty: Cell<bool>,
}

impl DirtyFlag {
    /// A new flag starts dirty: nothing has been computed yet.
    pub fn new() -> DirtyFlag {
        DirtyFlag { dirty: Cell::new(true) }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark(&self) {
        self.dirty.set(true);
    }

    pub fn clear(&self) {
        self.dirty.set(false);
    }
}

impl Default for DirtyFlag {
    fn default() -> Self {
        DirtyFlag::new()
    }
}

impl ChangeListener for DirtyFlag {
    fn variable_changed(&self, event: &ChangeEvent) {
        trace!(
            "invalidating cached likelihood: '{}' {:?} at {:?}",
            event.parameter, event.kind, event.index
        );
        self.mark();
    }
}
