//! Listener slots and the events delivered to them.
//!
//! Each event kind has at most one listener. Registering a new one drops
//! the previous closure.

use std::fmt;

use crate::mode::{BulkOp, Mode};

/// A change to the multi-selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelectEvent {
    /// A single row was selected or deselected.
    Toggled {
        /// Row index.
        index: usize,
        /// New selection state of the row.
        selected: bool,
    },
    /// The selection was replaced by a bulk operation.
    Bulk {
        /// Which operation ran.
        op: BulkOp,
        /// Snapshot of the selection afterwards, in insertion order.
        selected: Vec<usize>,
    },
}

/// Which rows the host must re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Every bound row.
    Full,
}

pub(crate) type ClickFn = Box<dyn FnMut(usize)>;
pub(crate) type LongClickFn = Box<dyn FnMut(usize) -> bool>;
pub(crate) type SingleSelectFn = Box<dyn FnMut(usize)>;
pub(crate) type MultiSelectFn = Box<dyn FnMut(&MultiSelectEvent)>;
pub(crate) type OutOfMaxFn = Box<dyn FnMut(usize)>;
pub(crate) type ModeChangedFn = Box<dyn FnMut(Mode, Mode)>;
pub(crate) type InvalidateFn = Box<dyn FnMut(&Invalidation)>;

/// Registered callbacks, one optional slot per event kind.
#[derive(Default)]
pub(crate) struct Listeners {
    pub click: Option<ClickFn>,
    pub long_click: Option<LongClickFn>,
    pub single_select: Option<SingleSelectFn>,
    pub multi_select: Option<MultiSelectFn>,
    pub out_of_max: Option<OutOfMaxFn>,
    pub mode_changed: Option<ModeChangedFn>,
    pub invalidate: Option<InvalidateFn>,
}

impl Listeners {
    pub fn clicked(&mut self, index: usize) {
        if let Some(listener) = self.click.as_mut() {
            listener(index);
        }
    }

    pub fn long_clicked(&mut self, index: usize) -> bool {
        self.long_click
            .as_mut()
            .is_some_and(|listener| listener(index))
    }

    pub fn single_selected(&mut self, index: usize) {
        if let Some(listener) = self.single_select.as_mut() {
            listener(index);
        }
    }

    pub fn multi_selected(&mut self, event: &MultiSelectEvent) {
        if let Some(listener) = self.multi_select.as_mut() {
            listener(event);
        }
    }

    pub fn out_of_max(&mut self, index: usize) {
        if let Some(listener) = self.out_of_max.as_mut() {
            listener(index);
        }
    }

    pub fn mode_changed(&mut self, old: Mode, new: Mode) {
        if let Some(listener) = self.mode_changed.as_mut() {
            listener(old, new);
        }
    }

    pub fn invalidated(&mut self, invalidation: &Invalidation) {
        if let Some(listener) = self.invalidate.as_mut() {
            listener(invalidation);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("click", &self.click.is_some())
            .field("long_click", &self.long_click.is_some())
            .field("single_select", &self.single_select.is_some())
            .field("multi_select", &self.multi_select.is_some())
            .field("out_of_max", &self.out_of_max.is_some())
            .field("mode_changed", &self.mode_changed.is_some())
            .field("invalidate", &self.invalidate.is_some())
            .finish()
    }
}
