//! Item count providers.
//!
//! The controller never owns row data. It only asks its source how many rows
//! the host widget currently shows, whenever a bounds check or bulk operation
//! needs it.

use std::cell::RefCell;
use std::rc::Rc;

/// Something that knows how many rows the host list currently has.
pub trait ItemSource {
    /// Current number of rows.
    fn item_count(&self) -> usize;
}

/// A fixed row count.
impl ItemSource for usize {
    fn item_count(&self) -> usize {
        *self
    }
}

impl<T> ItemSource for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }
}

impl<T> ItemSource for [T] {
    fn item_count(&self) -> usize {
        self.len()
    }
}

/// Rows shared with the host widget, which may push or remove items
/// while the controller holds on to them.
impl<S: ItemSource + ?Sized> ItemSource for Rc<RefCell<S>> {
    fn item_count(&self) -> usize {
        self.borrow().item_count()
    }
}

impl<S: ItemSource + ?Sized> ItemSource for &S {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }
}

/// Adapts a closure into an [`ItemSource`].
///
/// ```
/// use rowpick::{FnSource, ItemSource};
///
/// let rows = vec!["a", "b", "c"];
/// let source = FnSource(|| rows.len());
/// assert_eq!(source.item_count(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F: Fn() -> usize> ItemSource for FnSource<F> {
    fn item_count(&self) -> usize {
        (self.0)()
    }
}
