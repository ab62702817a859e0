//! The selection state machine.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

use crate::config::{SelectionConfig, selection_limit};
use crate::error::SelectionError;
use crate::listeners::{Invalidation, Listeners, MultiSelectEvent};
use crate::mode::{BulkOp, Mode};
use crate::selected_set::SelectedSet;
use crate::source::ItemSource;

/// Unique identifier for a controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(usize);

impl ControllerId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ControllerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__selection_{}", self.0)
    }
}

/// Visual selection state of one row, as the host needs it when binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    /// Row index.
    pub index: usize,
    /// Controller mode at the time of the query.
    pub mode: Mode,
    /// Whether the row should be drawn as selected.
    pub selected: bool,
}

/// Click, single-select and multi-select behaviour for a list widget.
///
/// The host widget forwards row activations to [`on_item_activated`] and
/// re-renders whenever the invalidate listener fires (or [`is_dirty`]
/// reports true). Rows are drawn from [`row_state`].
///
/// Listeners run synchronously while the controller is mutably borrowed.
/// A host sharing the controller through `Rc<RefCell<_>>` must not borrow
/// it again from inside a listener.
///
/// # Example
///
/// ```
/// use rowpick::{Mode, SelectionConfig, SelectionController};
///
/// let config = SelectionConfig::new(Mode::MultiSelect).max_selection_count(2);
/// let mut selection = SelectionController::new(5usize, config);
///
/// selection.on_item_activated(0);
/// selection.on_item_activated(3);
/// selection.on_item_activated(4); // cap reached, ignored
/// assert_eq!(selection.selected_set(), vec![0, 3]);
/// ```
///
/// [`on_item_activated`]: SelectionController::on_item_activated
/// [`is_dirty`]: SelectionController::is_dirty
/// [`row_state`]: SelectionController::row_state
#[derive(Debug)]
pub struct SelectionController<S: ItemSource> {
    id: ControllerId,
    source: S,
    mode: Mode,
    max_selection_count: isize,
    selected: SelectedSet,
    single_selected: usize,
    listeners: Listeners,
    dirty: bool,
}

impl<S: ItemSource> SelectionController<S> {
    /// Create a controller over the given item source.
    pub fn new(source: S, config: SelectionConfig) -> Self {
        Self {
            id: ControllerId::new(),
            source,
            mode: config.mode,
            max_selection_count: config.max_selection_count,
            selected: SelectedSet::new(),
            single_selected: 0,
            listeners: Listeners::default(),
            dirty: false,
        }
    }

    /// Create a controller in the given mode with no cap.
    pub fn with_mode(source: S, mode: Mode) -> Self {
        Self::new(source, SelectionConfig::new(mode))
    }

    /// Get the unique ID.
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Get the item source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the item source mutably, e.g. to change the rows it counts.
    ///
    /// Existing selections are kept even if the row count shrinks; call
    /// [`retain_in_bounds`](Self::retain_in_bounds) to drop stale indices.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Current number of rows.
    pub fn item_count(&self) -> usize {
        self.source.item_count()
    }

    // -------------------------------------------------------------------------
    // Listener registration
    // -------------------------------------------------------------------------

    /// Called with the row index when a row is activated in click mode.
    pub fn set_on_item_clicked(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.click = Some(Box::new(listener));
    }

    /// Called on long activation. Returns whether the press was consumed.
    pub fn set_on_item_long_clicked(&mut self, listener: impl FnMut(usize) -> bool + 'static) {
        self.listeners.long_click = Some(Box::new(listener));
    }

    /// Called with the new position whenever the single selection moves.
    pub fn set_on_single_select(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.single_select = Some(Box::new(listener));
    }

    /// Called for every per-row toggle and bulk change of the multi-selection.
    pub fn set_on_multi_select(&mut self, listener: impl FnMut(&MultiSelectEvent) + 'static) {
        self.listeners.multi_select = Some(Box::new(listener));
    }

    /// Called with the rejected index when a selection would exceed the cap.
    pub fn set_on_out_of_max(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.out_of_max = Some(Box::new(listener));
    }

    /// Called with `(old, new)` after the mode changes.
    pub fn set_on_mode_changed(&mut self, listener: impl FnMut(Mode, Mode) + 'static) {
        self.listeners.mode_changed = Some(Box::new(listener));
    }

    /// Called whenever the host must re-render rows.
    pub fn set_on_invalidate(&mut self, listener: impl FnMut(&Invalidation) + 'static) {
        self.listeners.invalidate = Some(Box::new(listener));
    }

    /// Drop every registered listener.
    pub fn clear_listeners(&mut self) {
        self.listeners = Listeners::default();
    }

    // -------------------------------------------------------------------------
    // Mode and cap
    // -------------------------------------------------------------------------

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. The selection is kept as is.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        let old = std::mem::replace(&mut self.mode, mode);
        debug!("{}: mode {} -> {}", self.id, old, mode);
        self.listeners.mode_changed(old, mode);
        self.request_full_invalidate();
    }

    /// Raw cap value; zero or negative means unlimited.
    pub fn max_selection_count(&self) -> isize {
        self.max_selection_count
    }

    /// The cap as a count, or `None` when unlimited.
    pub fn selection_limit(&self) -> Option<usize> {
        selection_limit(self.max_selection_count)
    }

    /// Change the cap, evicting the most recently selected rows if the
    /// selection no longer fits.
    pub fn set_max_selection_count(&mut self, max: isize) {
        self.max_selection_count = max;
        if let Some(limit) = self.selection_limit() {
            let evicted = self.selected.truncate(limit);
            if !evicted.is_empty() {
                debug!("{}: cap {} evicted {:?}", self.id, limit, evicted);
            }
        }
        self.request_full_invalidate();
    }

    fn is_at_cap(&self) -> bool {
        self.selection_limit()
            .is_some_and(|limit| self.selected.len() >= limit)
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    /// Handle a tap/click on the row at `index`.
    pub fn on_item_activated(&mut self, index: usize) {
        trace!("{}: activated {} in {} mode", self.id, index, self.mode);
        match self.mode {
            Mode::Click => self.listeners.clicked(index),
            Mode::SingleSelect => {
                self.move_single_selection(index);
                self.request_full_invalidate();
            }
            Mode::MultiSelect => {
                let was_selected = self.selected.contains(index);
                if !was_selected && self.is_at_cap() {
                    self.reject_out_of_max(index);
                    return;
                }
                let selected = self.selected.toggle(index);
                self.listeners
                    .multi_selected(&MultiSelectEvent::Toggled { index, selected });
                self.request_full_invalidate();
            }
        }
    }

    /// Handle a long press on the row at `index`.
    ///
    /// Returns whether the long-click listener consumed the press; false when
    /// none is registered. Selection state is never touched.
    pub fn on_item_long_activated(&mut self, index: usize) -> bool {
        trace!("{}: long activated {}", self.id, index);
        self.listeners.long_clicked(index)
    }

    fn move_single_selection(&mut self, index: usize) {
        if self.single_selected == index {
            return;
        }
        self.single_selected = index;
        self.listeners.single_selected(index);
    }

    fn reject_out_of_max(&mut self, index: usize) {
        debug!(
            "{}: {} rejected, {} of {} already selected",
            self.id,
            index,
            self.selected.len(),
            self.max_selection_count
        );
        self.listeners.out_of_max(index);
    }

    // -------------------------------------------------------------------------
    // Bulk operations
    // -------------------------------------------------------------------------

    /// Select every row. Only applies in multi-select mode without a cap.
    ///
    /// Rows already selected keep their order; the others are appended in
    /// ascending order. Indices at or beyond the item count are dropped.
    pub fn select_all(&mut self) {
        if self.mode != Mode::MultiSelect || self.selection_limit().is_some() {
            return;
        }
        let count = self.item_count();
        self.selected.retain(|index| index < count);
        self.selected.extend(0..count);
        self.finish_bulk(BulkOp::SelectAll);
    }

    /// Deselect every row. Only applies in multi-select mode.
    pub fn unselect_all(&mut self) {
        if self.mode != Mode::MultiSelect {
            return;
        }
        self.selected.clear();
        self.finish_bulk(BulkOp::UnselectAll);
    }

    /// Invert the selection over `0..item_count`. Only applies in
    /// multi-select mode without a cap.
    pub fn reverse_selected(&mut self) {
        if self.mode != Mode::MultiSelect || self.selection_limit().is_some() {
            return;
        }
        let count = self.item_count();
        let previous = std::mem::take(&mut self.selected);
        self.selected = (0..count).filter(|&i| !previous.contains(i)).collect();
        self.finish_bulk(BulkOp::ReverseSelected);
    }

    fn finish_bulk(&mut self, op: BulkOp) {
        debug!("{}: {} -> {} selected", self.id, op, self.selected.len());
        let event = MultiSelectEvent::Bulk {
            op,
            selected: self.selected.to_vec(),
        };
        self.listeners.multi_selected(&event);
        self.request_full_invalidate();
    }

    // -------------------------------------------------------------------------
    // Targeted selection
    // -------------------------------------------------------------------------

    /// Select the given rows.
    ///
    /// In multi-select mode every in-range index that is not yet selected is
    /// added until the cap is reached; each index past the cap is reported to
    /// the out-of-max listener instead. In single-select mode only the first
    /// index counts. Does nothing in click mode.
    pub fn select(&mut self, indices: &[usize]) {
        let count = self.item_count();
        match self.mode {
            Mode::Click => return,
            Mode::SingleSelect => {
                let Some(&index) = indices.first() else {
                    return;
                };
                if index >= count {
                    return;
                }
                self.move_single_selection(index);
            }
            Mode::MultiSelect => {
                for &index in indices {
                    if index >= count || self.selected.contains(index) {
                        continue;
                    }
                    if self.is_at_cap() {
                        self.reject_out_of_max(index);
                        continue;
                    }
                    self.selected.insert(index);
                    self.listeners.multi_selected(&MultiSelectEvent::Toggled {
                        index,
                        selected: true,
                    });
                }
            }
        }
        self.request_full_invalidate();
    }

    /// Deselect the given rows. Only applies in multi-select mode.
    pub fn unselect(&mut self, indices: &[usize]) {
        if self.mode != Mode::MultiSelect {
            return;
        }
        let count = self.item_count();
        for &index in indices {
            if index >= count || !self.selected.remove(index) {
                continue;
            }
            self.listeners.multi_selected(&MultiSelectEvent::Toggled {
                index,
                selected: false,
            });
        }
        self.request_full_invalidate();
    }

    /// Drop selected indices that no longer refer to a row.
    /// Returns the removed indices.
    pub fn retain_in_bounds(&mut self) -> Vec<usize> {
        let count = self.item_count();
        let removed = self.selected.retain(|index| index < count);
        if !removed.is_empty() {
            debug!("{}: dropped stale {:?}", self.id, removed);
            self.request_full_invalidate();
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Whether the row should be drawn as selected in the current mode.
    pub fn is_selected(&self, index: usize) -> bool {
        match self.mode {
            Mode::Click => false,
            Mode::SingleSelect => self.single_selected == index,
            Mode::MultiSelect => self.selected.contains(index),
        }
    }

    /// Selection state for binding the row at `index`.
    pub fn row_state(&self, index: usize) -> RowState {
        RowState {
            index,
            mode: self.mode,
            selected: self.is_selected(index),
        }
    }

    /// Snapshot of the multi-selection in insertion order.
    pub fn selected_set(&self) -> Vec<usize> {
        self.selected.to_vec()
    }

    /// Number of rows in the multi-selection.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// The selected row in single-select mode.
    pub fn single_selected_position(&self) -> Result<usize, SelectionError> {
        match self.mode {
            Mode::SingleSelect => Ok(self.single_selected),
            mode => Err(SelectionError::NotSingleSelect { mode }),
        }
    }

    // -------------------------------------------------------------------------
    // Invalidation
    // -------------------------------------------------------------------------

    /// Ask the host to re-render every bound row.
    pub fn request_full_invalidate(&mut self) {
        self.dirty = true;
        self.listeners.invalidated(&Invalidation::Full);
    }

    /// Check if state changed since the host last rendered.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
