mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Seen, recorded, sorted, take};
use rowpick::{BulkOp, Mode, MultiSelectEvent, SelectionConfig, SelectionController};

fn bulk(op: BulkOp, selected: Vec<usize>) -> Seen {
    Seen::Multi(MultiSelectEvent::Bulk { op, selected })
}

// ============================================================================
// Select All
// ============================================================================

#[test]
fn test_select_all_uses_exclusive_bound() {
    let (mut c, log) = recorded(5, Mode::MultiSelect, -1);

    c.select_all();

    assert_eq!(c.selected_set(), vec![0, 1, 2, 3, 4]);
    assert!(!c.is_selected(5));
    assert_eq!(
        take(&log),
        vec![bulk(BulkOp::SelectAll, vec![0, 1, 2, 3, 4]), Seen::Invalidate]
    );
}

#[test]
fn test_select_all_keeps_existing_order_first() {
    let (mut c, _log) = recorded(4, Mode::MultiSelect, 0);
    c.on_item_activated(3);
    c.on_item_activated(1);

    c.select_all();

    assert_eq!(c.selected_set(), vec![3, 1, 0, 2]);
}

#[test]
fn test_select_all_ignored_with_cap() {
    let (mut c, log) = recorded(5, Mode::MultiSelect, 3);

    c.select_all();

    assert!(c.selected_set().is_empty());
    assert!(take(&log).is_empty());
}

#[test]
fn test_select_all_on_empty_list() {
    let (mut c, log) = recorded(0, Mode::MultiSelect, -1);

    c.select_all();

    assert!(c.selected_set().is_empty());
    assert_eq!(
        take(&log),
        vec![bulk(BulkOp::SelectAll, vec![]), Seen::Invalidate]
    );
}

// ============================================================================
// Unselect All
// ============================================================================

#[test]
fn test_unselect_all_clears_even_with_cap() {
    let (mut c, log) = recorded(5, Mode::MultiSelect, 2);
    c.on_item_activated(0);
    c.on_item_activated(4);
    take(&log);

    c.unselect_all();

    assert!(c.selected_set().is_empty());
    assert_eq!(
        take(&log),
        vec![bulk(BulkOp::UnselectAll, vec![]), Seen::Invalidate]
    );
}

// ============================================================================
// Reverse Selected
// ============================================================================

#[test]
fn test_reverse_selected_complements() {
    let (mut c, log) = recorded(6, Mode::MultiSelect, -1);
    c.select(&[4, 0, 2]);
    take(&log);

    c.reverse_selected();

    assert_eq!(c.selected_set(), vec![1, 3, 5]);
    assert_eq!(
        take(&log),
        vec![bulk(BulkOp::ReverseSelected, vec![1, 3, 5]), Seen::Invalidate]
    );
}

#[test]
fn test_reverse_selected_twice_restores_set() {
    let (mut c, _log) = recorded(8, Mode::MultiSelect, -1);
    c.select(&[6, 1, 3]);
    let before = sorted(c.selected_set());

    c.reverse_selected();
    c.reverse_selected();

    assert_eq!(sorted(c.selected_set()), before);
}

#[test]
fn test_select_all_then_reverse_is_empty() {
    let (mut c, _log) = recorded(7, Mode::MultiSelect, -1);

    c.select_all();
    c.reverse_selected();

    assert!(c.selected_set().is_empty());
}

#[test]
fn test_reverse_selected_ignored_with_cap() {
    let (mut c, log) = recorded(4, Mode::MultiSelect, 2);
    c.on_item_activated(1);
    take(&log);

    c.reverse_selected();

    assert_eq!(c.selected_set(), vec![1]);
    assert!(take(&log).is_empty());
}

// ============================================================================
// Mode Gating
// ============================================================================

#[test]
fn test_bulk_operations_ignored_outside_multi_select() {
    for mode in [Mode::Click, Mode::SingleSelect] {
        let (mut c, log) = recorded(4, mode, -1);

        c.select_all();
        c.reverse_selected();
        c.unselect_all();

        assert!(c.selected_set().is_empty(), "{mode}");
        assert!(take(&log).is_empty(), "{mode}");
    }
}

// ============================================================================
// Stale Indices
// ============================================================================

#[test]
fn test_bulk_operations_drop_stale_indices() {
    let rows = Rc::new(RefCell::new(vec!['a', 'b', 'c', 'd', 'e']));
    let config = SelectionConfig::new(Mode::MultiSelect);
    let mut c = SelectionController::new(rows.clone(), config);
    c.select(&[4, 1]);

    rows.borrow_mut().truncate(3);
    assert_eq!(c.selected_set(), vec![4, 1]);

    c.select_all();
    assert_eq!(c.selected_set(), vec![1, 0, 2]);

    c.unselect(&[0, 2]);
    rows.borrow_mut().push('f');
    c.select(&[3]);
    rows.borrow_mut().truncate(2);

    c.reverse_selected();
    assert_eq!(c.selected_set(), vec![0]);
}

#[test]
fn test_retain_in_bounds_purges_stale_indices() {
    let rows = Rc::new(RefCell::new(vec![1, 2, 3, 4]));
    let config = SelectionConfig::new(Mode::MultiSelect);
    let mut c = SelectionController::new(rows.clone(), config);
    c.select(&[3, 0, 2]);
    c.clear_dirty();

    rows.borrow_mut().truncate(2);
    let removed = c.retain_in_bounds();

    assert_eq!(removed, vec![3, 2]);
    assert_eq!(c.selected_set(), vec![0]);
    assert!(c.is_dirty());

    c.clear_dirty();
    assert!(c.retain_in_bounds().is_empty());
    assert!(!c.is_dirty());
}
