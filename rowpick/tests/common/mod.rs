#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use rowpick::{Invalidation, Mode, MultiSelectEvent, SelectionConfig, SelectionController};

/// Everything a controller reported, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Click(usize),
    LongClick(usize),
    Single(usize),
    Multi(MultiSelectEvent),
    OutOfMax(usize),
    ModeChanged(Mode, Mode),
    Invalidate,
}

pub type Log = Rc<RefCell<Vec<Seen>>>;

/// Build a controller with every listener recording into the returned log.
pub fn recorded(
    item_count: usize,
    mode: Mode,
    max: isize,
) -> (SelectionController<usize>, Log) {
    let config = SelectionConfig::new(mode).max_selection_count(max);
    let mut controller = SelectionController::new(item_count, config);
    let log: Log = Rc::default();

    let l = log.clone();
    controller.set_on_item_clicked(move |i| l.borrow_mut().push(Seen::Click(i)));
    let l = log.clone();
    controller.set_on_item_long_clicked(move |i| {
        l.borrow_mut().push(Seen::LongClick(i));
        true
    });
    let l = log.clone();
    controller.set_on_single_select(move |i| l.borrow_mut().push(Seen::Single(i)));
    let l = log.clone();
    controller.set_on_multi_select(move |e| l.borrow_mut().push(Seen::Multi(e.clone())));
    let l = log.clone();
    controller.set_on_out_of_max(move |i| l.borrow_mut().push(Seen::OutOfMax(i)));
    let l = log.clone();
    controller.set_on_mode_changed(move |old, new| {
        l.borrow_mut().push(Seen::ModeChanged(old, new))
    });
    let l = log.clone();
    controller.set_on_invalidate(move |inv| {
        assert_eq!(inv, &Invalidation::Full);
        l.borrow_mut().push(Seen::Invalidate)
    });

    (controller, log)
}

/// Drain the log.
pub fn take(log: &Log) -> Vec<Seen> {
    std::mem::take(&mut *log.borrow_mut())
}

pub fn toggled(index: usize, selected: bool) -> Seen {
    Seen::Multi(MultiSelectEvent::Toggled { index, selected })
}

pub fn count_invalidations(seen: &[Seen]) -> usize {
    seen.iter().filter(|s| **s == Seen::Invalidate).count()
}

pub fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}
