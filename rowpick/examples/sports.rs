//! Sports List Example
//!
//! A scripted walk through click, single-select and multi-select modes over
//! a small list, with a toy host that prints rows whenever the controller
//! invalidates.
//!
//! Controller logging goes to `sports.log`.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use rowpick::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const SPORTS: [&str; 7] = [
    "basketball",
    "football",
    "badminton",
    "table tennis",
    "volleyball",
    "rugby",
    "baseball",
];

/// Stands in for the host list widget: owns the rows, draws them on demand.
struct TextList {
    rows: Rc<RefCell<Vec<&'static str>>>,
    selection: SelectionController<Rc<RefCell<Vec<&'static str>>>>,
}

impl TextList {
    fn new(config: SelectionConfig) -> Self {
        let rows = Rc::new(RefCell::new(SPORTS.to_vec()));
        let mut selection = SelectionController::new(rows.clone(), config);

        selection.set_on_item_clicked(|i| println!("  clicked: {}", i));
        selection.set_on_single_select(|i| println!("  single selected: {}", i));
        selection.set_on_multi_select(|event| match event {
            MultiSelectEvent::Toggled { index, selected } => {
                println!("  selected: {} {}", index, selected)
            }
            MultiSelectEvent::Bulk { op, selected } => println!("  {}: {:?}", op, selected),
        });
        selection.set_on_out_of_max(|i| println!("  out of max: {} rejected", i));
        selection.set_on_mode_changed(|old, new| println!("  mode: {} -> {}", old, new));

        Self { rows, selection }
    }

    fn tap(&mut self, index: usize) {
        println!("tap {}", index);
        self.selection.on_item_activated(index);
        self.draw();
    }

    /// Re-render every row if the controller asked for it.
    fn draw(&mut self) {
        if !self.selection.is_dirty() {
            return;
        }
        let rows = self.rows.borrow();
        let line: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let row = self.selection.row_state(i);
                let mark = match (row.mode, row.selected) {
                    (Mode::Click, _) => " ",
                    (_, true) => "x",
                    (_, false) => " ",
                };
                format!("[{}] {}", mark, name)
            })
            .collect();
        println!("  | {}", line.join("  "));
        drop(rows);
        self.selection.clear_dirty();
    }
}

fn main() {
    if let Ok(log_file) = File::create("sports.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let mut list = TextList::new(SelectionConfig::new(Mode::MultiSelect));

    println!("== multi select, unlimited");
    list.tap(0);
    list.tap(3);
    list.selection.select_all();
    list.draw();
    list.selection.reverse_selected();
    list.draw();

    println!("== multi select, at most 3");
    list.selection.unselect_all();
    list.selection.set_max_selection_count(3);
    for index in [0, 1, 2, 3] {
        list.tap(index);
    }
    list.tap(1);
    list.tap(3);
    list.selection.set_max_selection_count(2);
    list.draw();

    println!("== single select");
    list.selection.set_mode(Mode::SingleSelect);
    list.tap(5);
    list.tap(2);

    println!("== click");
    list.selection.set_mode(Mode::Click);
    list.tap(6);
    list.draw();

    if let Err(e) = list.selection.single_selected_position() {
        println!("{}", e);
    }
}
