//! Click, single-select and multi-select state for list widgets.
//!
//! `rowpick` owns no rendering. A host list widget forwards row activations
//! to a [`SelectionController`], asks it how each row should look, and
//! re-renders when the controller invalidates.

pub mod config;
pub mod controller;
pub mod error;
pub mod listeners;
pub mod mode;
pub mod selected_set;
pub mod source;

pub use config::{SelectionConfig, UNLIMITED};
pub use controller::{ControllerId, RowState, SelectionController};
pub use error::{ParseModeError, SelectionError};
pub use listeners::{Invalidation, MultiSelectEvent};
pub use mode::{BulkOp, Mode};
pub use selected_set::SelectedSet;
pub use source::{FnSource, ItemSource};

pub mod prelude {
    pub use crate::config::SelectionConfig;
    pub use crate::controller::{RowState, SelectionController};
    pub use crate::listeners::{Invalidation, MultiSelectEvent};
    pub use crate::mode::{BulkOp, Mode};
    pub use crate::source::{FnSource, ItemSource};
}
