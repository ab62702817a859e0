//! Interaction modes and bulk operation tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// How an activated row affects selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Rows are plain buttons. Activation only reports a click.
    #[default]
    Click,
    /// Exactly one row is selected at a time (radio-button style).
    SingleSelect,
    /// Any number of rows can be toggled, up to the selection cap.
    MultiSelect,
}

impl Mode {
    /// Every mode, in declaration order.
    pub const ALL: [Mode; 3] = [Mode::Click, Mode::SingleSelect, Mode::MultiSelect];

    /// Stable name used by `Display`, `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Click => "click",
            Mode::SingleSelect => "single_select",
            Mode::MultiSelect => "multi_select",
        }
    }

    /// Whether activation in this mode changes selection state at all.
    pub fn is_selectable(self) -> bool {
        !matches!(self, Mode::Click)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

/// Multi-select operations that replace the selection in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkOp {
    /// Every row selected.
    SelectAll,
    /// Selection cleared.
    UnselectAll,
    /// Selection inverted over the current rows.
    ReverseSelected,
}

impl fmt::Display for BulkOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BulkOp::SelectAll => "select_all",
            BulkOp::UnselectAll => "unselect_all",
            BulkOp::ReverseSelected => "reverse_selected",
        };
        f.write_str(name)
    }
}
