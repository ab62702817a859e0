//! Controller configuration.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Initial settings for a [`SelectionController`](crate::SelectionController).
///
/// Both fields can be changed later through the controller itself.
///
/// ```
/// use rowpick::{Mode, SelectionConfig};
///
/// let config = SelectionConfig::new(Mode::MultiSelect).max_selection_count(3);
/// assert_eq!(config.selection_limit(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Initial interaction mode.
    pub mode: Mode,

    /// Maximum simultaneous selections in multi-select mode.
    /// Zero or negative means unlimited.
    pub max_selection_count: isize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Click,
            max_selection_count: UNLIMITED,
        }
    }
}

/// Cap value meaning "no limit".
pub const UNLIMITED: isize = -1;

impl SelectionConfig {
    /// Create a config starting in the given mode, with no cap.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the initial mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the selection cap (`<= 0` for unlimited).
    pub fn max_selection_count(mut self, max: isize) -> Self {
        self.max_selection_count = max;
        self
    }

    /// Remove the selection cap.
    pub fn unlimited(mut self) -> Self {
        self.max_selection_count = UNLIMITED;
        self
    }

    /// The cap as a count, or `None` when unlimited.
    pub fn selection_limit(&self) -> Option<usize> {
        selection_limit(self.max_selection_count)
    }
}

pub(crate) fn selection_limit(max: isize) -> Option<usize> {
    usize::try_from(max).ok().filter(|&n| n > 0)
}
