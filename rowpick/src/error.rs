//! Error types.
//!
//! Most "error-like" situations (cap reached, wrong mode, index out of range)
//! are policy outcomes and never surface here. These types only cover
//! queries and parsing that have no meaningful answer.

use thiserror::Error;

use crate::mode::Mode;

/// Errors returned by controller queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The single selected position only exists in `SingleSelect` mode.
    #[error("no single selection in '{mode}' mode")]
    NotSingleSelect {
        /// The mode the controller was in when queried.
        mode: Mode,
    },
}

/// An unrecognised mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection mode '{0}' (expected click, single_select or multi_select)")]
pub struct ParseModeError(pub String);
