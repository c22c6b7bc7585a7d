//! Cross-cutting error types for Atlas.
//!
//! Store errors (`DatabaseError`) live in `atlas-db` and the editor's
//! caller-facing error lives in `atlas-editor`. Both convert from `CoreError`.

use thiserror::Error;

use crate::enums::{EditAction, EditMode};

/// Errors raised before any store call is attempted.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or out-of-range operator input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The action is not accepted in the current mode.
    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: EditMode, action: EditAction },

    /// The action needs a selected country or language.
    #[error("Nothing selected: {0}")]
    NothingSelected(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}
