//! Caller-facing errors of the edit session.

use atlas_core::errors::CoreError;
use atlas_db::error::{DatabaseError, StoreErrorKind};
use thiserror::Error;

/// Why an editor action failed. `Display` is the reason shown to the operator.
#[derive(Debug, Error)]
pub enum EditError {
    /// Input rejected before any store call.
    #[error("{0}")]
    Validation(String),

    /// A country code or language already exists.
    #[error("{0}")]
    Conflict(String),

    /// The referenced country or language is gone.
    #[error("{0}")]
    NotFound(String),

    /// The store could not be reached or the statement failed.
    #[error("{0}")]
    DataAccess(String),

    /// The action is not available in the current mode or selection.
    #[error("{0}")]
    Rejected(String),
}

/// Discriminant of [`EditError`] for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    DataAccess,
    Rejected,
}

impl EditError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DataAccess(_) => ErrorKind::DataAccess,
            Self::Rejected(_) => ErrorKind::Rejected,
        }
    }
}

impl From<DatabaseError> for EditError {
    fn from(e: DatabaseError) -> Self {
        let reason = match &e {
            DatabaseError::Validation(reason) => reason.clone(),
            other => other.to_string(),
        };
        match e.kind() {
            StoreErrorKind::Validation => Self::Validation(reason),
            StoreErrorKind::Conflict => Self::Conflict(reason),
            StoreErrorKind::NotFound => Self::NotFound(reason),
            StoreErrorKind::DataAccess => Self::DataAccess(reason),
        }
    }
}

impl From<CoreError> for EditError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation(reason) => Self::Validation(reason),
            CoreError::InvalidTransition { .. } | CoreError::NothingSelected(_) => {
                Self::Rejected(e.to_string())
            }
            CoreError::Other(inner) => Self::DataAccess(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use atlas_core::enums::{EditAction, EditMode};

    use super::*;

    #[test]
    fn store_kinds_map_one_to_one() {
        let conflict: EditError = DatabaseError::Conflict {
            entity: "country",
            key: "ZZZ".into(),
        }
        .into();
        assert_eq!(conflict.kind(), ErrorKind::Conflict);
        assert_eq!(conflict.to_string(), "country 'ZZZ' already exists");

        let query: EditError = DatabaseError::Query("disk I/O error".into()).into();
        assert_eq!(query.kind(), ErrorKind::DataAccess);
    }

    #[test]
    fn validation_reason_is_not_prefixed() {
        let err: EditError = CoreError::Validation("language name is required".into()).into();
        assert_eq!(err.to_string(), "language name is required");
    }

    #[test]
    fn transition_errors_are_rejections() {
        let err: EditError = CoreError::InvalidTransition {
            from: EditMode::AddingLanguage,
            action: EditAction::BeginEditCountry,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Rejected);
        assert_eq!(err.to_string(), "Cannot begin_edit_country while adding_language");
    }
}
