//! Database error types for atlas-db.

use atlas_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Input rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Insert collided with an existing key.
    #[error("{entity} '{key}' already exists")]
    Conflict { entity: &'static str, key: String },

    /// The referenced row does not exist.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse classification of a [`DatabaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Validation,
    Conflict,
    NotFound,
    /// Connectivity, query, migration or transaction failure.
    DataAccess,
}

impl DatabaseError {
    #[must_use]
    pub const fn kind(&self) -> StoreErrorKind {
        match self {
            Self::Validation(_) => StoreErrorKind::Validation,
            Self::Conflict { .. } => StoreErrorKind::Conflict,
            Self::NotFound { .. } => StoreErrorKind::NotFound,
            Self::Query(_)
            | Self::Migration(_)
            | Self::InvalidState(_)
            | Self::LibSql(_)
            | Self::Other(_) => StoreErrorKind::DataAccess,
        }
    }

    /// Classify a failed write: key collisions become `Conflict`, anything
    /// else stays a libSQL error.
    pub(crate) fn from_write(e: libsql::Error, entity: &'static str, key: &str) -> Self {
        if is_unique_violation(&e) {
            Self::Conflict {
                entity,
                key: key.to_string(),
            }
        } else {
            Self::LibSql(e)
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation(reason) => Self::Validation(reason),
            CoreError::Other(inner) => Self::Other(inner),
            other => Self::InvalidState(other.to_string()),
        }
    }
}

/// Detect SQLite primary key / unique constraint failures.
///
/// Other constraint failures (foreign key, CHECK) are not conflicts.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE constraint failed") || msg.contains("PRIMARY KEY constraint failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_failure_becomes_conflict() {
        let e = libsql::Error::SqliteFailure(
            2067,
            "UNIQUE constraint failed: country.code".to_string(),
        );
        let err = DatabaseError::from_write(e, "country", "ZZZ");
        assert_eq!(err.kind(), StoreErrorKind::Conflict);
        assert_eq!(err.to_string(), "country 'ZZZ' already exists");
    }

    #[test]
    fn foreign_key_failure_is_data_access() {
        let e = libsql::Error::SqliteFailure(787, "FOREIGN KEY constraint failed".to_string());
        let err = DatabaseError::from_write(e, "language", "ZZZ/Zedish");
        assert_eq!(err.kind(), StoreErrorKind::DataAccess);
    }

    #[test]
    fn core_validation_keeps_its_kind() {
        let err: DatabaseError = CoreError::Validation("bad".into()).into();
        assert_eq!(err.kind(), StoreErrorKind::Validation);
    }
}
