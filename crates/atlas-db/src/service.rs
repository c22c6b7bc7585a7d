//! Service layer owning the database handle and the write gate.
//!
//! `AtlasService` wraps `AtlasDb`. All repo methods are implemented as
//! `impl AtlasService` blocks in `crate::repos`.

use atlas_config::DatabaseConfig;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::AtlasDb;
use crate::error::DatabaseError;

/// Entry point for every repository operation.
///
/// All repositories share one connection, so an open transaction is visible
/// to every statement on it. Writes hold the gate exclusively and reads hold
/// it shared: no read can land between the statements of the cascade delete.
pub struct AtlasService {
    db: AtlasDb,
    gate: RwLock<()>,
}

impl AtlasService {
    /// Create a service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(AtlasDb::open_local(db_path).await?))
    }

    /// Create a service from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(AtlasDb::open(config).await?))
    }

    /// Create from an existing `AtlasDb`.
    #[must_use]
    pub fn from_db(db: AtlasDb) -> Self {
        Self {
            db,
            gate: RwLock::new(()),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AtlasDb {
        &self.db
    }

    /// Verify the store answers queries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the round-trip query fails.
    pub async fn check_connection(&self) -> Result<(), DatabaseError> {
        let _gate = self.read_gate().await;
        self.db.ping().await
    }

    /// Exclusive access for a write or a transaction.
    pub(crate) async fn write_gate(&self) -> RwLockWriteGuard<'_, ()> {
        self.gate.write().await
    }

    /// Shared access for a read.
    pub(crate) async fn read_gate(&self) -> RwLockReadGuard<'_, ()> {
        self.gate.read().await
    }
}
