//! # atlas-db
//!
//! libSQL persistence for Atlas.
//!
//! Owns the `world` schema (`country`, `city`, `countrylanguage`) and the
//! repositories over it:
//! - `repos::country`: country CRUD and the capital join
//! - `repos::language`: languages scoped by country code
//! - `repos::cascade`: atomic removal of a country with its languages
//! - `repos::catalog`: distinct continents
//!
//! All repository methods hang off [`service::AtlasService`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

use atlas_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and the single connection every repository uses.
pub struct AtlasDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl AtlasDb {
    /// Open a local database at the given path with foreign keys enforced.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig {
            path: path.to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, the
    /// foreign key pragma fails, or migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(&config.path).build().await?;
        let conn = db.connect()?;

        // Must be set per connection in SQLite
        let pragma = if config.foreign_keys {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        conn.execute(pragma, ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("{pragma}: {e}")))?;

        let atlas_db = Self { db, conn };
        atlas_db.run_migrations().await?;
        tracing::debug!(path = %config.path, foreign_keys = config.foreign_keys, "database opened");
        Ok(atlas_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Round-trip a trivial query to prove the connection is usable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::Query("SELECT 1 returned no rows".into()))?;
        let one = row.get::<i64>(0)?;
        if one == 1 {
            Ok(())
        } else {
            Err(DatabaseError::InvalidState(format!("SELECT 1 returned {one}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> AtlasDb {
        AtlasDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["country", "city", "countrylanguage"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn ping_succeeds() {
        test_db().await.ping().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enforced_by_default() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO countrylanguage (countryCode, language, isOfficial, percentage) VALUES ('NOP', 'Nopish', 'T', 10)",
                (),
            )
            .await;
        assert!(result.is_err(), "orphan language should be rejected");
    }

    #[tokio::test]
    async fn foreign_keys_can_be_disabled() {
        let db = AtlasDb::open(&DatabaseConfig {
            path: ":memory:".into(),
            foreign_keys: false,
        })
        .await
        .unwrap();
        db.conn()
            .execute(
                "INSERT INTO countrylanguage (countryCode, language, isOfficial, percentage) VALUES ('NOP', 'Nopish', 'T', 10)",
                (),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn percentage_check_constraint() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO country (code, name) VALUES ('ZZZ', 'Zedland')", ())
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO countrylanguage (countryCode, language, isOfficial, percentage) VALUES ('ZZZ', 'Zedish', 'T', 100.5)",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn file_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.db");
        let path = path.to_str().unwrap();

        {
            let db = AtlasDb::open_local(path).await.unwrap();
            db.conn()
                .execute("INSERT INTO country (code, name) VALUES ('ZZZ', 'Zedland')", ())
                .await
                .unwrap();
        }

        let db = AtlasDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT name FROM country WHERE code = 'ZZZ'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Zedland");
    }
}
