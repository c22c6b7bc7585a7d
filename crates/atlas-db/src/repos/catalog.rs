//! Continent catalog derived from the stored countries.

use crate::error::DatabaseError;
use crate::service::AtlasService;

impl AtlasService {
    /// Distinct non-empty continents in ascending order.
    ///
    /// Recomputed on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_continents(&self) -> Result<Vec<String>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT continent FROM country
                 WHERE continent IS NOT NULL AND continent <> ''
                 ORDER BY continent ASC",
                (),
            )
            .await?;

        let mut continents = Vec::new();
        while let Some(row) = rows.next().await? {
            continents.push(row.get::<String>(0)?);
        }
        Ok(continents)
    }
}
