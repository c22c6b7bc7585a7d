//! Cascade delete: a country and all of its languages in one transaction.

use crate::error::DatabaseError;
use crate::service::AtlasService;

/// Rows removed by a committed cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeReport {
    pub languages_removed: u64,
    pub country_removed: bool,
}

impl AtlasService {
    /// Delete every language of `code`, then the country itself, atomically.
    ///
    /// Either both deletes commit or the transaction is rolled back and the
    /// country and its languages are left exactly as they were. Deleting a
    /// code that does not exist commits nothing and reports
    /// `country_removed: false`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if either delete or the commit fails;
    /// the store is unchanged in that case.
    pub async fn delete_country_cascade(&self, code: &str) -> Result<CascadeReport, DatabaseError> {
        let _gate = self.write_gate().await;
        let tx = self.db().conn().transaction().await?;

        let outcome = async {
            let languages_removed = tx
                .execute("DELETE FROM countrylanguage WHERE countryCode = ?1", [code])
                .await?;
            let countries_removed = tx
                .execute("DELETE FROM country WHERE code = ?1", [code])
                .await?;
            Ok::<_, libsql::Error>(CascadeReport {
                languages_removed,
                country_removed: countries_removed > 0,
            })
        }
        .await;

        match outcome {
            Ok(report) => {
                tx.commit().await.map_err(|e| {
                    DatabaseError::Query(format!("cascade delete of '{code}' failed to commit: {e}"))
                })?;
                tracing::info!(
                    code,
                    languages_removed = report.languages_removed,
                    country_removed = report.country_removed,
                    "cascade delete committed"
                );
                Ok(report)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(code, %rollback_err, "cascade rollback failed");
                }
                tracing::warn!(code, error = %e, "cascade delete rolled back");
                Err(DatabaseError::Query(format!(
                    "cascade delete of '{code}' rolled back: {e}"
                )))
            }
        }
    }
}
