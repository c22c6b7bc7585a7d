//! Language repository, always scoped by country code.

use atlas_core::entities::Language;
use atlas_core::validation::validate_language;

use crate::error::DatabaseError;
use crate::helpers::{get_official_flag, get_opt_f64, language_key};
use crate::service::AtlasService;

const ENTITY: &str = "language";

fn row_to_language(row: &libsql::Row) -> Result<Language, DatabaseError> {
    Ok(Language {
        name: row.get(0)?,
        is_official: get_official_flag(row, 1)?,
        percentage: get_opt_f64(row, 2)?.unwrap_or_default(),
    })
}

impl AtlasService {
    /// Languages of a country in insertion order. Empty if none.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_languages(&self, country_code: &str) -> Result<Vec<Language>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT language, isOfficial, percentage FROM countrylanguage
                 WHERE countryCode = ?1 ORDER BY rowid",
                [country_code],
            )
            .await?;

        let mut languages = Vec::new();
        while let Some(row) = rows.next().await? {
            languages.push(row_to_language(&row)?);
        }
        Ok(languages)
    }

    /// Add a language to a country.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for a blank name or out-of-range
    /// percentage, `DatabaseError::Conflict` if the country already lists
    /// the language.
    pub async fn insert_language(
        &self,
        country_code: &str,
        language: &Language,
    ) -> Result<(), DatabaseError> {
        validate_language(language)?;
        let _gate = self.write_gate().await;

        self.db()
            .conn()
            .execute(
                "INSERT INTO countrylanguage (countryCode, language, isOfficial, percentage)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    country_code,
                    language.name.as_str(),
                    language.official_flag(),
                    language.percentage
                ],
            )
            .await
            .map_err(|e| {
                DatabaseError::from_write(e, ENTITY, &language_key(country_code, &language.name))
            })?;

        tracing::info!(country_code, language = %language.name, "language inserted");
        Ok(())
    }

    /// Change the official flag and percentage of an existing language.
    ///
    /// The editor never calls this; languages are only added or removed there.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the country does not list the language.
    pub async fn update_language(
        &self,
        country_code: &str,
        language: &Language,
    ) -> Result<(), DatabaseError> {
        validate_language(language)?;
        let _gate = self.write_gate().await;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE countrylanguage SET isOfficial = ?1, percentage = ?2
                 WHERE countryCode = ?3 AND language = ?4",
                libsql::params![
                    language.official_flag(),
                    language.percentage,
                    country_code,
                    language.name.as_str()
                ],
            )
            .await?;

        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: ENTITY,
                key: language_key(country_code, &language.name),
            });
        }
        tracing::info!(country_code, language = %language.name, "language updated");
        Ok(())
    }

    /// Remove a language from a country. Removing an absent language succeeds.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_language(
        &self,
        country_code: &str,
        language: &str,
    ) -> Result<(), DatabaseError> {
        let _gate = self.write_gate().await;
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM countrylanguage WHERE countryCode = ?1 AND language = ?2",
                [country_code, language],
            )
            .await?;

        if affected == 0 {
            tracing::debug!(country_code, language, "language already absent");
        } else {
            tracing::info!(country_code, language, "language deleted");
        }
        Ok(())
    }
}
