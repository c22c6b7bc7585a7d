//! Country repository: summaries, detail with capital join, insert, update, delete.

use atlas_core::entities::{Capital, Country, CountrySummary};
use atlas_core::validation::{validate_country, validate_new_country};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_f64, get_opt_i64, get_opt_string};
use crate::service::AtlasService;

const ENTITY: &str = "country";

const SUMMARY_SQL: &str =
    "SELECT code, name, continent, region FROM country ORDER BY name ASC, code ASC";

const DETAIL_SQL: &str = "SELECT c.code, c.name, c.continent, c.region, c.localName,
        c.governmentForm, c.headOfState, c.indepYear, c.surfaceArea, c.lifeExpectancy,
        c.gnp, c.population, c.capital, ci.id, ci.name, ci.district, ci.population
     FROM country c LEFT JOIN city ci ON ci.id = c.capital
     WHERE c.code = ?1";

fn row_to_summary(row: &libsql::Row) -> Result<CountrySummary, DatabaseError> {
    Ok(CountrySummary {
        code: row.get(0)?,
        name: row.get(1)?,
        continent: get_opt_string(row, 2)?.unwrap_or_default(),
        region: get_opt_string(row, 3)?,
    })
}

fn row_to_country(row: &libsql::Row) -> Result<Country, DatabaseError> {
    // No joined city row means no capital, not an error.
    let capital = match get_opt_i64(row, 13)? {
        Some(id) => Some(Capital {
            id,
            name: get_opt_string(row, 14)?,
            district: get_opt_string(row, 15)?,
            population: get_opt_i64(row, 16)?,
        }),
        None => None,
    };

    Ok(Country {
        code: row.get(0)?,
        name: row.get(1)?,
        continent: get_opt_string(row, 2)?.unwrap_or_default(),
        region: get_opt_string(row, 3)?,
        local_name: get_opt_string(row, 4)?,
        government_form: get_opt_string(row, 5)?,
        head_of_state: get_opt_string(row, 6)?,
        independence_year: get_opt_i64(row, 7)?,
        surface_area: get_opt_f64(row, 8)?,
        life_expectancy: get_opt_f64(row, 9)?,
        gnp: get_opt_f64(row, 10)?,
        population: get_opt_i64(row, 11)?,
        capital_id: get_opt_i64(row, 12)?,
        capital,
    })
}

impl AtlasService {
    /// All countries as browse rows, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_country_summaries(&self) -> Result<Vec<CountrySummary>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self.db().conn().query(SUMMARY_SQL, ()).await?;
        let mut summaries = Vec::new();
        while let Some(row) = rows.next().await? {
            summaries.push(row_to_summary(&row)?);
        }
        Ok(summaries)
    }

    /// Load one country with its capital.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no country has `code`.
    pub async fn get_country(&self, code: &str) -> Result<Country, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self.db().conn().query(DETAIL_SQL, [code]).await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: ENTITY,
            key: code.to_string(),
        })?;
        row_to_country(&row)
    }

    /// Insert a new country. The capital reference is written as given; the
    /// joined capital view is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` before touching the store if the
    /// country is invalid, `DatabaseError::Conflict` if the code is taken.
    pub async fn insert_country(&self, country: &Country) -> Result<(), DatabaseError> {
        validate_new_country(country)?;
        let _gate = self.write_gate().await;

        self.db()
            .conn()
            .execute(
                "INSERT INTO country (code, name, continent, region, surfaceArea, indepYear,
                    population, lifeExpectancy, gnp, localName, governmentForm, headOfState, capital)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                libsql::params![
                    country.code.as_str(),
                    country.name.as_str(),
                    country.continent.as_str(),
                    country.region.as_deref(),
                    country.surface_area,
                    country.independence_year,
                    country.population,
                    country.life_expectancy,
                    country.gnp,
                    country.local_name.as_deref(),
                    country.government_form.as_deref(),
                    country.head_of_state.as_deref(),
                    country.capital_id
                ],
            )
            .await
            .map_err(|e| DatabaseError::from_write(e, ENTITY, &country.code))?;

        tracing::info!(code = %country.code, "country inserted");
        Ok(())
    }

    /// Rewrite the mutable columns of the country whose code is `country.code`.
    ///
    /// The code itself and the capital reference are never part of the SET list.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has that code.
    pub async fn update_country(&self, country: &Country) -> Result<(), DatabaseError> {
        validate_country(country)?;
        let _gate = self.write_gate().await;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE country SET name = ?1, continent = ?2, region = ?3, surfaceArea = ?4,
                    indepYear = ?5, population = ?6, lifeExpectancy = ?7, gnp = ?8,
                    localName = ?9, governmentForm = ?10, headOfState = ?11
                 WHERE code = ?12",
                libsql::params![
                    country.name.as_str(),
                    country.continent.as_str(),
                    country.region.as_deref(),
                    country.surface_area,
                    country.independence_year,
                    country.population,
                    country.life_expectancy,
                    country.gnp,
                    country.local_name.as_deref(),
                    country.government_form.as_deref(),
                    country.head_of_state.as_deref(),
                    country.code.as_str()
                ],
            )
            .await?;

        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: ENTITY,
                key: country.code.clone(),
            });
        }
        tracing::info!(code = %country.code, "country updated");
        Ok(())
    }

    /// Delete only the country row.
    ///
    /// With foreign keys on, this fails while languages still reference the
    /// country; use [`AtlasService::delete_country_cascade`] for that.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_country(&self, code: &str) -> Result<(), DatabaseError> {
        let _gate = self.write_gate().await;
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM country WHERE code = ?1", [code])
            .await?;
        tracing::info!(code, affected, "country row deleted");
        Ok(())
    }
}
