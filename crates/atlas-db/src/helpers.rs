//! Row-to-entity parsing helpers.
//!
//! Repos read `libsql::Row` by column index. Nullable columns must be read
//! as `Option<T>`: `row.get::<String>(idx)` on a NULL column is an error,
//! not `""`.

use atlas_core::entities::Language;
use libsql::Value;

use crate::error::DatabaseError;

/// Read a nullable TEXT column. SQL NULL is `None`; stored text is kept as is.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read a nullable INTEGER column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_i64(row: &libsql::Row, idx: i32) -> Result<Option<i64>, DatabaseError> {
    Ok(row.get::<Option<i64>>(idx)?)
}

/// Read a nullable REAL column, accepting integers stored by imported data.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the column holds text or a blob.
#[allow(clippy::cast_precision_loss)]
pub fn get_opt_f64(row: &libsql::Row, idx: i32) -> Result<Option<f64>, DatabaseError> {
    match row.get_value(idx)? {
        Value::Null => Ok(None),
        Value::Real(v) => Ok(Some(v)),
        Value::Integer(v) => Ok(Some(v as f64)),
        other => Err(DatabaseError::InvalidState(format!(
            "expected a number in column {idx}, found {other:?}"
        ))),
    }
}

/// Read the `isOfficial` `T`/`F` column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_official_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row
        .get::<Option<String>>(idx)?
        .is_some_and(|flag| Language::parse_official_flag(&flag)))
}

/// Display key of a language row, used in error messages and logs.
#[must_use]
pub fn language_key(country_code: &str, language: &str) -> String {
    format!("{country_code}/{language}")
}
