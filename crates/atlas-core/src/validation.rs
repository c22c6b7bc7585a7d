//! Field rules checked before a country or language reaches the store.
//!
//! Drafts run these after parsing, and the repositories run them again on
//! their own inputs, so a write never depends on the caller having validated.

use crate::entities::{Country, Language};
use crate::errors::CoreError;

/// Maximum length, in characters, of a new country code.
pub const MAX_CODE_LEN: usize = 3;

/// Inclusive bounds of a language percentage.
pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

/// Rules shared by insert and update: code and name present.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first failing field.
pub fn validate_country(country: &Country) -> Result<(), CoreError> {
    if country.code.trim().is_empty() || country.name.trim().is_empty() {
        return Err(CoreError::validation("country code and name are required"));
    }
    check_finite("surface area", country.surface_area)?;
    check_finite("life expectancy", country.life_expectancy)?;
    check_finite("GNP", country.gnp)?;
    Ok(())
}

/// Insert rules: everything in [`validate_country`] plus the code length.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the code is longer than
/// [`MAX_CODE_LEN`] characters or a shared rule fails.
pub fn validate_new_country(country: &Country) -> Result<(), CoreError> {
    validate_country(country)?;
    let len = country.code.trim().chars().count();
    if len > MAX_CODE_LEN {
        return Err(CoreError::validation(format!(
            "country code '{}' has {len} characters; at most {MAX_CODE_LEN} are allowed",
            country.code.trim()
        )));
    }
    Ok(())
}

/// Language rules: name present, percentage within `[0, 100]`.
///
/// # Errors
///
/// Returns `CoreError::Validation` describing the rejected field.
pub fn validate_language(language: &Language) -> Result<(), CoreError> {
    if language.name.trim().is_empty() {
        return Err(CoreError::validation("language name is required"));
    }
    if !is_valid_percentage(language.percentage) {
        return Err(CoreError::validation(format!(
            "percentage {} must be between {PERCENTAGE_MIN} and {PERCENTAGE_MAX}",
            language.percentage
        )));
    }
    Ok(())
}

/// `true` for finite values in `[PERCENTAGE_MIN, PERCENTAGE_MAX]`.
#[must_use]
pub fn is_valid_percentage(value: f64) -> bool {
    (PERCENTAGE_MIN..=PERCENTAGE_MAX).contains(&value)
}

fn check_finite(field: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::validation(format!(
            "{field} must be a finite number"
        ))),
        _ => Ok(()),
    }
}
