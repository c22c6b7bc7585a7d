//! Operator drafts: field text as typed, before it becomes an entity.
//!
//! A draft keeps every field as a `String` so that a rejected save leaves the
//! operator's input untouched for correction. Parsing never mutates the draft.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{Country, Language};
use crate::errors::CoreError;
use crate::validation::{validate_country, validate_language, validate_new_country};

/// Raw country form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDraft {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub region: String,
    pub local_name: String,
    pub government_form: String,
    pub head_of_state: String,
    pub independence_year: String,
    pub surface_area: String,
    pub life_expectancy: String,
    pub population: String,
    pub gnp: String,
}

impl CountryDraft {
    /// Fill a draft from a loaded country, rendering absent values as empty text.
    #[must_use]
    pub fn from_country(country: &Country) -> Self {
        Self {
            code: country.code.clone(),
            name: country.name.clone(),
            continent: country.continent.clone(),
            region: country.region.clone().unwrap_or_default(),
            local_name: country.local_name.clone().unwrap_or_default(),
            government_form: country.government_form.clone().unwrap_or_default(),
            head_of_state: country.head_of_state.clone().unwrap_or_default(),
            independence_year: render(country.independence_year),
            surface_area: render(country.surface_area),
            life_expectancy: render(country.life_expectancy),
            population: render(country.population),
            gnp: render(country.gnp),
        }
    }

    /// Parse into a new country.
    ///
    /// The code is trimmed and, when `uppercase_code` is set, upper-cased.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a required field is blank, the code
    /// is too long, or a numeric field does not parse.
    pub fn to_new_country(&self, uppercase_code: bool) -> Result<Country, CoreError> {
        let code = self.code.trim();
        let code = if uppercase_code {
            code.to_uppercase()
        } else {
            code.to_string()
        };
        let country = self.parse_fields(code, None)?;
        validate_new_country(&country)?;
        Ok(country)
    }

    /// Parse into an update of `original`.
    ///
    /// The code always comes from `original`, whatever the draft holds, and
    /// the capital reference is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a required field is blank or a
    /// numeric field does not parse.
    pub fn to_updated_country(&self, original: &Country) -> Result<Country, CoreError> {
        let mut country = self.parse_fields(original.code.clone(), original.capital_id)?;
        country.capital.clone_from(&original.capital);
        validate_country(&country)?;
        Ok(country)
    }

    fn parse_fields(&self, code: String, capital_id: Option<i64>) -> Result<Country, CoreError> {
        Ok(Country {
            code,
            name: self.name.trim().to_string(),
            continent: self.continent.trim().to_string(),
            region: optional_text(&self.region),
            local_name: optional_text(&self.local_name),
            government_form: optional_text(&self.government_form),
            head_of_state: optional_text(&self.head_of_state),
            independence_year: parse_optional("independence year", &self.independence_year)?,
            surface_area: parse_optional("surface area", &self.surface_area)?,
            life_expectancy: parse_optional("life expectancy", &self.life_expectancy)?,
            population: parse_optional("population", &self.population)?,
            gnp: parse_optional("GNP", &self.gnp)?,
            capital_id,
            capital: None,
        })
    }
}

/// Raw language form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDraft {
    pub name: String,
    pub is_official: bool,
    pub percentage: String,
}

impl LanguageDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, is_official: bool, percentage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_official,
            percentage: percentage.into(),
        }
    }

    /// Parse into a language.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is blank or the percentage
    /// is not a number in `[0, 100]`.
    pub fn to_language(&self) -> Result<Language, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("language name is required"));
        }
        let raw = self.percentage.trim();
        let percentage = raw.parse::<f64>().map_err(|_| {
            CoreError::validation(format!("percentage '{raw}' is not a valid number"))
        })?;
        let language = Language::new(name, self.is_official, percentage);
        validate_language(&language)?;
        Ok(language)
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_optional<T: FromStr>(field: &str, raw: &str) -> Result<Option<T>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| {
        CoreError::validation(format!("{field} '{trimmed}' is not a valid number"))
    })
}

fn render<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::entities::Capital;

    fn zedland_draft() -> CountryDraft {
        CountryDraft {
            code: " zzz ".into(),
            name: " Zedland ".into(),
            continent: "Europe".into(),
            independence_year: "1990".into(),
            surface_area: "1234.5".into(),
            population: "42000".into(),
            ..CountryDraft::default()
        }
    }

    #[test]
    fn new_country_normalizes_code_and_text() {
        let country = zedland_draft().to_new_country(true).unwrap();
        assert_eq!(country.code, "ZZZ");
        assert_eq!(country.name, "Zedland");
        assert_eq!(country.region, None);
        assert_eq!(country.independence_year, Some(1990));
        assert_eq!(country.surface_area, Some(1234.5));
        assert_eq!(country.population, Some(42000));
        assert_eq!(country.gnp, None);
    }

    #[test]
    fn new_country_keeps_case_when_not_uppercasing() {
        let country = zedland_draft().to_new_country(false).unwrap();
        assert_eq!(country.code, "zzz");
    }

    #[rstest]
    #[case::year("independence_year", "19x0")]
    #[case::surface("surface_area", "large")]
    #[case::life("life_expectancy", "7O")]
    #[case::population("population", "1.5")]
    #[case::gnp("gnp", "n/a")]
    fn bad_numeric_field_rejected(#[case] field: &str, #[case] raw: &str) {
        let mut draft = zedland_draft();
        match field {
            "independence_year" => draft.independence_year = raw.into(),
            "surface_area" => draft.surface_area = raw.into(),
            "life_expectancy" => draft.life_expectancy = raw.into(),
            "population" => draft.population = raw.into(),
            _ => draft.gnp = raw.into(),
        }
        let before = draft.clone();
        let err = draft.to_new_country(true).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(draft, before);
    }

    #[test]
    fn long_code_rejected_on_insert() {
        let draft = CountryDraft {
            code: "ZZZZ".into(),
            ..zedland_draft()
        };
        assert!(draft.to_new_country(true).is_err());
    }

    #[test]
    fn update_keeps_original_code_and_capital() {
        let original = Country {
            capital_id: Some(7),
            capital: Some(Capital {
                id: 7,
                name: Some("Zed City".into()),
                district: None,
                population: Some(900),
            }),
            ..Country::new("ZZZ", "Zedland", "Europe")
        };
        let mut draft = CountryDraft::from_country(&original);
        draft.code = "QQQQ".into();
        draft.name = "New Zedland".into();

        let updated = draft.to_updated_country(&original).unwrap();
        assert_eq!(updated.code, "ZZZ");
        assert_eq!(updated.name, "New Zedland");
        assert_eq!(updated.capital_id, Some(7));
        assert_eq!(updated.capital, original.capital);
    }

    #[test]
    fn draft_from_country_roundtrips() {
        let original = Country {
            region: Some("Nordic".into()),
            life_expectancy: Some(81.25),
            gnp: Some(12.0),
            ..Country::new("ZZZ", "Zedland", "Europe")
        };
        let draft = CountryDraft::from_country(&original);
        assert_eq!(draft.life_expectancy, "81.25");
        assert_eq!(draft.to_updated_country(&original).unwrap(), original);
    }

    #[rstest]
    #[case("0", true)]
    #[case("100", true)]
    #[case(" 55.5 ", true)]
    #[case("-0.1", false)]
    #[case("100.1", false)]
    #[case("half", false)]
    #[case("", false)]
    fn language_percentage(#[case] raw: &str, #[case] ok: bool) {
        let draft = LanguageDraft::new("Zedish", true, raw);
        assert_eq!(draft.to_language().is_ok(), ok);
    }

    #[test]
    fn language_name_trimmed() {
        let lang = LanguageDraft::new("  Zedish ", true, "55.5").to_language().unwrap();
        assert_eq!(lang, Language::new("Zedish", true, 55.5));
    }
}
