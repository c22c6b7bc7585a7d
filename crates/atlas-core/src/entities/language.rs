use serde::{Deserialize, Serialize};

/// A language spoken in a country (`countrylanguage` row).
///
/// The owning country code is not part of the value; it scopes every
/// repository call instead. `(country code, name)` is the composite key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Language {
    pub name: String,
    pub is_official: bool,
    /// Share of the population speaking the language, within `[0, 100]`.
    pub percentage: f64,
}

impl Language {
    #[must_use]
    pub fn new(name: impl Into<String>, is_official: bool, percentage: f64) -> Self {
        Self {
            name: name.into(),
            is_official,
            percentage,
        }
    }

    /// Storage form of `is_official` in the `T`/`F` text enum column.
    #[must_use]
    pub const fn official_flag(&self) -> &'static str {
        if self.is_official { "T" } else { "F" }
    }

    /// Parse the `T`/`F` column value. Anything other than `T` is false.
    #[must_use]
    pub fn parse_official_flag(flag: &str) -> bool {
        flag.trim().eq_ignore_ascii_case("T")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn official_flag_roundtrips_through_storage_form() {
        let lang = Language::new("Basque", true, 1.6);
        assert_eq!(lang.official_flag(), "T");
        assert!(Language::parse_official_flag(lang.official_flag()));
        assert!(!Language::parse_official_flag("F"));
    }

    #[test]
    fn lowercase_flag_is_official() {
        assert!(Language::parse_official_flag("t"));
        assert!(!Language::parse_official_flag(""));
    }
}
