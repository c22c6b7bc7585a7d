//! Immutable view of the selected country.

use atlas_core::entities::{Country, Language};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The selected country and its languages as last loaded from the store.
///
/// A snapshot is never edited in place. Loading replaces it as a whole, and
/// cancelling an edit shows it again unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    country: Country,
    languages: Vec<Language>,
    loaded_at: DateTime<Utc>,
}

impl SessionSnapshot {
    pub(crate) fn new(country: Country, languages: Vec<Language>) -> Self {
        Self {
            country,
            languages,
            loaded_at: Utc::now(),
        }
    }

    /// Same country, freshly loaded languages.
    pub(crate) fn with_languages(&self, languages: Vec<Language>) -> Self {
        Self::new(self.country.clone(), languages)
    }

    #[must_use]
    pub const fn country(&self) -> &Country {
        &self.country
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.country.code
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    #[must_use]
    pub fn language(&self, name: &str) -> Option<&Language> {
        self.languages.iter().find(|l| l.name == name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn replacing_languages_keeps_country() {
        let first = SessionSnapshot::new(Country::new("ZZZ", "Zedland", "Europe"), vec![]);
        let second = first.with_languages(vec![Language::new("Zedish", true, 80.0)]);

        assert_eq!(second.country(), first.country());
        assert!(first.languages().is_empty());
        assert_eq!(second.language("Zedish").map(|l| l.percentage), Some(80.0));
        assert!(second.loaded_at() >= first.loaded_at());
    }
}
