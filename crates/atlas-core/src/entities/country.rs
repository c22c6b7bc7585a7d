use serde::{Deserialize, Serialize};

/// A row of the `country` table, plus the joined capital city when present.
///
/// `code` is the primary key. Once a country exists its code is never
/// rewritten; updates always target the stored code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub code: String,
    pub name: String,
    /// Continent. An open set derived from the stored rows, not a fixed enum.
    pub continent: String,
    pub region: Option<String>,
    pub local_name: Option<String>,
    pub government_form: Option<String>,
    pub head_of_state: Option<String>,
    pub independence_year: Option<i64>,
    pub surface_area: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub gnp: Option<f64>,
    pub population: Option<i64>,
    /// Foreign key into `city`. Written on insert, never touched by updates.
    pub capital_id: Option<i64>,
    /// Read-only view of the capital, filled by the detail query's join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Capital>,
}

impl Country {
    /// A country with only the required fields set.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, continent: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            continent: continent.into(),
            ..Self::default()
        }
    }

    /// Project the columns shown in the browse list.
    #[must_use]
    pub fn summary(&self) -> CountrySummary {
        CountrySummary {
            code: self.code.clone(),
            name: self.name.clone(),
            continent: self.continent.clone(),
            region: self.region.clone(),
        }
    }
}

/// Derived capital city fields. Never written by Atlas.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capital {
    pub id: i64,
    pub name: Option<String>,
    pub district: Option<String>,
    pub population: Option<i64>,
}

/// One row of the browse list, ordered by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub region: Option<String>,
}
