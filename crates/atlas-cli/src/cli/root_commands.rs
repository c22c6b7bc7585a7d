use atlas_core::drafts::CountryDraft;
use clap::{Args, Subcommand};

/// Root-level commands for `atlas`.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Verify the database opens and answers queries.
    Check,
    /// List all countries sorted by name.
    List,
    /// Show a country with its capital and languages.
    Show { code: String },
    /// List the languages of a country.
    Languages { code: String },
    /// List the distinct continents in use.
    Continents,
    /// Add a country.
    Add {
        /// Country code, at most 3 characters.
        #[arg(long)]
        code: String,
        #[command(flatten)]
        fields: CountryFields,
    },
    /// Edit a country. The code cannot change.
    Edit {
        code: String,
        #[command(flatten)]
        fields: CountryFields,
    },
    /// Delete a country together with all of its languages.
    Delete {
        code: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a language to a country.
    AddLanguage {
        code: String,
        #[arg(long)]
        name: String,
        /// Share of the population, 0 to 100.
        #[arg(long)]
        percentage: String,
        #[arg(long)]
        official: bool,
    },
    /// Remove a language from a country.
    DeleteLanguage {
        code: String,
        language: String,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Country fields accepted by `add` and `edit`. Omitted flags keep the
/// draft's current value.
#[derive(Clone, Debug, Default, Args)]
pub struct CountryFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub continent: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub local_name: Option<String>,
    #[arg(long)]
    pub government_form: Option<String>,
    #[arg(long)]
    pub head_of_state: Option<String>,
    #[arg(long)]
    pub independence_year: Option<String>,
    #[arg(long)]
    pub surface_area: Option<String>,
    #[arg(long)]
    pub life_expectancy: Option<String>,
    #[arg(long)]
    pub population: Option<String>,
    #[arg(long)]
    pub gnp: Option<String>,
}

impl CountryFields {
    /// Overwrite the draft fields that were given on the command line.
    pub fn apply(&self, draft: &mut CountryDraft) {
        let pairs = [
            (&self.name, &mut draft.name),
            (&self.continent, &mut draft.continent),
            (&self.region, &mut draft.region),
            (&self.local_name, &mut draft.local_name),
            (&self.government_form, &mut draft.government_form),
            (&self.head_of_state, &mut draft.head_of_state),
            (&self.independence_year, &mut draft.independence_year),
            (&self.surface_area, &mut draft.surface_area),
            (&self.life_expectancy, &mut draft.life_expectancy),
            (&self.population, &mut draft.population),
            (&self.gnp, &mut draft.gnp),
        ];
        for (given, field) in pairs {
            if let Some(value) = given {
                field.clone_from(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn apply_overwrites_only_given_fields() {
        let mut draft = CountryDraft {
            code: "ZZZ".into(),
            name: "Zedland".into(),
            region: "Test".into(),
            ..CountryDraft::default()
        };
        let fields = CountryFields {
            name: Some("Zedland Republic".into()),
            gnp: Some(String::new()),
            ..CountryFields::default()
        };

        fields.apply(&mut draft);

        assert_eq!(draft.name, "Zedland Republic");
        assert_eq!(draft.region, "Test");
        assert_eq!(draft.gnp, "");
        assert_eq!(draft.code, "ZZZ");
    }
}
