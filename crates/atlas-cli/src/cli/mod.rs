use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, CountryFields};

/// Top-level CLI parser for the `atlas` binary.
#[derive(Debug, Parser)]
#[command(name = "atlas", version, about = "Atlas - countries and their languages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file, overriding `database.path` from config
    #[arg(long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            database: self.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["atlas", "--format", "json", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["atlas", "continents", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Continents));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["atlas", "--format", "xml", "list"]).is_err());
    }

    #[test]
    fn database_override_is_carried_into_flags() {
        let cli = Cli::try_parse_from(["atlas", "check", "--database", "/tmp/world.db"])
            .expect("cli should parse");
        assert_eq!(cli.global_flags().database.as_deref(), Some("/tmp/world.db"));
    }

    #[test]
    fn add_collects_country_fields() {
        let cli = Cli::try_parse_from([
            "atlas",
            "add",
            "--code",
            "zzz",
            "--name",
            "Zedland",
            "--continent",
            "Europe",
            "--population",
            "1200",
        ])
        .expect("cli should parse");

        let Commands::Add { code, fields } = cli.command else {
            panic!("expected add");
        };
        assert_eq!(code, "zzz");
        assert_eq!(fields.name.as_deref(), Some("Zedland"));
        assert_eq!(fields.population.as_deref(), Some("1200"));
        assert_eq!(fields.gnp, None);
    }

    #[test]
    fn edit_has_no_code_flag() {
        assert!(Cli::try_parse_from(["atlas", "edit", "ZZZ", "--code", "QQQ"]).is_err());
    }

    #[test]
    fn add_language_parses_flags() {
        let cli = Cli::try_parse_from([
            "atlas",
            "add-language",
            "ZZZ",
            "--name",
            "Zedish",
            "--percentage",
            "80",
            "--official",
        ])
        .expect("cli should parse");

        let Commands::AddLanguage {
            code,
            name,
            percentage,
            official,
        } = cli.command
        else {
            panic!("expected add-language");
        };
        assert_eq!((code.as_str(), name.as_str()), ("ZZZ", "Zedish"));
        assert_eq!(percentage, "80");
        assert!(official);
    }

    #[test]
    fn delete_accepts_yes() {
        let cli = Cli::try_parse_from(["atlas", "delete", "ZZZ", "--yes"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Delete { yes: true, .. }));
    }
}
