//! Integration tests for config layering.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use atlas_config::AtlasConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "world.db"
foreign_keys = false

[editor]
uppercase_codes = false
require_confirmation = false
"#,
        )?;

        let config: AtlasConfig = Figment::from(Serialized::defaults(AtlasConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "world.db");
        assert!(!config.database.foreign_keys);
        assert!(!config.editor.uppercase_codes);
        assert!(!config.editor.require_confirmation);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atlas")?;
        jail.create_file(".atlas/config.toml", "[database]\npath = \"project.db\"\n")?;

        let config = AtlasConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        assert!(config.editor.uppercase_codes);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".atlas")?;
        jail.create_file(".atlas/config.toml", "[database]\npath = \"project.db\"\n")?;
        jail.set_env("ATLAS_DATABASE__PATH", ":memory:");
        jail.set_env("ATLAS_EDITOR__REQUIRE_CONFIRMATION", "false");

        let config = AtlasConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        assert!(!config.editor.require_confirmation);
        Ok(())
    });
}

#[test]
fn empty_path_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("ATLAS_DATABASE__PATH", "");
        assert!(AtlasConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn toml_outside_the_working_directory_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[database]\npath = \"/srv/atlas/world.db\"\n\n[editor]\nuppercase_codes = false\n",
    )
    .expect("write config");

    let config: AtlasConfig = Figment::from(Serialized::defaults(AtlasConfig::default()))
        .merge(Toml::file(&path))
        .extract()
        .expect("config extracts");

    assert_eq!(config.database.path, "/srv/atlas/world.db");
    assert!(config.database.foreign_keys);
    assert!(!config.editor.uppercase_codes);
    assert!(config.validate().is_ok());
}
