//! # atlas-config
//!
//! Layered configuration loading for Atlas using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATLAS_*` prefix, `__` as separator)
//! 2. Project-level `.atlas/config.toml`
//! 3. User-level `~/.config/atlas/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATLAS_DATABASE__PATH` -> `database.path`,
//! `ATLAS_EDITOR__UPPERCASE_CODES` -> `editor.uppercase_codes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use atlas_config::AtlasConfig;
//!
//! let config = AtlasConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod editor;
mod error;

pub use database::{DatabaseConfig, IN_MEMORY};
pub use editor::EditorConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

impl AtlasConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".atlas/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ATLAS_").split("__"))
    }

    /// Reject values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty database path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atlas").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AtlasConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.path, "atlas.db");
        assert!(config.editor.require_confirmation);
    }

    #[test]
    fn empty_path_rejected() {
        let mut config = AtlasConfig::default();
        config.database.path = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.path"));
    }
}
