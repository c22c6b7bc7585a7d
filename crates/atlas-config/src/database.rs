//! Store location and connection settings.

use serde::{Deserialize, Serialize};

/// Path used for the in-memory database.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    String::from("atlas.db")
}

const fn default_foreign_keys() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Whether to enforce `countrylanguage → country` foreign keys.
    #[serde(default = "default_foreign_keys")]
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            foreign_keys: default_foreign_keys(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "atlas.db");
        assert!(config.foreign_keys);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn memory_path_detected() {
        let config = DatabaseConfig {
            path: IN_MEMORY.into(),
            ..Default::default()
        };
        assert!(config.is_in_memory());
    }
}
