//! Edit session behavior.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Upper-case new country codes before insert.
    #[serde(default = "default_true")]
    pub uppercase_codes: bool,

    /// Ask the operator before deleting a country or a language.
    #[serde(default = "default_true")]
    pub require_confirmation: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            uppercase_codes: true,
            require_confirmation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EditorConfig::default();
        assert!(config.uppercase_codes);
        assert!(config.require_confirmation);
    }
}
