//! Local libSQL database configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Path understood by libSQL as a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    "recipes.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path", "must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_in_working_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "recipes.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn blank_path_is_invalid() {
        let config = DatabaseConfig { path: "  ".into() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "database.path"
        ));
    }
}
