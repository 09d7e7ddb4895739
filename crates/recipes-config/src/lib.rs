//! # recipes-config
//!
//! Layered configuration loading for the recipe service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RECIPES_*` prefix, `__` as separator)
//! 2. Project-level `.recipes/config.toml`
//! 3. User-level `~/.config/recipes/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RECIPES_DATABASE__PATH` -> `database.path`,
//! `RECIPES_LISTING__DEFAULT_PAGE_SIZE` -> `listing.default_page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use recipes_config::RecipesConfig;
//!
//! let config = RecipesConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod listing;
mod server;

pub use database::{DatabaseConfig, IN_MEMORY};
pub use error::ConfigError;
pub use listing::ListingConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable read into the config.
pub const ENV_PREFIX: &str = "RECIPES_";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RecipesConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

impl RecipesConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse, or
    /// `ConfigError::InvalidValue` if the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".recipes/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints the types cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.server.validate()?;
        self.listing.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recipes").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
