//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use recipes_config::{ConfigError, RecipesConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/recipes/recipes.db"

[server]
bind = "0.0.0.0:9000"

[listing]
default_page_size = 50
max_page_size = 500
"#,
        )?;

        let config: RecipesConfig = Figment::from(Serialized::defaults(RecipesConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/recipes/recipes.db");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.listing.default_page_size, 50);
        assert_eq!(config.listing.max_page_size, 500);
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[listing]
default_page_size = 5
"#,
        )?;

        let config: RecipesConfig = Figment::from(Serialized::defaults(RecipesConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.listing.default_page_size, 5);
        assert_eq!(config.listing.max_page_size, 2000);
        assert_eq!(config.database.path, "recipes.db");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".recipes")?;
        jail.create_file(
            ".recipes/config.toml",
            r#"
[database]
path = ":memory:"
"#,
        )?;

        let config = RecipesConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn load_rejects_inconsistent_listing_sizes() {
    Jail::expect_with(|jail| {
        jail.create_dir(".recipes")?;
        jail.create_file(
            ".recipes/config.toml",
            r#"
[listing]
default_page_size = 100
max_page_size = 10
"#,
        )?;

        let err = RecipesConfig::load().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "listing.max_page_size"
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".recipes")?;
        jail.create_file(".recipes/config.toml", "[listing\ndefault_page_size = ")?;

        let err = RecipesConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
