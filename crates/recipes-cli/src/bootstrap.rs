use anyhow::Context;
use recipes_config::{ConfigError, RecipesConfig};

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RecipesConfig> {
    let config = RecipesConfig::load_with_dotenv().context("failed to load recipes configuration")?;
    apply_overrides(config, flags).context("invalid command-line override")
}

fn apply_overrides(
    mut config: RecipesConfig,
    flags: &GlobalFlags,
) -> Result<RecipesConfig, ConfigError> {
    if let Some(path) = &flags.database {
        tracing::debug!(%path, "database path overridden on the command line");
        config.database.path.clone_from(path);
        config.validate()?;
    }
    Ok(config)
}
