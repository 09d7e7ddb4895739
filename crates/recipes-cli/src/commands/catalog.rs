use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `recipes catalog`.
pub async fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::Ingredients => {
            let ingredients = ctx.service.list_ingredients().await?;
            output(&ingredients, flags.format)
        }
        CatalogCommands::Units => {
            let units = ctx.service.list_measurement_units().await?;
            output(&units, flags.format)
        }
    }
}
