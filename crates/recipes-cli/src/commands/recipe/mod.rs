mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RecipeCommands;
use crate::context::AppContext;

/// Handle `recipes recipe`.
pub async fn handle(
    action: &RecipeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RecipeCommands::Create { source } => create::run(source, ctx, flags).await,
        RecipeCommands::Update { id, source } => update::run(*id, source, ctx, flags).await,
        RecipeCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        RecipeCommands::Get { id } => get::run(*id, ctx, flags).await,
        RecipeCommands::List(args) => list::run(args, ctx, flags).await,
    }
}
