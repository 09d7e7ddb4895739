use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Recipe { action } => commands::recipe::handle(&action, &ctx, flags).await,
        Commands::Catalog { action } => commands::catalog::handle(&action, &ctx, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, ctx).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
