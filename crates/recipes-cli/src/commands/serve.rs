use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::server;

/// Handle `recipes serve`. Runs until interrupted.
pub async fn handle(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| ctx.config.server.bind.clone());
    server::run(&bind, ctx).await
}
