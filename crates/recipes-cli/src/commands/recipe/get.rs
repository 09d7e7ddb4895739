use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let recipe = ctx.service.get_recipe(id).await?;
    output(&recipe, flags.format)
}
