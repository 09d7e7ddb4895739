use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RecipeDeleteResponse {
    id: i64,
    deleted: bool,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_recipe(id).await?;
    output(&RecipeDeleteResponse { id, deleted: true }, flags.format)
}
