use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubmissionSource;
use crate::commands::shared::submission::read_submission;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    source: &SubmissionSource,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let submission = read_submission(source, &ctx.schemas)?;
    let recipe = ctx.service.update_recipe(id, &submission).await?;
    output(&recipe, flags.format)
}
