use recipes_core::filter::RecipeQuery;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ListArgs;
use crate::commands::shared::parse::{parse_sort, split_names};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = to_query(args);
    let page = ctx.page_request(args.page, args.size, parse_sort(&args.sort)?);
    let response = ctx.service.list_recipes(&query, &page).await?;
    output(&response, flags.format)
}

fn to_query(args: &ListArgs) -> RecipeQuery {
    RecipeQuery {
        is_vegetarian: args.vegetarian,
        included_ingredients: split_names(&args.include),
        excluded_ingredients: split_names(&args.exclude),
        instruction_keyword: args.keyword.clone(),
        servings: args.servings,
    }
}
