use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Where a recipe submission body is read from.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SubmissionSource {
    /// Inline JSON submission
    #[arg(long)]
    pub json: Option<String>,
    /// Path to a JSON submission file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Recipe commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RecipeCommands {
    /// Create a recipe.
    Create {
        #[command(flatten)]
        source: SubmissionSource,
    },
    /// Replace a recipe's fields and its whole ingredient list.
    Update {
        id: i64,
        #[command(flatten)]
        source: SubmissionSource,
    },
    /// Delete a recipe with its ingredient lines.
    Delete { id: i64 },
    /// Get a recipe by ID.
    Get { id: i64 },
    /// List recipes, optionally filtered.
    List(ListArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// true for vegetarian recipes only, false for non-vegetarian only
    #[arg(long)]
    pub vegetarian: Option<bool>,
    /// Keep recipes containing any of these ingredients (repeatable or comma separated)
    #[arg(long, value_name = "NAME")]
    pub include: Vec<String>,
    /// Drop recipes containing any of these ingredients (repeatable or comma separated)
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,
    /// Case-sensitive text the instructions must contain
    #[arg(long)]
    pub keyword: Option<String>,
    /// Exact number of servings
    #[arg(long)]
    pub servings: Option<i32>,
    /// Page index, starting at 0
    #[arg(long)]
    pub page: Option<u32>,
    /// Page size
    #[arg(long)]
    pub size: Option<u32>,
    /// PROP[,PROP...][,asc|desc]; repeatable
    #[arg(long, value_name = "PROP[,DIR]")]
    pub sort: Vec<String>,
}
