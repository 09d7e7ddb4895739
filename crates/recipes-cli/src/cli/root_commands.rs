use clap::{Args, Subcommand};

use super::subcommands::{CatalogCommands, RecipeCommands};

/// Root command tree of the `recipes` binary.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create, update, delete, get, and list recipes.
    Recipe {
        #[command(subcommand)]
        action: RecipeCommands,
    },
    /// Read-only catalog of ingredients and measurement units.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Print the JSON Schema of a request or response type.
    Schema(SchemaArgs),
    /// Serve the recipe routes over HTTP.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list the available names
    pub type_name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overrides server.bind
    #[arg(long)]
    pub bind: Option<String>,
}
