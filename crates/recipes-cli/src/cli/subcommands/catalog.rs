use clap::Subcommand;

/// Catalog commands. The catalog is seeded and read-only.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// List every ingredient with its ID and category.
    Ingredients,
    /// List every measurement unit with its ID.
    Units,
}
