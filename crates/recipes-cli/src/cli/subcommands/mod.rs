mod catalog;
mod recipe;

pub use catalog::CatalogCommands;
pub use recipe::{ListArgs, RecipeCommands, SubmissionSource};
