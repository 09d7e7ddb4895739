//! Entity structs for recipes and the read-only catalog.
//!
//! Each entity maps to a table in the libSQL database (see
//! `recipes-db/migrations/001_initial.sql`). Recipe submissions are the
//! inbound command shape; they are not persisted as-is.

mod ingredient;
mod ingredient_line;
mod measurement_unit;
mod recipe;
mod submission;

pub use ingredient::{Ingredient, VEGETARIAN_DEFAULT_TYPE_ID};
pub use ingredient_line::RecipeIngredientLine;
pub use measurement_unit::MeasurementUnit;
pub use recipe::{Recipe, RecipeHeader};
pub use submission::{IngredientLineInput, RecipeSubmission};
