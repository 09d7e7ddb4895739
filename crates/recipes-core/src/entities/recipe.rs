use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RecipeType;

/// A persisted recipe header. Ingredient lines live in their own table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub instructions: String,
    pub servings_number: i32,
    pub recipe_type: RecipeType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable columns of a recipe header, as written on create and update.
///
/// `recipe_type` is always the classifier's output, never caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeHeader {
    pub name: String,
    pub instructions: String,
    pub servings_number: i32,
    pub recipe_type: RecipeType,
}
