use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One (ingredient, measurement unit, quantity) triple owned by a recipe.
///
/// Lines are never addressed on their own: every recipe mutation replaces the
/// full set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecipeIngredientLine {
    pub id: i64,
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub measurement_unit_id: i64,
    pub quantity: f64,
}
