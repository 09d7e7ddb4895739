use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ingredient type ID of the category recipes count as vegetarian.
pub const VEGETARIAN_DEFAULT_TYPE_ID: i64 = 1;

/// A catalog ingredient. Read-only from the recipe service's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub ingredient_type_id: i64,
}

impl Ingredient {
    /// Whether this ingredient belongs to the vegetarian default category.
    #[must_use]
    pub const fn is_vegetarian_default(&self) -> bool {
        self.ingredient_type_id == VEGETARIAN_DEFAULT_TYPE_ID
    }
}
