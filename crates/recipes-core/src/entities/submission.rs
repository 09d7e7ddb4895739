use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inbound recipe for create and update.
///
/// Uses the outward camelCase field names. Dietary type and timestamps are
/// not accepted here; they are derived by the service.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub servings_number: i32,
    #[serde(default)]
    pub ingredients: Vec<IngredientLineInput>,
}

/// One submitted ingredient line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineInput {
    pub ingredient_id: i64,
    pub measurement_unit_id: i64,
    pub quantity: f64,
}

impl RecipeSubmission {
    /// Distinct ingredient IDs referenced by the submitted lines.
    #[must_use]
    pub fn ingredient_ids(&self) -> BTreeSet<i64> {
        self.ingredients.iter().map(|l| l.ingredient_id).collect()
    }

    /// Distinct measurement unit IDs referenced by the submitted lines.
    #[must_use]
    pub fn measurement_unit_ids(&self) -> BTreeSet<i64> {
        self.ingredients
            .iter()
            .map(|l| l.measurement_unit_id)
            .collect()
    }
}
