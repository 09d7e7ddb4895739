//! Structured filter for recipe listings.
//!
//! Each field is an optional constraint; an absent field applies no filter.
//! The storage layer translates this into its own query. Nothing here knows
//! about SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RecipeType;
use crate::errors::RecipeError;

/// Cap on the size of each of the include and exclude name lists.
pub const MAXIMUM_INGREDIENTS_FILTER: usize = 10;

/// Raw listing criteria as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeQuery {
    pub is_vegetarian: Option<bool>,
    #[serde(default)]
    pub included_ingredients: Vec<String>,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
    pub instruction_keyword: Option<String>,
    pub servings: Option<i32>,
}

/// Normalized filter handed to the recipe store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Exact dietary type.
    pub recipe_type: Option<RecipeType>,
    /// Upper-cased names; a recipe passes if it contains any of them.
    pub included_ingredients: Vec<String>,
    /// Upper-cased names; a recipe is dropped if it contains any of them.
    pub excluded_ingredients: Vec<String>,
    /// Case-sensitive substring of the instructions. Never blank.
    pub instruction_keyword: Option<String>,
    pub servings: Option<i32>,
}

impl RecipeFilter {
    /// Normalize caller criteria into a filter.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` when either name list has more than
    /// [`MAXIMUM_INGREDIENTS_FILTER`] entries.
    pub fn build(query: &RecipeQuery) -> Result<Self, RecipeError> {
        let included_ingredients = normalize_names(&query.included_ingredients)?;
        let excluded_ingredients = normalize_names(&query.excluded_ingredients)?;

        let instruction_keyword = query
            .instruction_keyword
            .as_ref()
            .filter(|kw| !kw.trim().is_empty())
            .cloned();

        Ok(Self {
            recipe_type: query.is_vegetarian.map(RecipeType::from_vegetarian_flag),
            included_ingredients,
            excluded_ingredients,
            instruction_keyword,
            servings: query.servings,
        })
    }

    #[must_use]
    pub fn has_include(&self) -> bool {
        !self.included_ingredients.is_empty()
    }

    #[must_use]
    pub fn has_exclude(&self) -> bool {
        !self.excluded_ingredients.is_empty()
    }
}

fn normalize_names(names: &[String]) -> Result<Vec<String>, RecipeError> {
    if names.len() > MAXIMUM_INGREDIENTS_FILTER {
        return Err(RecipeError::invalid_input(format!(
            "The maximum number of ingredients to filter is {MAXIMUM_INGREDIENTS_FILTER}"
        )));
    }
    Ok(names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_ascii_uppercase)
        .collect())
}
