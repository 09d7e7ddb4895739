//! Outward recipe views and the assembler that builds them.
//!
//! These are the JSON shapes returned by `recipes recipe ...` and the HTTP
//! routes. Field names are camelCase.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Ingredient, Recipe, RecipeIngredientLine};
use crate::enums::RecipeType;
use crate::pagination::Page;

/// One ingredient line of a returned recipe.
///
/// `ingredient_name` is only filled in by get-by-id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineView {
    pub ingredient_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_name: Option<String>,
    pub quantity: f64,
    pub measurement_unit_id: i64,
}

/// A returned recipe.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: i64,
    pub name: String,
    pub instructions: String,
    pub servings_number: i32,
    pub recipe_type: RecipeType,
    pub creation_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub ingredients: Vec<IngredientLineView>,
}

/// Response from `recipes recipe list` and `GET /recipe`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRecipeResponse {
    pub content: Vec<RecipeView>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}

/// Build a recipe view without ingredient names, as create and update return.
#[must_use]
pub fn assemble_recipe(recipe: Recipe, lines: &[RecipeIngredientLine]) -> RecipeView {
    let ingredients = lines
        .iter()
        .map(|line| line_view(line, None))
        .collect();
    with_ingredients(recipe, ingredients)
}

/// Build a recipe view with each line's ingredient name resolved.
///
/// Lines whose ingredient is absent from `catalog` keep a `None` name.
#[must_use]
pub fn assemble_recipe_with_names(
    recipe: Recipe,
    lines: &[RecipeIngredientLine],
    catalog: &[Ingredient],
) -> RecipeView {
    let names: HashMap<i64, &str> = catalog.iter().map(|i| (i.id, i.name.as_str())).collect();
    let ingredients = lines
        .iter()
        .map(|line| line_view(line, names.get(&line.ingredient_id).copied()))
        .collect();
    with_ingredients(recipe, ingredients)
}

/// Wrap a page of recipe headers. Listed recipes carry no ingredient lines.
#[must_use]
pub fn assemble_page(page: Page<Recipe>) -> PaginatedRecipeResponse {
    let total_pages = page.total_pages();
    let last = page.is_last();
    let page = page.map(|recipe| with_ingredients(recipe, Vec::new()));
    PaginatedRecipeResponse {
        content: page.content,
        page_no: page.page,
        page_size: page.size,
        total_elements: page.total_elements,
        total_pages,
        last,
    }
}

fn line_view(line: &RecipeIngredientLine, name: Option<&str>) -> IngredientLineView {
    IngredientLineView {
        ingredient_id: line.ingredient_id,
        ingredient_name: name.map(str::to_string),
        quantity: line.quantity,
        measurement_unit_id: line.measurement_unit_id,
    }
}

fn with_ingredients(recipe: Recipe, ingredients: Vec<IngredientLineView>) -> RecipeView {
    RecipeView {
        id: recipe.id,
        name: recipe.name,
        instructions: recipe.instructions,
        servings_number: recipe.servings_number,
        recipe_type: recipe.recipe_type,
        creation_date: recipe.created_at,
        updated_date: recipe.updated_at,
        ingredients,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pagination::PageRequest;

    fn recipe(id: i64, name: &str) -> Recipe {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Recipe {
            id,
            name: name.into(),
            instructions: "Boil the pasta".into(),
            servings_number: 2,
            recipe_type: RecipeType::Vegetarian,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn line(ingredient_id: i64) -> RecipeIngredientLine {
        RecipeIngredientLine {
            id: ingredient_id * 10,
            recipe_id: 1,
            ingredient_id,
            measurement_unit_id: 1,
            quantity: 100.0,
        }
    }

    #[test]
    fn write_path_view_omits_names() {
        let view = assemble_recipe(recipe(1, "Spaghetti"), &[line(1), line(2)]);
        assert_eq!(view.ingredients.len(), 2);
        assert!(view.ingredients.iter().all(|l| l.ingredient_name.is_none()));

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["ingredients"][0].get("ingredientName").is_none());
        assert_eq!(json["servingsNumber"], 2);
        assert_eq!(json["recipeType"], "VEGETARIAN");
    }

    #[test]
    fn get_path_view_resolves_names() {
        let catalog = vec![
            Ingredient {
                id: 1,
                name: "Pasta".into(),
                ingredient_type_id: 1,
            },
            Ingredient {
                id: 2,
                name: "Water".into(),
                ingredient_type_id: 1,
            },
        ];
        let view =
            assemble_recipe_with_names(recipe(1, "Spaghetti"), &[line(1), line(2)], &catalog);
        let names: Vec<_> = view
            .ingredients
            .iter()
            .map(|l| l.ingredient_name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("Pasta"), Some("Water")]);
    }

    #[test]
    fn page_wrapper_carries_metadata_and_no_lines() {
        let request = PageRequest {
            page: 0,
            size: 1,
            sort: vec![],
        };
        let page = Page::new(vec![recipe(2, "Steak")], &request, 2);
        let response = assemble_page(page);

        assert_eq!(response.content.len(), 1);
        assert!(response.content[0].ingredients.is_empty());
        assert_eq!(response.page_no, 0);
        assert_eq!(response.page_size, 1);
        assert_eq!(response.total_elements, 2);
        assert_eq!(response.total_pages, 2);
        assert!(!response.last);

        let json = serde_json::to_value(&response).unwrap();
        for key in ["content", "pageNo", "pageSize", "totalElements", "totalPages", "last"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
