//! Shared test utilities for recipes-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use recipes_core::entities::{IngredientLineInput, RecipeSubmission};

    use crate::RecipeDb;
    use crate::service::RecipeService;

    /// In-memory service over a freshly seeded catalog.
    pub async fn test_service() -> RecipeService {
        let db = RecipeDb::open_local(":memory:").await.unwrap();
        RecipeService::from_db(db)
    }

    pub const fn line(
        ingredient_id: i64,
        measurement_unit_id: i64,
        quantity: f64,
    ) -> IngredientLineInput {
        IngredientLineInput {
            ingredient_id,
            measurement_unit_id,
            quantity,
        }
    }

    /// Submission with `(ingredient, unit, quantity)` lines.
    pub fn submission(name: &str, lines: &[(i64, i64, f64)]) -> RecipeSubmission {
        RecipeSubmission {
            name: name.to_string(),
            instructions: format!("Cook the {name} and serve"),
            servings_number: 2,
            ingredients: lines.iter().map(|&(i, u, q)| line(i, u, q)).collect(),
        }
    }
}
