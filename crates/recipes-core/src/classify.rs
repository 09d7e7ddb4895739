//! Dietary classification of a recipe from its resolved ingredients.

use crate::entities::Ingredient;
use crate::enums::RecipeType;

/// Derive the dietary type from resolved catalog ingredients.
///
/// A single ingredient outside the vegetarian default category makes the
/// whole recipe `NonVegetarian`. Callers pass fully resolved rows, so the
/// empty case only arises in tests and classifies as `Vegetarian`.
#[must_use]
pub fn classify(ingredients: &[Ingredient]) -> RecipeType {
    if ingredients.iter().all(Ingredient::is_vegetarian_default) {
        RecipeType::Vegetarian
    } else {
        RecipeType::NonVegetarian
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::VEGETARIAN_DEFAULT_TYPE_ID;

    fn ingredient(id: i64, name: &str, type_id: i64) -> Ingredient {
        Ingredient {
            id,
            name: name.into(),
            ingredient_type_id: type_id,
        }
    }

    #[test]
    fn all_vegetarian_default_is_vegetarian() {
        let rows = [
            ingredient(1, "Pasta", VEGETARIAN_DEFAULT_TYPE_ID),
            ingredient(2, "Water", VEGETARIAN_DEFAULT_TYPE_ID),
            ingredient(3, "Salt", VEGETARIAN_DEFAULT_TYPE_ID),
        ];
        assert_eq!(classify(&rows), RecipeType::Vegetarian);
    }

    #[test]
    fn one_other_category_is_non_vegetarian() {
        let rows = [
            ingredient(1, "Pasta", VEGETARIAN_DEFAULT_TYPE_ID),
            ingredient(4, "Beef", 2),
        ];
        assert_eq!(classify(&rows), RecipeType::NonVegetarian);
    }

    #[test]
    fn any_non_default_type_counts() {
        // Category 3 is neither seeded type; it still is not the default.
        let rows = [ingredient(9, "Honey", 3)];
        assert_eq!(classify(&rows), RecipeType::NonVegetarian);
    }
}
