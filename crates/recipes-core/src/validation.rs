//! Ordered structural checks on a submitted recipe.
//!
//! Runs before any catalog lookup or write. Existence of referenced catalog
//! rows is not checked here; see [`crate::catalog`].

use crate::entities::{IngredientLineInput, RecipeSubmission};
use crate::errors::{
    RECIPE_INGREDIENT_INVALID_INPUT, RECIPE_INVALID_INPUT, RECIPE_WITHOUT_INGREDIENTS,
    RecipeError,
};

/// Minimum number of ingredient lines on a recipe.
pub const MINIMUM_INGREDIENT_NUMBER: usize = 1;

/// Maximum length of the instructions text, in characters.
pub const MAXIMUM_INSTRUCTIONS_LENGTH: usize = 500;

/// Validate a submission, returning the first failure.
///
/// Order:
/// 1. header fields (name non-blank, instructions 1..=500 chars, servings > 0)
/// 2. at least one ingredient line
/// 3. every line's quantity strictly positive
///
/// # Errors
///
/// Returns `RecipeError::InvalidInput` describing the first failed check.
pub fn validate_submission(submission: &RecipeSubmission) -> Result<(), RecipeError> {
    validate_header(submission)?;
    validate_ingredient_minimum(submission)?;
    submission
        .ingredients
        .iter()
        .try_for_each(validate_ingredient_line)
}

fn validate_header(submission: &RecipeSubmission) -> Result<(), RecipeError> {
    let instructions_len = submission.instructions.chars().count();
    let valid = !submission.name.trim().is_empty()
        && !submission.instructions.trim().is_empty()
        && instructions_len <= MAXIMUM_INSTRUCTIONS_LENGTH
        && submission.servings_number > 0;
    if valid {
        Ok(())
    } else {
        Err(RecipeError::invalid_input(RECIPE_INVALID_INPUT))
    }
}

fn validate_ingredient_minimum(submission: &RecipeSubmission) -> Result<(), RecipeError> {
    if submission.ingredients.len() < MINIMUM_INGREDIENT_NUMBER {
        return Err(RecipeError::invalid_input(RECIPE_WITHOUT_INGREDIENTS));
    }
    Ok(())
}

// `!(q > 0.0)` so that NaN is rejected too.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate_ingredient_line(line: &IngredientLineInput) -> Result<(), RecipeError> {
    if !(line.quantity > 0.0) {
        return Err(RecipeError::invalid_input(RECIPE_INGREDIENT_INVALID_INPUT));
    }
    Ok(())
}
