//! Ingredient-line store. Lines are always replaced as a whole set.

use recipes_core::entities::{IngredientLineInput, RecipeIngredientLine};

use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, recipe_id, ingredient_id, measurement_unit_id, quantity";

fn row_to_line(row: &libsql::Row) -> Result<RecipeIngredientLine, DatabaseError> {
    Ok(RecipeIngredientLine {
        id: row.get::<i64>(0)?,
        recipe_id: row.get::<i64>(1)?,
        ingredient_id: row.get::<i64>(2)?,
        measurement_unit_id: row.get::<i64>(3)?,
        quantity: row.get::<f64>(4)?,
    })
}

/// Remove every line of a recipe. Returns the number of rows deleted.
///
/// # Errors
///
/// Returns `DatabaseError` if the delete fails.
pub async fn delete_by_recipe_id(
    conn: &libsql::Connection,
    recipe_id: i64,
) -> Result<u64, DatabaseError> {
    Ok(conn
        .execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1",
            [recipe_id],
        )
        .await?)
}

/// Insert lines for a recipe, in submission order.
///
/// # Errors
///
/// Returns `DatabaseError` if any insert fails.
pub async fn save_all(
    conn: &libsql::Connection,
    recipe_id: i64,
    lines: &[IngredientLineInput],
) -> Result<Vec<RecipeIngredientLine>, DatabaseError> {
    let mut saved = Vec::with_capacity(lines.len());
    for line in lines {
        let mut rows = conn
            .query(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, measurement_unit_id, quantity)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id",
                libsql::params![
                    recipe_id,
                    line.ingredient_id,
                    line.measurement_unit_id,
                    line.quantity
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        saved.push(RecipeIngredientLine {
            id: row.get::<i64>(0)?,
            recipe_id,
            ingredient_id: line.ingredient_id,
            measurement_unit_id: line.measurement_unit_id,
            quantity: line.quantity,
        });
    }
    Ok(saved)
}

/// Lines of a recipe, in insertion order.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn find_by_recipe_id(
    conn: &libsql::Connection,
    recipe_id: i64,
) -> Result<Vec<RecipeIngredientLine>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!(
                "SELECT {SELECT_COLS} FROM recipe_ingredients WHERE recipe_id = ?1 ORDER BY id"
            ),
            [recipe_id],
        )
        .await?;
    let mut lines = Vec::new();
    while let Some(row) = rows.next().await? {
        lines.push(row_to_line(&row)?);
    }
    Ok(lines)
}
