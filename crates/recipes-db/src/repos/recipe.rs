//! Recipe header store and the filtered listing query.

use chrono::{DateTime, Utc};
use recipes_core::entities::{Recipe, RecipeHeader};
use recipes_core::filter::RecipeFilter;
use recipes_core::pagination::{Page, PageRequest};

use crate::error::DatabaseError;
use crate::helpers::{get_i32, parse_datetime, parse_enum, placeholders};

const SELECT_COLS: &str =
    "r.id, r.name, r.instructions, r.servings_number, r.recipe_type, r.created_at, r.updated_at";

fn row_to_recipe(row: &libsql::Row) -> Result<Recipe, DatabaseError> {
    Ok(Recipe {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        instructions: row.get::<String>(2)?,
        servings_number: get_i32(row, 3)?,
        recipe_type: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Insert a header with both timestamps set to `now`.
///
/// # Errors
///
/// Returns `DatabaseError` if the insert fails.
pub async fn insert(
    conn: &libsql::Connection,
    header: &RecipeHeader,
    now: DateTime<Utc>,
) -> Result<Recipe, DatabaseError> {
    let ts = now.to_rfc3339();
    let mut rows = conn
        .query(
            "INSERT INTO recipes (name, instructions, servings_number, recipe_type, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id",
            libsql::params![
                header.name.as_str(),
                header.instructions.as_str(),
                header.servings_number,
                header.recipe_type.as_str(),
                ts.as_str(),
                ts.as_str()
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(Recipe {
        id: row.get::<i64>(0)?,
        name: header.name.clone(),
        instructions: header.instructions.clone(),
        servings_number: header.servings_number,
        recipe_type: header.recipe_type,
        created_at: now,
        updated_at: now,
    })
}

/// # Errors
///
/// Returns `DatabaseError` if the query fails or the row cannot be decoded.
pub async fn find_by_id(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Recipe>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM recipes r WHERE r.id = ?1"), [id])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row_to_recipe(&row)?)),
        None => Ok(None),
    }
}

/// Overwrite the mutable header columns and `updated_at`.
///
/// `created_at` is never written here. Returns the number of rows updated.
///
/// # Errors
///
/// Returns `DatabaseError` if the update fails.
pub async fn update_header(
    conn: &libsql::Connection,
    id: i64,
    header: &RecipeHeader,
    now: DateTime<Utc>,
) -> Result<u64, DatabaseError> {
    Ok(conn
        .execute(
            "UPDATE recipes
             SET name = ?1, instructions = ?2, servings_number = ?3, recipe_type = ?4, updated_at = ?5
             WHERE id = ?6",
            libsql::params![
                header.name.as_str(),
                header.instructions.as_str(),
                header.servings_number,
                header.recipe_type.as_str(),
                now.to_rfc3339(),
                id
            ],
        )
        .await?)
}

/// Returns the number of rows deleted.
///
/// # Errors
///
/// Returns `DatabaseError` if the delete fails, including when ingredient
/// lines still reference the recipe.
pub async fn delete_by_id(conn: &libsql::Connection, id: i64) -> Result<u64, DatabaseError> {
    Ok(conn.execute("DELETE FROM recipes WHERE id = ?1", [id]).await?)
}

/// One page of recipe headers matching `filter`, plus the total match count.
///
/// # Errors
///
/// Returns `DatabaseError` if either query fails.
pub async fn find_filtered(
    conn: &libsql::Connection,
    filter: &RecipeFilter,
    page: &PageRequest,
) -> Result<Page<Recipe>, DatabaseError> {
    let mut params: Vec<libsql::Value> = Vec::new();
    let where_clause = build_where(filter, &mut params);

    let count_sql = format!("SELECT COUNT(*) FROM recipes r{where_clause}");
    let mut rows = conn
        .query(&count_sql, libsql::params_from_iter(params.clone()))
        .await?;
    let total = rows
        .next()
        .await?
        .ok_or(DatabaseError::NoResult)?
        .get::<i64>(0)?;

    let limit_idx = params.len() + 1;
    params.push(libsql::Value::Integer(i64::from(page.size)));
    params.push(libsql::Value::Integer(
        i64::try_from(page.offset()).unwrap_or(i64::MAX),
    ));
    let sql = format!(
        "SELECT {SELECT_COLS} FROM recipes r{where_clause} ORDER BY {} LIMIT ?{limit_idx} OFFSET ?{}",
        order_by(page),
        limit_idx + 1
    );
    tracing::debug!(%sql, "recipe listing query");

    let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
    let mut content = Vec::new();
    while let Some(row) = rows.next().await? {
        content.push(row_to_recipe(&row)?);
    }

    Ok(Page::new(
        content,
        page,
        u64::try_from(total).unwrap_or_default(),
    ))
}

/// `" WHERE ..."` for the set fields of `filter`, or an empty string.
///
/// Include and exclude use sub-selects, so each recipe appears at most once
/// however many of its ingredients match.
fn build_where(filter: &RecipeFilter, params: &mut Vec<libsql::Value>) -> String {
    let mut conditions: Vec<String> = Vec::new();

    if let Some(recipe_type) = filter.recipe_type {
        params.push(recipe_type.as_str().into());
        conditions.push(format!("r.recipe_type = ?{}", params.len()));
    }
    if filter.has_include() {
        let list = placeholders(params.len() + 1, filter.included_ingredients.len());
        params.extend(filter.included_ingredients.iter().map(|n| n.as_str().into()));
        conditions.push(format!("EXISTS ({})", ingredient_match(&list)));
    }
    if filter.has_exclude() {
        let list = placeholders(params.len() + 1, filter.excluded_ingredients.len());
        params.extend(filter.excluded_ingredients.iter().map(|n| n.as_str().into()));
        conditions.push(format!("NOT EXISTS ({})", ingredient_match(&list)));
    }
    if let Some(ref keyword) = filter.instruction_keyword {
        params.push(keyword.as_str().into());
        // instr() is case-sensitive, unlike LIKE.
        conditions.push(format!("instr(r.instructions, ?{}) > 0", params.len()));
    }
    if let Some(servings) = filter.servings {
        params.push(i64::from(servings).into());
        conditions.push(format!("r.servings_number = ?{}", params.len()));
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}

fn ingredient_match(placeholder_list: &str) -> String {
    format!(
        "SELECT 1 FROM recipe_ingredients ri \
         JOIN ingredients i ON i.id = ri.ingredient_id \
         WHERE ri.recipe_id = r.id AND UPPER(i.name) IN ({placeholder_list})"
    )
}

/// ORDER BY terms from the whitelisted property-to-column mapping.
fn order_by(page: &PageRequest) -> String {
    page.sort
        .iter()
        .map(|o| format!("r.{} {}", o.property.column(), o.direction.as_sql()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use recipes_core::enums::RecipeType;
    use recipes_core::pagination::default_sort;

    use super::*;

    #[test]
    fn empty_filter_has_no_where() {
        let mut params = Vec::new();
        assert_eq!(build_where(&RecipeFilter::default(), &mut params), "");
        assert!(params.is_empty());
    }

    #[test]
    fn placeholders_are_numbered_in_order() {
        let filter = RecipeFilter {
            recipe_type: Some(RecipeType::Vegetarian),
            included_ingredients: vec!["PASTA".into(), "SALT".into()],
            excluded_ingredients: vec!["BEEF".into()],
            instruction_keyword: Some("Boil".into()),
            servings: Some(2),
        };
        let mut params = Vec::new();
        let sql = build_where(&filter, &mut params);

        assert_eq!(params.len(), 6);
        assert!(sql.starts_with(" WHERE r.recipe_type = ?1 AND EXISTS ("));
        assert!(sql.contains("UPPER(i.name) IN (?2, ?3)"));
        assert!(sql.contains("NOT EXISTS ("));
        assert!(sql.contains("UPPER(i.name) IN (?4)"));
        assert!(sql.contains("instr(r.instructions, ?5) > 0"));
        assert!(sql.ends_with("r.servings_number = ?6"));
    }

    #[test]
    fn default_sort_orders_by_name_desc_then_id() {
        let page = PageRequest {
            page: 0,
            size: 20,
            sort: default_sort(),
        };
        assert_eq!(order_by(&page), "r.name DESC, r.id ASC");
    }
}
