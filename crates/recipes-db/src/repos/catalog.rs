//! Catalog store: read-only ingredients and measurement units.
//!
//! The find-by-ID-set queries return only matching rows and never fail on a
//! partial match; callers compare counts via
//! [`recipes_core::catalog::ensure_resolved`].

use std::collections::BTreeSet;

use recipes_core::entities::{Ingredient, MeasurementUnit};

use crate::error::DatabaseError;
use crate::helpers::{id_params, placeholders};

const INGREDIENT_COLS: &str = "id, name, ingredient_type_id";
const UNIT_COLS: &str = "id, name";

fn row_to_ingredient(row: &libsql::Row) -> Result<Ingredient, DatabaseError> {
    Ok(Ingredient {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        ingredient_type_id: row.get::<i64>(2)?,
    })
}

fn row_to_unit(row: &libsql::Row) -> Result<MeasurementUnit, DatabaseError> {
    Ok(MeasurementUnit {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
    })
}

/// Ingredients whose IDs are in `ids`, ordered by ID.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn find_ingredients_by_ids(
    conn: &libsql::Connection,
    ids: &BTreeSet<i64>,
) -> Result<Vec<Ingredient>, DatabaseError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "SELECT {INGREDIENT_COLS} FROM ingredients WHERE id IN ({}) ORDER BY id",
        placeholders(1, ids.len())
    );
    let mut rows = conn
        .query(&sql, libsql::params_from_iter(id_params(ids)))
        .await?;
    let mut ingredients = Vec::new();
    while let Some(row) = rows.next().await? {
        ingredients.push(row_to_ingredient(&row)?);
    }
    Ok(ingredients)
}

/// Measurement units whose IDs are in `ids`, ordered by ID.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn find_measurement_units_by_ids(
    conn: &libsql::Connection,
    ids: &BTreeSet<i64>,
) -> Result<Vec<MeasurementUnit>, DatabaseError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let sql = format!(
        "SELECT {UNIT_COLS} FROM measurement_units WHERE id IN ({}) ORDER BY id",
        placeholders(1, ids.len())
    );
    let mut rows = conn
        .query(&sql, libsql::params_from_iter(id_params(ids)))
        .await?;
    let mut units = Vec::new();
    while let Some(row) = rows.next().await? {
        units.push(row_to_unit(&row)?);
    }
    Ok(units)
}

/// Every catalog ingredient, ordered by ID.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn list_ingredients(conn: &libsql::Connection) -> Result<Vec<Ingredient>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {INGREDIENT_COLS} FROM ingredients ORDER BY id"),
            (),
        )
        .await?;
    let mut ingredients = Vec::new();
    while let Some(row) = rows.next().await? {
        ingredients.push(row_to_ingredient(&row)?);
    }
    Ok(ingredients)
}

/// Every catalog measurement unit, ordered by ID.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn list_measurement_units(
    conn: &libsql::Connection,
) -> Result<Vec<MeasurementUnit>, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {UNIT_COLS} FROM measurement_units ORDER BY id"), ())
        .await?;
    let mut units = Vec::new();
    while let Some(row) = rows.next().await? {
        units.push(row_to_unit(&row)?);
    }
    Ok(units)
}
