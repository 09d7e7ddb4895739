//! Row parsing and parameter helpers shared by the stores.
//!
//! Timestamps are written with `to_rfc3339()` but column defaults use
//! `SQLite`'s `datetime('now')`, so reads accept both formats.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read an INTEGER column that must fit in `i32`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` when the stored value is out of range.
pub fn get_i32(row: &libsql::Row, idx: i32) -> Result<i32, DatabaseError> {
    let value = row.get::<i64>(idx)?;
    i32::try_from(value)
        .map_err(|_| DatabaseError::Query(format!("Column {idx} out of i32 range: {value}")))
}

/// Numbered placeholders `?start, ?start+1, ...` for `count` values.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Integer IDs as positional parameters, in ascending order.
#[must_use]
pub fn id_params(ids: &BTreeSet<i64>) -> Vec<libsql::Value> {
    ids.iter().map(|&id| libsql::Value::Integer(id)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use recipes_core::enums::RecipeType;

    use super::*;

    #[test]
    fn parses_rfc3339_and_sqlite_formats() {
        let a = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let b = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.year(), 2026);
        assert_eq!(a.hour(), 14);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn parses_stored_recipe_type() {
        let t: RecipeType = parse_enum("NON_VEGETARIAN").unwrap();
        assert_eq!(t, RecipeType::NonVegetarian);
        assert!(parse_enum::<RecipeType>("vegan").is_err());
    }

    #[test]
    fn placeholder_numbering() {
        assert_eq!(placeholders(1, 3), "?1, ?2, ?3");
        assert_eq!(placeholders(4, 1), "?4");
        assert_eq!(placeholders(1, 0), "");
    }
}
