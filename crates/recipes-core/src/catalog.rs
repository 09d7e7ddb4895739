//! Catalog lookup resolution.
//!
//! The store's find-by-ID-set queries return only matching rows and never
//! fail on a partial match. The check here compares the resolved count with
//! the requested count and reports the whole requested set on mismatch.

use std::collections::BTreeSet;

use crate::entities::{Ingredient, MeasurementUnit};
use crate::errors::RecipeError;

/// A catalog row addressable by integer ID.
pub trait CatalogEntry {
    fn catalog_id(&self) -> i64;

    /// Error raised when some requested IDs of this kind do not resolve.
    fn not_found(requested: BTreeSet<i64>) -> RecipeError;
}

impl CatalogEntry for Ingredient {
    fn catalog_id(&self) -> i64 {
        self.id
    }

    fn not_found(requested: BTreeSet<i64>) -> RecipeError {
        RecipeError::IngredientNotFound { requested }
    }
}

impl CatalogEntry for MeasurementUnit {
    fn catalog_id(&self) -> i64 {
        self.id
    }

    fn not_found(requested: BTreeSet<i64>) -> RecipeError {
        RecipeError::MeasurementUnitNotFound { requested }
    }
}

/// Check that every requested ID resolved to a catalog row.
///
/// Passes the resolved rows through on success.
///
/// # Errors
///
/// Returns the entry type's not-found error, carrying the full requested
/// set, when the resolved count differs from the requested count or when a
/// non-empty request resolved nothing.
pub fn ensure_resolved<T: CatalogEntry>(
    requested: &BTreeSet<i64>,
    resolved: Vec<T>,
) -> Result<Vec<T>, RecipeError> {
    let distinct: BTreeSet<i64> = resolved.iter().map(CatalogEntry::catalog_id).collect();
    let unresolved = (!requested.is_empty() && resolved.is_empty())
        || distinct.len() != requested.len()
        || !distinct.is_subset(requested);
    if unresolved {
        return Err(T::not_found(requested.clone()));
    }
    Ok(resolved)
}
