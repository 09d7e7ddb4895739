//! Database error types for recipes-db.

use recipes_core::errors::RecipeError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Storage failures surface to callers as internal errors, message only.
impl From<DatabaseError> for RecipeError {
    fn from(err: DatabaseError) -> Self {
        tracing::error!(error = %err, "storage failure");
        Self::Internal(err.to_string())
    }
}
