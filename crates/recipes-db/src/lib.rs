//! # recipes-db
//!
//! libSQL storage for recipes and the read-only ingredient and measurement
//! unit catalog, plus the [`service::RecipeService`] orchestrator that ties
//! validation, catalog lookup, classification, and persistence together.
//!
//! Uses an embedded local libSQL database. Every store function takes a
//! `&libsql::Connection`, so the same code runs inside or outside a
//! transaction.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle wrapping a libSQL database and its connection.
pub struct RecipeDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RecipeDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be enabled per connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let recipe_db = Self { db, conn };
        recipe_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(recipe_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
