//! Recipe orchestration: validation, catalog lookup, classification, and
//! transactional persistence.
//!
//! Every mutation follows this protocol:
//! 1. Validate the submission (no I/O)
//! 2. Resolve ingredient and measurement unit IDs against the catalog
//! 3. Classify the dietary type from the resolved ingredients
//! 4. Begin transaction
//! 5. Write the header, then replace the full ingredient-line set
//! 6. Commit, or roll back on any error
//!
//! All checks finish before the transaction opens, so a rejected submission
//! never writes anything.

use chrono::Utc;
use tracing::{debug, info, warn};

use recipes_config::RecipesConfig;
use recipes_core::catalog::ensure_resolved;
use recipes_core::classify::classify;
use recipes_core::entities::{
    Ingredient, MeasurementUnit, Recipe, RecipeHeader, RecipeIngredientLine, RecipeSubmission,
};
use recipes_core::errors::RecipeError;
use recipes_core::filter::{RecipeFilter, RecipeQuery};
use recipes_core::pagination::PageRequest;
use recipes_core::responses::{
    PaginatedRecipeResponse, RecipeView, assemble_page, assemble_recipe,
    assemble_recipe_with_names,
};
use recipes_core::validation::validate_submission;

use crate::RecipeDb;
use crate::error::DatabaseError;
use crate::repos::{catalog, ingredient_line, recipe};

/// Orchestrates recipe operations over a local libSQL database.
pub struct RecipeService {
    db: RecipeDb,
}

impl RecipeService {
    /// Open the database at `db_path` (or `":memory:"`) and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = RecipeDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Open the database named by `config.database.path`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new_local`].
    pub async fn from_config(config: &RecipesConfig) -> Result<Self, DatabaseError> {
        Self::new_local(&config.database.path).await
    }

    #[must_use]
    pub const fn from_db(db: RecipeDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &RecipeDb {
        &self.db
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Validate, resolve, classify, and persist a new recipe.
    ///
    /// The returned view carries no ingredient names.
    ///
    /// # Errors
    ///
    /// Returns the first validation or lookup failure, or
    /// `RecipeError::Internal` on storage failure.
    pub async fn create_recipe(
        &self,
        submission: &RecipeSubmission,
    ) -> Result<RecipeView, RecipeError> {
        validate_submission(submission)?;
        let header = self.resolve_header(submission).await?;

        let now = Utc::now();
        let tx = self.db.conn().transaction().await.map_err(DatabaseError::from)?;
        let written = async {
            let created = recipe::insert(&tx, &header, now).await?;
            let lines = replace_lines(&tx, created.id, submission).await?;
            Ok::<_, DatabaseError>((created, lines))
        }
        .await;
        let (created, lines) = finish(tx, written).await?;

        info!(id = created.id, recipe_type = %created.recipe_type, "recipe created");
        Ok(assemble_recipe(created, &lines))
    }

    /// Replace the header and full ingredient-line set of recipe `id`.
    ///
    /// The creation timestamp is kept from storage and returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if `id` does not exist, the first
    /// validation or lookup failure, or `RecipeError::Internal` on storage
    /// failure.
    pub async fn update_recipe(
        &self,
        id: i64,
        submission: &RecipeSubmission,
    ) -> Result<RecipeView, RecipeError> {
        validate_submission(submission)?;
        let existing = self.require_recipe(id).await?;
        let header = self.resolve_header(submission).await?;

        let now = Utc::now();
        let tx = self.db.conn().transaction().await.map_err(DatabaseError::from)?;
        let written = async {
            let updated = recipe::update_header(&tx, id, &header, now).await?;
            if updated == 0 {
                return Ok(None);
            }
            let lines = replace_lines(&tx, id, submission).await?;
            Ok::<_, DatabaseError>(Some(lines))
        }
        .await;
        let Some(lines) = finish(tx, written).await? else {
            // Deleted between the existence check and the write.
            return Err(RecipeError::RecipeNotFound { id });
        };

        info!(id, recipe_type = %header.recipe_type, lines = lines.len(), "recipe updated");
        let updated = Recipe {
            id,
            name: header.name,
            instructions: header.instructions,
            servings_number: header.servings_number,
            recipe_type: header.recipe_type,
            created_at: existing.created_at,
            updated_at: now,
        };
        Ok(assemble_recipe(updated, &lines))
    }

    /// Delete recipe `id` together with its ingredient lines.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if `id` does not exist, including
    /// when it was already deleted.
    pub async fn delete_recipe(&self, id: i64) -> Result<(), RecipeError> {
        let tx = self.db.conn().transaction().await.map_err(DatabaseError::from)?;
        let written = async {
            if recipe::find_by_id(&tx, id).await?.is_none() {
                return Ok(false);
            }
            let lines = ingredient_line::delete_by_recipe_id(&tx, id).await?;
            recipe::delete_by_id(&tx, id).await?;
            debug!(id, lines, "ingredient lines removed");
            Ok::<_, DatabaseError>(true)
        }
        .await;
        if !finish(tx, written).await? {
            return Err(RecipeError::RecipeNotFound { id });
        }

        info!(id, "recipe deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Fetch recipe `id` with its ingredient lines and their names.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::RecipeNotFound` if `id` does not exist.
    pub async fn get_recipe(&self, id: i64) -> Result<RecipeView, RecipeError> {
        let found = self.require_recipe(id).await?;
        let lines = ingredient_line::find_by_recipe_id(self.db.conn(), id).await?;

        let ids = lines.iter().map(|l| l.ingredient_id).collect();
        let rows = catalog::find_ingredients_by_ids(self.db.conn(), &ids).await?;
        let ingredients = ensure_resolved(&ids, rows)?;

        Ok(assemble_recipe_with_names(found, &lines, &ingredients))
    }

    /// One page of recipes matching `query`. Listed recipes carry no lines.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` if an ingredient name list exceeds
    /// its cap, or `RecipeError::Internal` on storage failure.
    pub async fn list_recipes(
        &self,
        query: &RecipeQuery,
        page: &PageRequest,
    ) -> Result<PaginatedRecipeResponse, RecipeError> {
        let filter = RecipeFilter::build(query)?;
        debug!(?filter, page = page.page, size = page.size, "listing recipes");
        let found = recipe::find_filtered(self.db.conn(), &filter, page).await?;
        Ok(assemble_page(found))
    }

    /// # Errors
    ///
    /// Returns `RecipeError::Internal` on storage failure.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, RecipeError> {
        Ok(catalog::list_ingredients(self.db.conn()).await?)
    }

    /// # Errors
    ///
    /// Returns `RecipeError::Internal` on storage failure.
    pub async fn list_measurement_units(&self) -> Result<Vec<MeasurementUnit>, RecipeError> {
        Ok(catalog::list_measurement_units(self.db.conn()).await?)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    async fn require_recipe(&self, id: i64) -> Result<Recipe, RecipeError> {
        recipe::find_by_id(self.db.conn(), id)
            .await?
            .ok_or(RecipeError::RecipeNotFound { id })
    }

    /// Resolve the submission's catalog references and derive its header.
    async fn resolve_header(
        &self,
        submission: &RecipeSubmission,
    ) -> Result<RecipeHeader, RecipeError> {
        let ingredient_ids = submission.ingredient_ids();
        let rows = catalog::find_ingredients_by_ids(self.db.conn(), &ingredient_ids).await?;
        let ingredients = ensure_resolved(&ingredient_ids, rows)?;

        let unit_ids = submission.measurement_unit_ids();
        let rows = catalog::find_measurement_units_by_ids(self.db.conn(), &unit_ids).await?;
        ensure_resolved(&unit_ids, rows)?;

        let recipe_type = classify(&ingredients);
        debug!(
            ingredients = ingredient_ids.len(),
            units = unit_ids.len(),
            %recipe_type,
            "catalog references resolved"
        );

        Ok(RecipeHeader {
            name: submission.name.clone(),
            instructions: submission.instructions.clone(),
            servings_number: submission.servings_number,
            recipe_type,
        })
    }
}

/// Delete-then-insert the full line set; there is no diffing.
async fn replace_lines(
    conn: &libsql::Connection,
    recipe_id: i64,
    submission: &RecipeSubmission,
) -> Result<Vec<RecipeIngredientLine>, DatabaseError> {
    ingredient_line::delete_by_recipe_id(conn, recipe_id).await?;
    ingredient_line::save_all(conn, recipe_id, &submission.ingredients).await
}

/// Commit on success, roll back on failure.
async fn finish<T>(
    tx: libsql::Transaction,
    written: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match written {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback) = tx.rollback().await {
                warn!(error = %rollback, "rollback failed");
            }
            Err(err)
        }
    }
}
