//! Business error kinds for the recipe service.
//!
//! Errors are raised where they are detected and propagate unchanged to the
//! outer surface, which alone decides how a kind maps to a transport status.
//! Storage-level errors (`DatabaseError`) are defined in `recipes-db` and
//! collapse into [`RecipeError::Internal`] there.

use std::collections::{BTreeSet, HashMap};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RECIPE_INVALID_INPUT: &str = "Invalid recipe input fields";
pub const RECIPE_WITHOUT_INGREDIENTS: &str = "Recipe should have at least one ingredient";
pub const RECIPE_INGREDIENT_INVALID_INPUT: &str = "Quantity and measurement unit is required";

/// Coarse classification used by the outer surface's status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    IngredientNotFound,
    MeasurementUnitNotFound,
    RecipeNotFound,
    Internal,
}

/// Errors produced by recipe operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecipeError {
    /// Structural or business validation failed.
    #[error("{message}")]
    InvalidInput { message: String },

    /// At least one requested ingredient ID is not in the catalog.
    #[error("Not found some of these {} ingredients", format_ids(.requested))]
    IngredientNotFound { requested: BTreeSet<i64> },

    /// At least one requested measurement unit ID is not in the catalog.
    #[error("Not found some of these {} measurements", format_ids(.requested))]
    MeasurementUnitNotFound { requested: BTreeSet<i64> },

    /// No recipe exists with this ID.
    #[error("Recipe {id} - not found")]
    RecipeNotFound { id: i64 },

    /// Unexpected storage or runtime failure.
    #[error("{0}")]
    Internal(String),
}

impl RecipeError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::IngredientNotFound { .. } => ErrorKind::IngredientNotFound,
            Self::MeasurementUnitNotFound { .. } => ErrorKind::MeasurementUnitNotFound,
            Self::RecipeNotFound { .. } => ErrorKind::RecipeNotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Stable short code reported to callers.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RecipeNotFound { .. } => "001",
            Self::IngredientNotFound { .. } => "002",
            Self::MeasurementUnitNotFound { .. } => "003",
            Self::InvalidInput { .. } => "004",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Human-readable message, as carried in `additionalData.message`.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Outward error payload for this error.
    #[must_use]
    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo::new(self.code(), self.message())
    }
}

/// Render an ID set the way error messages report it: `[1, 2, 3]`.
fn format_ids(ids: &BTreeSet<i64>) -> String {
    let joined = ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Error payload returned to callers: a code plus free-form additional data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub code: String,
    pub additional_data: HashMap<String, serde_json::Value>,
}

impl ErrorInfo {
    /// Build an error payload carrying a single `message` entry.
    pub fn new(code: impl Into<String>, message: impl Into<serde_json::Value>) -> Self {
        let mut additional_data = HashMap::new();
        additional_data.insert("message".to_string(), message.into());
        Self {
            code: code.into(),
            additional_data,
        }
    }

    /// The `message` entry, when it is a string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.additional_data
            .get("message")
            .and_then(serde_json::Value::as_str)
    }
}
