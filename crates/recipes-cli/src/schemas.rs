//! JSON Schemas of the request and response types, built with
//! [`schemars::schema_for!`] and checked with `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("Schema generation error: {0}")]
    Generation(String),
}

pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty))
                .map_err(|e| SchemaError::Generation(format!("{}: {e}", $name)))?,
        );
    };
}

impl SchemaRegistry {
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema cannot be
    /// turned into JSON.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        register!(
            schemas,
            "recipe_submission",
            recipes_core::entities::RecipeSubmission
        );
        register!(schemas, "recipe", recipes_core::responses::RecipeView);
        register!(
            schemas,
            "paginated_recipes",
            recipes_core::responses::PaginatedRecipeResponse
        );
        register!(schemas, "error_info", recipes_core::errors::ErrorInfo);
        register!(schemas, "ingredient", recipes_core::entities::Ingredient);
        register!(
            schemas,
            "measurement_unit",
            recipes_core::entities::MeasurementUnit
        );

        Ok(Self { schemas })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unknown name, or
    /// `SchemaError::ValidationFailed` listing every violation.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().expect("schemas should build")
    }

    #[test]
    fn lists_every_outward_type() {
        assert_eq!(
            registry().list(),
            vec![
                "error_info",
                "ingredient",
                "measurement_unit",
                "paginated_recipes",
                "recipe",
                "recipe_submission",
            ]
        );
    }

    #[test]
    fn submission_schema_uses_camel_case() {
        let reg = registry();
        let schema = reg.get("recipe_submission").expect("registered");
        let props = schema["properties"].as_object().expect("object schema");
        assert!(props.contains_key("servingsNumber"));
        assert!(!props.contains_key("servings_number"));
    }

    #[test]
    fn accepts_well_formed_submission() {
        let body = json!({
            "name": "Spaghetti",
            "instructions": "Boil the pasta",
            "servingsNumber": 4,
            "ingredients": [
                {"ingredientId": 1, "measurementUnitId": 1, "quantity": 250.0}
            ]
        });
        registry()
            .validate("recipe_submission", &body)
            .expect("should validate");
    }

    #[test]
    fn rejects_wrongly_typed_submission() {
        let body = json!({"name": "Soup", "servingsNumber": "four"});
        let err = registry()
            .validate("recipe_submission", &body)
            .expect_err("should fail");
        assert!(matches!(err, SchemaError::ValidationFailed { .. }));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = registry().validate("nope", &json!({})).expect_err("unknown");
        assert!(matches!(err, SchemaError::NotFound(_)));
    }
}
