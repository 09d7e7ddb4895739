use anyhow::Context;
use recipes_core::entities::RecipeSubmission;

use crate::boundary::MalformedInput;
use crate::cli::subcommands::SubmissionSource;
use crate::schemas::SchemaRegistry;

/// Decode a JSON recipe submission, checking it against its schema first.
///
/// Anything that is not a well-formed submission is reported as
/// [`MalformedInput`]; business checks happen later, in the service.
pub fn parse_submission(
    raw: &str,
    schemas: &SchemaRegistry,
) -> Result<RecipeSubmission, MalformedInput> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| MalformedInput(format!("malformed recipe JSON: {e}")))?;
    schemas
        .validate("recipe_submission", &value)
        .map_err(|e| MalformedInput(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| MalformedInput(format!("malformed recipe JSON: {e}")))
}

/// Read the submission named on the command line.
pub fn read_submission(
    source: &SubmissionSource,
    schemas: &SchemaRegistry,
) -> anyhow::Result<RecipeSubmission> {
    let raw = match (&source.json, &source.file) {
        (Some(json), _) => json.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read submission file {}", path.display()))?,
        (None, None) => anyhow::bail!("either --json or --file is required"),
    };
    Ok(parse_submission(&raw, schemas)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::{parse_submission, read_submission};
    use crate::cli::subcommands::SubmissionSource;
    use crate::schemas::SchemaRegistry;

    const SPAGHETTI: &str = r#"{
        "name": "Spaghetti",
        "instructions": "Boil the pasta",
        "servingsNumber": 4,
        "ingredients": [{"ingredientId": 1, "measurementUnitId": 1, "quantity": 250}]
    }"#;

    fn schemas() -> SchemaRegistry {
        SchemaRegistry::new().expect("schemas should build")
    }

    #[test]
    fn decodes_camel_case_submission() {
        let submission = parse_submission(SPAGHETTI, &schemas()).expect("should parse");
        assert_eq!(submission.name, "Spaghetti");
        assert_eq!(submission.servings_number, 4);
        assert_eq!(submission.ingredients.len(), 1);
        assert!((submission.ingredients[0].quantity - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn broken_json_is_malformed() {
        let err = parse_submission("{\"name\": ", &schemas()).expect_err("should fail");
        assert!(err.0.starts_with("malformed recipe JSON"));
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let err = parse_submission(r#"{"name": "Soup", "servingsNumber": "four"}"#, &schemas())
            .expect_err("should fail");
        assert!(err.0.starts_with("Validation failed"));
    }

    #[test]
    fn missing_fields_are_left_to_business_validation() {
        let submission = parse_submission(r#"{"name": "Soup"}"#, &schemas()).expect("should parse");
        assert_eq!(submission.servings_number, 0);
        assert!(submission.ingredients.is_empty());
    }

    #[test]
    fn reads_submission_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SPAGHETTI.as_bytes()).expect("write");
        let source = SubmissionSource {
            json: None,
            file: Some(file.path().to_path_buf()),
        };

        let submission = read_submission(&source, &schemas()).expect("should read");
        assert_eq!(submission.instructions, "Boil the pasta");
    }
}
