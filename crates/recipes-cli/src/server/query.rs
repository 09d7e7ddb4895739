//! Listing parameters decoded from a URL query string.

use std::str::FromStr;

use recipes_core::filter::RecipeQuery;

use crate::boundary::MalformedInput;
use crate::commands::shared::parse::split_names;

/// Raw listing parameters; sort strings are parsed by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub query: RecipeQuery,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
}

impl ListParams {
    /// Decode `page`, `size`, `sort`, `isVegetarian`, `includedIngredients`,
    /// `excludedIngredients`, `instructionKeyword`, and `servings`. Unknown
    /// parameters are ignored; empty scalar values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` for bad percent-encoding or a value of the
    /// wrong type.
    pub fn parse(raw: &str) -> Result<Self, MalformedInput> {
        let mut params = Self::default();
        let mut included = Vec::new();
        let mut excluded = Vec::new();

        for (key, value) in pairs(raw)? {
            match key.as_str() {
                "page" => params.page = scalar(&key, &value)?,
                "size" => params.size = scalar(&key, &value)?,
                "sort" => params.sort.push(value),
                "isVegetarian" => {
                    params.query.is_vegetarian = scalar(&key, &value.to_ascii_lowercase())?;
                }
                "includedIngredients" => included.push(value),
                "excludedIngredients" => excluded.push(value),
                "instructionKeyword" => params.query.instruction_keyword = Some(value),
                "servings" => params.query.servings = scalar(&key, &value)?,
                other => tracing::debug!(param = other, "ignoring unknown query parameter"),
            }
        }

        params.query.included_ingredients = split_names(&included);
        params.query.excluded_ingredients = split_names(&excluded);
        Ok(params)
    }
}

/// Split and percent-decode `k=v&k=v`. `+` decodes to a space.
fn pairs(raw: &str) -> Result<Vec<(String, String)>, MalformedInput> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| -> Result<(String, String), MalformedInput> {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode(key)?, decode(value)?))
        })
        .collect()
}

fn decode(raw: &str) -> Result<String, MalformedInput> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| MalformedInput(format!("Invalid query string encoding: {e}")))
}

fn scalar<T: FromStr>(key: &str, value: &str) -> Result<Option<T>, MalformedInput> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| MalformedInput(format!("Invalid value '{value}' for parameter '{key}'")))
}
