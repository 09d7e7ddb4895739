//! Dietary type, sort properties, and sort direction.
//!
//! `RecipeType` serializes as `SCREAMING_SNAKE_CASE`, which is also the value
//! stored in the `recipes.recipe_type` column. Sort enums use the camelCase
//! property names of the outward recipe representation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// RecipeType
// ---------------------------------------------------------------------------

/// Dietary classification of a recipe, derived from its ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipeType {
    Vegetarian,
    NonVegetarian,
}

impl RecipeType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "VEGETARIAN",
            Self::NonVegetarian => "NON_VEGETARIAN",
        }
    }

    /// Map the optional `isVegetarian` list flag to a type filter.
    #[must_use]
    pub const fn from_vegetarian_flag(is_vegetarian: bool) -> Self {
        if is_vegetarian {
            Self::Vegetarian
        } else {
            Self::NonVegetarian
        }
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortProperty
// ---------------------------------------------------------------------------

/// Recipe properties a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortProperty {
    Id,
    Name,
    Instructions,
    ServingsNumber,
    RecipeType,
    CreationDate,
    UpdatedDate,
}

impl SortProperty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Instructions => "instructions",
            Self::ServingsNumber => "servingsNumber",
            Self::RecipeType => "recipeType",
            Self::CreationDate => "creationDate",
            Self::UpdatedDate => "updatedDate",
        }
    }

    /// Column in the `recipes` table backing this property.
    ///
    /// Exhaustive match: the listing query only ever orders by these names.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Instructions => "instructions",
            Self::ServingsNumber => "servings_number",
            Self::RecipeType => "recipe_type",
            Self::CreationDate => "created_at",
            Self::UpdatedDate => "updated_at",
        }
    }
}

impl fmt::Display for SortProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "instructions" => Ok(Self::Instructions),
            "servingsNumber" => Ok(Self::ServingsNumber),
            "recipeType" => Ok(Self::RecipeType),
            "creationDate" => Ok(Self::CreationDate),
            "updatedDate" => Ok(Self::UpdatedDate),
            other => Err(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let json = serde_json::to_string(&$variant).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected));
                let back: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(back, $variant);
            }
        };
    }

    test_serde_roundtrip!(
        recipe_type_vegetarian,
        RecipeType,
        RecipeType::Vegetarian,
        "VEGETARIAN"
    );
    test_serde_roundtrip!(
        recipe_type_non_vegetarian,
        RecipeType,
        RecipeType::NonVegetarian,
        "NON_VEGETARIAN"
    );
    test_serde_roundtrip!(
        sort_servings,
        SortProperty,
        SortProperty::ServingsNumber,
        "servingsNumber"
    );
    test_serde_roundtrip!(sort_desc, SortDirection, SortDirection::Desc, "desc");

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", RecipeType::NonVegetarian), "NON_VEGETARIAN");
        assert_eq!(format!("{}", SortProperty::CreationDate), "creationDate");
    }

    #[test]
    fn vegetarian_flag_maps_to_type() {
        assert_eq!(RecipeType::from_vegetarian_flag(true), RecipeType::Vegetarian);
        assert_eq!(
            RecipeType::from_vegetarian_flag(false),
            RecipeType::NonVegetarian
        );
    }

    #[test]
    fn sort_property_parse_roundtrips_as_str() {
        for prop in [
            SortProperty::Id,
            SortProperty::Name,
            SortProperty::Instructions,
            SortProperty::ServingsNumber,
            SortProperty::RecipeType,
            SortProperty::CreationDate,
            SortProperty::UpdatedDate,
        ] {
            assert_eq!(prop.as_str().parse::<SortProperty>(), Ok(prop));
        }
    }

    #[test]
    fn sort_property_rejects_column_names() {
        assert_eq!(
            "servings_number".parse::<SortProperty>(),
            Err("servings_number".to_string())
        );
    }

    #[test]
    fn sort_direction_is_case_insensitive() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(" asc ".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("up".parse::<SortDirection>().is_err());
    }
}
