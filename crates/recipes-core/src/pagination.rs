//! Page requests, sort orders, and fetched pages.
//!
//! Offset pagination: a 0-based page index, a page size, and an ordered list
//! of sort keys. When no sort is requested, listings order by
//! `name DESC, id ASC`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SortDirection, SortProperty};
use crate::errors::RecipeError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound applied to requested page sizes.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// One sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortOrder {
    pub property: SortProperty,
    pub direction: SortDirection,
}

impl SortOrder {
    #[must_use]
    pub const fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Asc,
        }
    }

    #[must_use]
    pub const fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }

    /// Parse a `property[,property...][,asc|desc]` sort parameter.
    ///
    /// A trailing direction applies to every property in the parameter;
    /// without one, properties sort ascending.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` for an empty parameter or an unknown
    /// property name.
    pub fn parse_param(param: &str) -> Result<Vec<Self>, RecipeError> {
        let mut parts: Vec<&str> = param
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let direction = match parts.last().map(|p| p.parse::<SortDirection>()) {
            Some(Ok(direction)) => {
                parts.pop();
                direction
            }
            _ => SortDirection::Asc,
        };

        if parts.is_empty() {
            return Err(RecipeError::invalid_input(format!(
                "Invalid sort parameter '{param}'"
            )));
        }

        parts
            .into_iter()
            .map(|name| {
                name.parse::<SortProperty>()
                    .map(|property| Self {
                        property,
                        direction,
                    })
                    .map_err(|p| RecipeError::invalid_input(format!("Invalid sort property '{p}'")))
            })
            .collect()
    }
}

/// Sort applied when a listing does not specify one.
#[must_use]
pub fn default_sort() -> Vec<SortOrder> {
    vec![
        SortOrder::desc(SortProperty::Name),
        SortOrder::asc(SortProperty::Id),
    ]
}

/// Caller-supplied page index, size, and sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Vec<SortOrder>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: default_sort(),
        }
    }
}

impl PageRequest {
    /// Build a page request, applying size and sort defaults.
    ///
    /// A missing or zero size becomes `default_size`; sizes above `max_size`
    /// are clamped. An empty sort becomes [`default_sort`].
    #[must_use]
    pub fn new(
        page: Option<u32>,
        size: Option<u32>,
        sort: Vec<SortOrder>,
        default_size: u32,
        max_size: u32,
    ) -> Self {
        let size = match size {
            Some(0) | None => default_size,
            Some(size) => size,
        }
        .min(max_size)
        .max(1);
        let sort = if sort.is_empty() { default_sort() } else { sort };
        Self {
            page: page.unwrap_or(0),
            size,
            sort,
        }
    }

    /// Row offset of the first element on this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One fetched page plus the total count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 1;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Whether no page follows this one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        u64::from(self.page) + 1 >= self.total_pages()
    }

    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
