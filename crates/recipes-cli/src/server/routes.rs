//! Route table for the recipe resource.

use recipes_core::errors::ErrorInfo;
use thiserror::Error;
use tiny_http::Method;

use crate::boundary::FAILED_VALIDATION;

const COLLECTION: &str = "/recipe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ListRecipes,
    CreateRecipe,
    GetRecipe(i64),
    UpdateRecipe(i64),
    DeleteRecipe(i64),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route for {0}")]
    NotFound(String),

    #[error("Method {method} is not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("Invalid recipe id '{0}'")]
    InvalidId(String),
}

impl RouteError {
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::InvalidId(_) => 400,
        }
    }

    #[must_use]
    pub fn to_error_info(&self) -> ErrorInfo {
        let code = match self {
            Self::NotFound(_) => "Not Found",
            Self::MethodNotAllowed { .. } => "Method Not Allowed",
            Self::InvalidId(_) => FAILED_VALIDATION,
        };
        ErrorInfo::new(code, self.to_string())
    }
}

impl Route {
    /// Match a request line against the recipe routes. `path` carries no
    /// query string.
    ///
    /// # Errors
    ///
    /// Returns `RouteError` for unknown paths, methods a path does not
    /// support, and non-numeric recipe ids.
    pub fn resolve(method: &Method, path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_end_matches('/');
        if trimmed == COLLECTION {
            return match method {
                Method::Get => Ok(Self::ListRecipes),
                Method::Post => Ok(Self::CreateRecipe),
                _ => Err(not_allowed(method, path)),
            };
        }

        let Some(segment) = trimmed
            .strip_prefix(COLLECTION)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        else {
            return Err(RouteError::NotFound(path.to_string()));
        };

        // Method is checked before the id so that e.g. POST /recipe/x is 405.
        let build: fn(i64) -> Self = match method {
            Method::Get => Self::GetRecipe,
            Method::Put => Self::UpdateRecipe,
            Method::Delete => Self::DeleteRecipe,
            _ => return Err(not_allowed(method, path)),
        };
        segment
            .parse::<i64>()
            .map(build)
            .map_err(|_| RouteError::InvalidId(segment.to_string()))
    }
}

fn not_allowed(method: &Method, path: &str) -> RouteError {
    RouteError::MethodNotAllowed {
        method: method.to_string(),
        path: path.to_string(),
    }
}
