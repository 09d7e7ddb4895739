//! Error kind to transport status mapping.
//!
//! The only place that decides how a failure is reported outward. The HTTP
//! surface uses the status code; the CLI uses the exit code.

use recipes_core::errors::{ErrorInfo, ErrorKind, RecipeError};
use thiserror::Error;

/// Code reported for payloads that could not be decoded at all.
pub const FAILED_VALIDATION: &str = "Failed Validation";

/// Code reported for failures with no business meaning.
pub const INTERNAL_ERROR: &str = "Internal Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub http: u16,
    pub exit_code: i32,
}

#[must_use]
pub const fn status_for(kind: ErrorKind) -> Status {
    match kind {
        ErrorKind::InvalidInput => Status {
            http: 400,
            exit_code: 2,
        },
        ErrorKind::IngredientNotFound
        | ErrorKind::MeasurementUnitNotFound
        | ErrorKind::RecipeNotFound => Status {
            http: 404,
            exit_code: 3,
        },
        ErrorKind::Internal => Status {
            http: 500,
            exit_code: 1,
        },
    }
}

/// A request body or parameter that is not even well-formed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MalformedInput(pub String);

/// How a failure is presented to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub status: Status,
    pub info: ErrorInfo,
}

impl Rejection {
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status.http < 500
    }
}

/// Classify an error raised by a command or request handler.
///
/// Returns `None` when the error carries neither a business error nor a
/// malformed-input marker; see [`internal`] for those.
#[must_use]
pub fn rejection(error: &anyhow::Error) -> Option<Rejection> {
    if let Some(err) = error.downcast_ref::<RecipeError>() {
        return Some(Rejection {
            status: status_for(err.kind()),
            info: err.to_error_info(),
        });
    }
    error.downcast_ref::<MalformedInput>().map(|err| Rejection {
        status: status_for(ErrorKind::InvalidInput),
        info: ErrorInfo::new(FAILED_VALIDATION, err.0.clone()),
    })
}

/// Rejection for an unclassified failure. Only its message is surfaced.
#[must_use]
pub fn internal(error: &anyhow::Error) -> Rejection {
    Rejection {
        status: status_for(ErrorKind::Internal),
        info: ErrorInfo::new(INTERNAL_ERROR, error.to_string()),
    }
}
