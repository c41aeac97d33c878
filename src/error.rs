//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Domain and gateway code never picks a status
//! code; the [`IntoResponse`] impl below is the only place errors become HTTP.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::utils::field_name::to_snake_case;

/// Reason reported for `short_name` when the code is already taken.
pub const SHORT_NAME_IN_USE: &str = "short name already in use";

/// Body of single-message errors: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of field-level errors: `{"errors": {"field": "reason"}}`.
#[derive(Debug, Serialize)]
pub struct FieldErrorsBody {
    pub errors: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("invalid URL")]
    InvalidUrl,

    #[error("short name must be at least {min} characters")]
    ShortNameTooShort { min: usize },

    #[error("short name must be at most {max} characters")]
    ShortNameTooLong { max: usize },

    #[error("short name already exists")]
    ShortNameExists,

    #[error("invalid range format")]
    InvalidRange,

    #[error("link not found")]
    NotFound,

    /// A unique index rejected the write.
    #[error("unique constraint violation")]
    UniqueViolation { constraint: Option<String> },

    #[error("invalid id")]
    InvalidId,

    #[error("invalid request")]
    MalformedRequest,

    /// Field name (snake_case) to human-readable reason.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("request timed out")]
    Timeout,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Returns true for both the service-level and the store-level duplicate signal.
    pub fn is_duplicate_short_name(&self) -> bool {
        matches!(self, Self::ShortNameExists | Self::UniqueViolation { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::MalformedRequest | Self::InvalidRange => {
                StatusCode::BAD_REQUEST
            }
            Self::EmptyUrl
            | Self::InvalidUrl
            | Self::ShortNameTooShort { .. }
            | Self::ShortNameTooLong { .. }
            | Self::ShortNameExists
            | Self::UniqueViolation { .. }
            | Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let field_errors = match &self {
            Self::Validation(errors) => Some(errors.clone()),
            Self::EmptyUrl => Some(single("original_url", "field is required")),
            Self::InvalidUrl => Some(single("original_url", "must be a valid URL")),
            Self::ShortNameTooShort { min } => {
                Some(single("short_name", format!("minimum length is {min}")))
            }
            Self::ShortNameTooLong { max } => {
                Some(single("short_name", format!("maximum length is {max}")))
            }
            Self::ShortNameExists | Self::UniqueViolation { .. } => {
                Some(single("short_name", SHORT_NAME_IN_USE))
            }
            _ => None,
        };

        if let Some(errors) = field_errors {
            return (status, Json(FieldErrorsBody { errors })).into_response();
        }

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

fn single(field: &str, reason: impl Into<String>) -> BTreeMap<String, String> {
    BTreeMap::from([(field.to_string(), reason.into())])
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return Self::UniqueViolation {
                    constraint: db.constraint().map(str::to_owned),
                };
            }
        }

        match e {
            sqlx::Error::PoolTimedOut => Self::Timeout,
            other => Self::Database(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();

        for (field, kind) in errors.into_errors() {
            let ValidationErrorsKind::Field(field_errors) = kind else {
                continue;
            };
            if let Some(first) = field_errors.first() {
                fields.insert(to_snake_case(&field), reason_for(first));
            }
        }

        Self::Validation(fields)
    }
}

/// Renders a validator error code as the reason string clients see.
fn reason_for(error: &validator::ValidationError) -> String {
    let param = |name: &str| {
        error
            .params
            .get(name)
            .map(|v| v.to_string())
            .unwrap_or_default()
    };

    match &*error.code {
        "required" => "field is required".to_string(),
        "url" => "must be a valid URL".to_string(),
        "min" => format!("minimum length is {}", param("min")),
        "max" => format!("maximum length is {}", param("max")),
        _ => "invalid value".to_string(),
    }
}
