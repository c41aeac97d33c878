//! DTOs for the link endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::link::validate_original_url;
use crate::domain::entities::{Link, SHORT_NAME_MAX_LEN, SHORT_NAME_MIN_LEN};

/// Request body for `POST /api/links`.
///
/// ```json
/// { "original_url": "https://example.com", "short_name": "exmpl" }
/// ```
///
/// `short_name` may be omitted or empty, in which case one is generated.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required, custom(function = "required_url"))]
    pub original_url: Option<String>,

    #[validate(custom(function = "optional_short_name"))]
    pub short_name: Option<String>,
}

/// Request body for `PUT /api/links/{id}`.
///
/// Both fields are optional; an absent or empty field keeps the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(custom(function = "optional_url"))]
    pub original_url: Option<String>,

    #[validate(custom(function = "optional_short_name"))]
    pub short_name: Option<String>,
}

/// JSON representation of a link, with its synthesized short URL.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
}

impl LinkResponse {
    pub fn new(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_name: link.short_name,
            short_url,
        }
    }
}

fn required_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    optional_url(value)
}

fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || validate_original_url(value).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

fn optional_short_name(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();

    if len == 0 {
        return Ok(());
    }
    if len < SHORT_NAME_MIN_LEN {
        let mut err = ValidationError::new("min");
        err.add_param("min".into(), &SHORT_NAME_MIN_LEN);
        return Err(err);
    }
    if len > SHORT_NAME_MAX_LEN {
        let mut err = ValidationError::new("max");
        err.add_param("max".into(), &SHORT_NAME_MAX_LEN);
        return Err(err);
    }

    Ok(())
}
