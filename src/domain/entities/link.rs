//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::AppError;
use crate::utils::code_generator::generate_short_name;

/// Minimum length of a short name.
pub const SHORT_NAME_MIN_LEN: usize = 3;

/// Maximum length of a short name.
pub const SHORT_NAME_MAX_LEN: usize = 32;

/// A shortened URL.
///
/// A link is a draft while `id == 0`; the store assigns the id and
/// `created_at` on insert. The id never changes afterwards and is not reused
/// once the link is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Builds a validated draft link.
    ///
    /// An empty `short_name` is replaced with a generated one.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyUrl`] if `original_url` is empty
    /// - [`AppError::InvalidUrl`] if it is not an absolute URL with a host
    /// - [`AppError::ShortNameTooShort`] / [`AppError::ShortNameTooLong`] if an
    ///   explicit short name is outside 3..=32 characters
    pub fn new(
        original_url: impl Into<String>,
        short_name: impl Into<String>,
    ) -> Result<Self, AppError> {
        let original_url = original_url.into();
        let mut short_name = short_name.into();

        validate_original_url(&original_url)?;

        if short_name.is_empty() {
            short_name = generate_short_name();
        } else {
            validate_short_name(&short_name)?;
        }

        Ok(Self {
            id: 0,
            original_url,
            short_name,
            created_at: Utc::now(),
        })
    }

    /// Returns true once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Checks that `url` is non-empty and parses as an absolute URL with a host.
pub fn validate_original_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::EmptyUrl);
    }

    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(AppError::InvalidUrl),
    }
}

/// Checks the 3..=32 character bound on a short name.
pub fn validate_short_name(short_name: &str) -> Result<(), AppError> {
    let len = short_name.chars().count();

    if len < SHORT_NAME_MIN_LEN {
        return Err(AppError::ShortNameTooShort {
            min: SHORT_NAME_MIN_LEN,
        });
    }
    if len > SHORT_NAME_MAX_LEN {
        return Err(AppError::ShortNameTooLong {
            max: SHORT_NAME_MAX_LEN,
        });
    }

    Ok(())
}
