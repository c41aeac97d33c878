//! Pagination query parameters.

use serde::Deserialize;

/// Query string of the list endpoints: `?range=[<offset>,<limit>]`.
///
/// Parsed into [`crate::domain::pagination::Pagination`] by the
/// [`crate::api::extract::PageRange`] extractor.
#[derive(Debug, Default, Deserialize)]
pub struct RangeParams {
    #[serde(default)]
    pub range: Option<String>,
}
