//! Core domain entities.
//!
//! - [`Link`] - A shortened URL and its validation rules
//! - [`LinkVisit`] - An audit record of one redirect

pub mod link;
pub mod visit;

pub use link::{Link, SHORT_NAME_MAX_LEN, SHORT_NAME_MIN_LEN};
pub use visit::LinkVisit;
