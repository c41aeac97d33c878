//! Domain layer containing business entities and rules.
//!
//! - [`entities`] - [`entities::Link`] and [`entities::LinkVisit`] with their validation
//! - [`pagination`] - The `[offset,limit]` window and `Content-Range` rendering
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation code.
//!
//! # Link Lifecycle
//!
//! A [`entities::Link`] starts as a draft (`id == 0`), becomes persisted when
//! the store assigns an id, may be updated any number of times and ends once
//! deleted. Ids are never reused.

pub mod entities;
pub mod pagination;
pub mod repositories;
