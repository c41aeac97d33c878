//! Repository trait for links and their visits.

use crate::domain::entities::{Link, LinkVisit};
use crate::domain::pagination::Pagination;
use crate::error::AppError;
use async_trait::async_trait;

/// Data-access capability set for links and visits.
///
/// Implementations carry no business rules. They translate a store miss on
/// the single-row lookups into [`AppError::NotFound`] and a unique-index
/// violation into [`AppError::UniqueViolation`].
///
/// Dropping a returned future aborts the underlying store call, which is how
/// request cancellation and deadlines reach the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a draft link and returns it with `id` and `created_at` assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UniqueViolation`] if the short name is taken.
    async fn create(&self, link: Link) -> Result<Link, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    async fn get_by_id(&self, id: i64) -> Result<Link, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this short name.
    async fn get_by_short_name(&self, short_name: &str) -> Result<Link, AppError>;

    /// Returns one page of links ordered by ascending id, plus the total count.
    async fn get_all(&self, pagination: Pagination) -> Result<(Vec<Link>, i64), AppError>;

    /// Overwrites `original_url` and `short_name` of the link with `link.id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row was affected and
    /// [`AppError::UniqueViolation`] if the new short name is taken.
    async fn update(&self, link: &Link) -> Result<(), AppError>;

    /// Deletes a link. Deleting a missing id succeeds.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn exists_by_short_name(&self, short_name: &str) -> Result<bool, AppError>;

    /// Appends a visit. The referenced link must exist.
    async fn create_visit(&self, visit: LinkVisit) -> Result<(), AppError>;

    /// Returns one page of visits, newest first, plus the total count.
    async fn get_visits(&self, pagination: Pagination)
    -> Result<(Vec<LinkVisit>, i64), AppError>;

    /// Deletes a visit. Deleting a missing id succeeds.
    async fn delete_visit(&self, id: i64) -> Result<(), AppError>;
}
