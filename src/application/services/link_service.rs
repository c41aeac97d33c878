//! Link lifecycle and visit recording service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkVisit};
use crate::domain::pagination::Pagination;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_short_name;

/// Attempts made to store a link under a freshly generated short name.
const MAX_GENERATE_ATTEMPTS: usize = 10;

/// Service orchestrating link rules over a [`LinkRepository`].
///
/// Holds the repository behind an `Arc` so one instance can be shared by all
/// request handlers. `R` may be unsized, which lets the HTTP state carry an
/// `Arc<dyn LinkRepository>`.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short URLs are built from; a trailing
    /// slash is dropped.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            base_url,
        }
    }

    /// Creates a link, generating the short name when `short_name` is empty.
    ///
    /// # Uniqueness
    ///
    /// An explicit short name is checked with `exists_by_short_name` first.
    /// The check is not atomic with the insert, so a unique-index violation on
    /// insert is reported the same way. A generated name skips the check and is
    /// regenerated on collision, up to 10 times.
    ///
    /// # Errors
    ///
    /// Returns the [`Link::new`] validation errors, [`AppError::ShortNameExists`]
    /// for a taken explicit name, and [`AppError::Internal`] when every
    /// generated name collided.
    pub async fn create_link(&self, original_url: &str, short_name: &str) -> Result<Link, AppError> {
        let mut link = Link::new(original_url, short_name)?;

        if short_name.is_empty() {
            for attempt in 1..=MAX_GENERATE_ATTEMPTS {
                match self.repository.create(link.clone()).await {
                    Ok(created) => {
                        tracing::info!(id = created.id, short_name = %created.short_name, "link created");
                        return Ok(created);
                    }
                    Err(e) if e.is_duplicate_short_name() => {
                        tracing::debug!(attempt, short_name = %link.short_name, "generated short name collided");
                        link.short_name = generate_short_name();
                    }
                    Err(e) => return Err(e),
                }
            }

            return Err(AppError::Internal(
                "failed to generate unique short name".to_string(),
            ));
        }

        if self.repository.exists_by_short_name(&link.short_name).await? {
            return Err(AppError::ShortNameExists);
        }

        let created = self.repository.create(link).await.map_err(|e| {
            if e.is_duplicate_short_name() {
                AppError::ShortNameExists
            } else {
                e
            }
        })?;

        tracing::info!(id = created.id, short_name = %created.short_name, "link created");
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.repository.get_by_id(id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this short name.
    pub async fn get_link_by_short_name(&self, short_name: &str) -> Result<Link, AppError> {
        self.repository.get_by_short_name(short_name).await
    }

    /// Returns one page of links and the total number of links.
    pub async fn get_all_links(&self, pagination: Pagination) -> Result<(Vec<Link>, i64), AppError> {
        self.repository.get_all(pagination).await
    }

    /// Updates a link with partial semantics.
    ///
    /// An empty `original_url` or `short_name` keeps the stored value. The
    /// merged values are revalidated through [`Link::new`]. Short-name
    /// uniqueness is left to the store's unique index.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist,
    /// [`AppError::UniqueViolation`] if the new short name is taken, or a
    /// validation error for the merged values.
    pub async fn update_link(
        &self,
        id: i64,
        original_url: &str,
        short_name: &str,
    ) -> Result<Link, AppError> {
        let (original_url, short_name, created_at) =
            if original_url.is_empty() || short_name.is_empty() {
                let existing = self.repository.get_by_id(id).await?;
                (
                    pick(original_url, existing.original_url),
                    pick(short_name, existing.short_name),
                    Some(existing.created_at),
                )
            } else {
                (original_url.to_string(), short_name.to_string(), None)
            };

        let mut link = Link::new(original_url, short_name)?;
        link.id = id;
        if let Some(created_at) = created_at {
            link.created_at = created_at;
        }

        self.repository.update(&link).await?;

        tracing::info!(id, short_name = %link.short_name, "link updated");
        Ok(link)
    }

    /// Deletes a link. Deleting a missing link succeeds.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(id, "link deleted");
        Ok(())
    }

    /// Builds the public short URL: `<base_url>/r/<short_name>`.
    pub fn get_short_url(&self, link: &Link) -> String {
        format!("{}/r/{}", self.base_url, link.short_name)
    }

    /// Records a visit for a resolved redirect.
    ///
    /// The redirect path logs and drops the error; redirects never fail because
    /// a visit could not be stored.
    pub async fn record_visit(
        &self,
        link_id: i64,
        ip: &str,
        user_agent: &str,
        referer: &str,
        status: i32,
    ) -> Result<(), AppError> {
        let visit = LinkVisit::new(link_id, ip, user_agent, referer, status);
        self.repository.create_visit(visit).await
    }

    /// Returns one page of visits, newest first, and the total number of visits.
    pub async fn get_visits(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<LinkVisit>, i64), AppError> {
        self.repository.get_visits(pagination).await
    }

    /// Deletes a visit. Deleting a missing visit succeeds.
    pub async fn delete_visit(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_visit(id).await
    }
}

/// Returns `value` unless it is empty, in which case `current` is kept.
fn pick(value: &str, current: String) -> String {
    if value.is_empty() {
        current
    } else {
        value.to_string()
    }
}
