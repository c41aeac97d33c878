//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkVisit};
use crate::domain::pagination::Pagination;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for links and their visits.
///
/// Queries are bound at runtime, so building the crate needs no live database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_name: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            original_url: row.original_url,
            short_name: row.short_name,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct VisitRow {
    id: i64,
    link_id: i64,
    ip: String,
    user_agent: String,
    referer: String,
    status: i32,
    created_at: DateTime<Utc>,
}

impl From<VisitRow> for LinkVisit {
    fn from(row: VisitRow) -> Self {
        Self {
            id: row.id,
            link_id: row.link_id,
            ip: row.ip,
            user_agent: row.user_agent,
            referer: row.referer,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, link: Link) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (original_url, short_name)
            VALUES ($1, $2)
            RETURNING id, original_url, short_name, created_at
            "#,
        )
        .bind(&link.original_url)
        .bind(&link.short_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, original_url, short_name, created_at FROM links WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or(AppError::NotFound)
    }

    async fn get_by_short_name(&self, short_name: &str) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, original_url, short_name, created_at FROM links WHERE short_name = $1",
        )
        .bind(short_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::from).ok_or(AppError::NotFound)
    }

    async fn get_all(&self, pagination: Pagination) -> Result<(Vec<Link>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_name, created_at
            FROM links
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok((rows.into_iter().map(Link::from).collect(), total))
    }

    async fn update(&self, link: &Link) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE links SET original_url = $1, short_name = $2 WHERE id = $3",
        )
        .bind(&link.original_url)
        .bind(&link.short_name)
        .bind(link.id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn exists_by_short_name(&self, short_name: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE short_name = $1)")
                .bind(short_name)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn create_visit(&self, visit: LinkVisit) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO link_visits (link_id, ip, user_agent, referer, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(visit.link_id)
        .bind(&visit.ip)
        .bind(&visit.user_agent)
        .bind(&visit.referer)
        .bind(visit.status)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn get_visits(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<LinkVisit>, i64), AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_visits")
            .fetch_one(self.pool.as_ref())
            .await?;

        let rows = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT
                id,
                link_id,
                COALESCE(ip, '') AS ip,
                COALESCE(user_agent, '') AS user_agent,
                COALESCE(referer, '') AS referer,
                status,
                created_at
            FROM link_visits
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit)
        .bind(pagination.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok((rows.into_iter().map(LinkVisit::from).collect(), total))
    }

    async fn delete_visit(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM link_visits WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
