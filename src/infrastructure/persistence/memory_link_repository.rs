//! In-process implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Link, LinkVisit};
use crate::domain::pagination::Pagination;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Constraint name reported when a short name collides, matching the SQL schema.
const SHORT_NAME_CONSTRAINT: &str = "links_short_name_key";

#[derive(Debug)]
struct State {
    links: BTreeMap<i64, Link>,
    visits: Vec<LinkVisit>,
    next_link_id: i64,
    next_visit_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            links: BTreeMap::new(),
            visits: Vec::new(),
            next_link_id: 1,
            next_visit_id: 1,
        }
    }
}

impl State {
    fn short_name_taken(&self, short_name: &str, except: Option<i64>) -> bool {
        self.links
            .values()
            .any(|l| l.short_name == short_name && Some(l.id) != except)
    }
}

/// Repository backed by a mutex-guarded map.
///
/// Behaves like the PostgreSQL store: ids come from a sequence starting at 1,
/// short names are unique, and deleting a link deletes its visits. Used by the
/// HTTP tests.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    state: Mutex<State>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("repository lock poisoned".to_string()))
    }
}

fn duplicate() -> AppError {
    AppError::UniqueViolation {
        constraint: Some(SHORT_NAME_CONSTRAINT.to_string()),
    }
}

fn page<T: Clone>(items: &[T], pagination: Pagination) -> Vec<T> {
    let offset = usize::try_from(pagination.offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(pagination.limit).unwrap_or(0);
    items.iter().skip(offset).take(limit).cloned().collect()
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, mut link: Link) -> Result<Link, AppError> {
        let mut state = self.lock()?;

        if state.short_name_taken(&link.short_name, None) {
            return Err(duplicate());
        }

        link.id = state.next_link_id;
        link.created_at = Utc::now();
        state.next_link_id += 1;
        state.links.insert(link.id, link.clone());

        Ok(link)
    }

    async fn get_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.lock()?.links.get(&id).cloned().ok_or(AppError::NotFound)
    }

    async fn get_by_short_name(&self, short_name: &str) -> Result<Link, AppError> {
        self.lock()?
            .links
            .values()
            .find(|l| l.short_name == short_name)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn get_all(&self, pagination: Pagination) -> Result<(Vec<Link>, i64), AppError> {
        let state = self.lock()?;
        let links: Vec<Link> = state.links.values().cloned().collect();
        let total = links.len() as i64;

        Ok((page(&links, pagination), total))
    }

    async fn update(&self, link: &Link) -> Result<(), AppError> {
        let mut state = self.lock()?;

        if !state.links.contains_key(&link.id) {
            return Err(AppError::NotFound);
        }
        if state.short_name_taken(&link.short_name, Some(link.id)) {
            return Err(duplicate());
        }

        if let Some(stored) = state.links.get_mut(&link.id) {
            stored.original_url.clone_from(&link.original_url);
            stored.short_name.clone_from(&link.short_name);
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut state = self.lock()?;

        if state.links.remove(&id).is_some() {
            state.visits.retain(|v| v.link_id != id);
        }

        Ok(())
    }

    async fn exists_by_short_name(&self, short_name: &str) -> Result<bool, AppError> {
        Ok(self.lock()?.short_name_taken(short_name, None))
    }

    async fn create_visit(&self, mut visit: LinkVisit) -> Result<(), AppError> {
        let mut state = self.lock()?;

        if !state.links.contains_key(&visit.link_id) {
            return Err(AppError::NotFound);
        }

        visit.id = state.next_visit_id;
        visit.created_at = Utc::now();
        state.next_visit_id += 1;
        state.visits.push(visit);

        Ok(())
    }

    async fn get_visits(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<LinkVisit>, i64), AppError> {
        let state = self.lock()?;

        let mut visits = state.visits.clone();
        visits.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let total = visits.len() as i64;

        Ok((page(&visits, pagination), total))
    }

    async fn delete_visit(&self, id: i64) -> Result<(), AppError> {
        self.lock()?.visits.retain(|v| v.id != id);
        Ok(())
    }
}
