use std::sync::Arc;
use std::time::Duration;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Shared handler state.
///
/// The service is type-erased over its repository so the same router serves
/// the PostgreSQL and in-memory stores.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    /// Read the visit IP from proxy headers.
    pub behind_proxy: bool,
    /// Upper bound on recording one visit.
    pub visit_timeout: Duration,
}

impl AppState {
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, base_url)),
            behind_proxy: false,
            visit_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_behind_proxy(mut self, behind_proxy: bool) -> Self {
        self.behind_proxy = behind_proxy;
        self
    }

    pub fn with_visit_timeout(mut self, visit_timeout: Duration) -> Self {
        self.visit_timeout = visit_timeout;
        self
    }
}
