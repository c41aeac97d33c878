//! Visit entity recorded on every successful redirect.

use chrono::{DateTime, Utc};

/// One resolved redirect.
///
/// Visits are append-only: they are inserted by the redirect path and may be
/// deleted individually, never updated. Client metadata is stored as-is and may
/// be empty when the request did not carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkVisit {
    pub id: i64,
    pub link_id: i64,
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
    /// HTTP status returned to the client.
    pub status: i32,
    pub created_at: DateTime<Utc>,
}

impl LinkVisit {
    /// Creates an unsaved visit (`id == 0`).
    pub fn new(
        link_id: i64,
        ip: impl Into<String>,
        user_agent: impl Into<String>,
        referer: impl Into<String>,
        status: i32,
    ) -> Self {
        Self {
            id: 0,
            link_id,
            ip: ip.into(),
            user_agent: user_agent.into(),
            referer: referer.into(),
            status,
            created_at: Utc::now(),
        }
    }
}
