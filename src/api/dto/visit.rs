//! DTO for the visit endpoints.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::domain::entities::LinkVisit;

/// JSON representation of a recorded visit.
#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub id: i64,
    pub link_id: i64,
    /// RFC 3339 timestamp in UTC.
    pub created_at: String,
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
    pub status: i32,
}

impl From<LinkVisit> for VisitResponse {
    fn from(visit: LinkVisit) -> Self {
        Self {
            id: visit.id,
            link_id: visit.link_id,
            created_at: visit.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ip: visit.ip,
            user_agent: visit.user_agent,
            referer: visit.referer,
            status: visit.status,
        }
    }
}
