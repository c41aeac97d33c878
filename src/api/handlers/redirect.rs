//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short name to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Look up the link by short name
/// 2. Record a visit (client IP, User-Agent, Referer, status 302)
/// 3. Return 302 Found with `Location: <original_url>`
///
/// # Visit Recording
///
/// Runs inline under the configured visit deadline. A failed or timed-out
/// write is logged and the redirect is still served.
///
/// # Errors
///
/// Returns 404 Not Found if the short name does not exist. No visit is
/// recorded in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_link_by_short_name(&code).await?;

    let location = HeaderValue::from_str(&link.original_url)
        .map_err(|e| AppError::Internal(format!("invalid redirect target: {e}")))?;

    let status = StatusCode::FOUND;
    let ip = client_ip(&headers, addr, state.behind_proxy);
    let user_agent = header_str(&headers, header::USER_AGENT);
    let referer = header_str(&headers, header::REFERER);

    let record = state.link_service.record_visit(
        link.id,
        &ip,
        user_agent,
        referer,
        i32::from(status.as_u16()),
    );

    match tokio::time::timeout(state.visit_timeout, record).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::warn!(error = %e, link_id = link.id, "failed to record visit"),
        Err(_) => tracing::warn!(link_id = link.id, "recording visit timed out"),
    }

    Ok((status, [(header::LOCATION, location)]))
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> &str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
