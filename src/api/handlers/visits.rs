//! Handlers for the visit admin endpoints.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::visit::VisitResponse;
use crate::api::extract::{PageRange, PathId};
use crate::error::AppError;
use crate::state::AppState;

/// Lists visits, newest first.
///
/// # Endpoint
///
/// `GET /api/link_visits?range=[<offset>,<limit>]`
///
/// The `Content-Range` header uses the same `links` unit as the link listing.
pub async fn list_visits_handler(
    State(state): State<AppState>,
    PageRange(pagination): PageRange,
) -> Result<impl IntoResponse, AppError> {
    let (visits, total) = state.link_service.get_visits(pagination).await?;

    let body: Vec<VisitResponse> = visits.into_iter().map(VisitResponse::from).collect();

    Ok((
        [(header::CONTENT_RANGE, pagination.content_range(total))],
        Json(body),
    ))
}

/// `DELETE /api/link_visits/{id}`. Replies 204 whether or not the visit existed.
pub async fn delete_visit_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_visit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
