//! Handlers for the link admin endpoints.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::api::extract::{PageRange, PathId, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Lists links ordered by id.
///
/// # Endpoint
///
/// `GET /api/links?range=[<offset>,<limit>]`
///
/// The served window is reported in the `Content-Range` header, e.g.
/// `links 10-14/25`.
///
/// # Errors
///
/// Returns 400 Bad Request if `range` is malformed.
pub async fn list_links_handler(
    State(state): State<AppState>,
    PageRange(pagination): PageRange,
) -> Result<impl IntoResponse, AppError> {
    let (links, total) = state.link_service.get_all_links(pagination).await?;

    let body: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.get_short_url(&link);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok((
        [(header::CONTENT_RANGE, pagination.content_range(total))],
        Json(body),
    ))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com", "short_name": "exmpl" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body and 422 Unprocessable Entity
/// for field errors or a short name already in use.
pub async fn create_link_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let original_url = payload.original_url.unwrap_or_default();
    let short_name = payload.short_name.unwrap_or_default();

    let link = state
        .link_service
        .create_link(&original_url, &short_name)
        .await?;
    let short_url = state.link_service.get_short_url(&link);

    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, short_url))))
}

/// `GET /api/links/{id}`
pub async fn get_link_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id).await?;
    let short_url = state.link_service.get_short_url(&link);

    Ok(Json(LinkResponse::new(link, short_url)))
}

/// Updates a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// An absent or empty field keeps its stored value.
///
/// # Errors
///
/// Returns 404 Not Found if the link does not exist and 422 Unprocessable
/// Entity if the merged values are invalid or the short name is taken.
pub async fn update_link_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let original_url = payload.original_url.unwrap_or_default();
    let short_name = payload.short_name.unwrap_or_default();

    let link = state
        .link_service
        .update_link(id, &original_url, &short_name)
        .await?;
    let short_url = state.link_service.get_short_url(&link);

    Ok(Json(LinkResponse::new(link, short_url)))
}

/// Deletes a link and its visits.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// Replies 204 No Content whether or not the link existed.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
