//! Admin API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, delete_visit_handler, get_link_handler,
    list_links_handler, list_visits_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Admin routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`             - List links (`?range=[o,l]`)
/// - `POST   /links`             - Create a link
/// - `GET    /links/{id}`        - Get a link
/// - `PUT    /links/{id}`        - Update a link
/// - `DELETE /links/{id}`        - Delete a link
/// - `GET    /link_visits`       - List visits (`?range=[o,l]`)
/// - `DELETE /link_visits/{id}`  - Delete a visit
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/link_visits", get(list_visits_handler))
        .route("/link_visits/{id}", delete(delete_visit_handler))
}
