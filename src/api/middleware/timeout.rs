//! Per-request deadline.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;

use crate::error::AppError;

/// Runs the rest of the stack under `deadline`.
///
/// On expiry the inner future is dropped, which aborts any in-flight store
/// query, and the client gets 503 `{"error":"request timed out"}`.
///
/// ```rust,ignore
/// let app = router.layer(middleware::from_fn_with_state(
///     Duration::from_secs(30),
///     timeout::layer,
/// ));
/// ```
pub async fn layer(State(deadline): State<Duration>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    match tokio::time::timeout(deadline, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%method, %uri, ?deadline, "request deadline exceeded");
            AppError::Timeout.into_response()
        }
    }
}
