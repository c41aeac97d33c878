//! Handler for the liveness probe.

/// Returns `pong`.
///
/// # Endpoint
///
/// `GET /ping`
///
/// Does not touch the store; it only proves the process is serving requests.
pub async fn ping_handler() -> &'static str {
    "pong"
}
