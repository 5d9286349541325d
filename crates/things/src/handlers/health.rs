//! Health check endpoint for the local server.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching the item store.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
