use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use things_core::item::{item_error_to_status_code, ItemError, MessageBody};

/// Handler error rendered as `{"message": ...}` with the mapped status code.
#[derive(Debug)]
pub struct AppError(pub ItemError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(item_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Logs the error at a level matching who caused it.
    pub fn log(&self) {
        let status = self.status_code();
        if self.0.is_client_error() {
            tracing::warn!(status = %status, message = %self.0, "Request rejected");
        } else {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        }
    }

    pub fn body(&self) -> MessageBody {
        MessageBody::new(self.0.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.body())).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<ItemError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
