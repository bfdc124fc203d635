use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use interval_core::Interval;

/// A request the handler refuses, answered as plain text
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ApiError {
    #[display("Invalid request body: {_0}")]
    InvalidBody(serde_json::Error),
    #[display("Invalid interval {interval}: start exceeds end")]
    InvertedInterval { interval: Interval },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvertedInterval { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {self}");
        (self.status(), self.to_string()).into_response()
    }
}
