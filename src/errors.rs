use crate::models::ErrorBody;
use axum::http::StatusCode;
use axum::Json;

/// Failure talking to the upstream contribution API.
#[derive(Debug)]
pub enum UpstreamError {
    /// Transport-level failure (connect, timeout, body read).
    Request(reqwest::Error),
    /// Upstream answered with a non-success HTTP status.
    Status(StatusCode),
    /// Upstream answered 200 but carried an error list or no usable data.
    Api(String),
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamError::Request(err) => write!(f, "upstream request failed: {err}"),
            UpstreamError::Status(status) => write!(f, "upstream returned {status}"),
            UpstreamError::Api(detail) => write!(f, "upstream API error: {detail}"),
        }
    }
}

impl std::error::Error for UpstreamError {}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Request(err)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
