//! Error types for the profile API.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ProfileResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Fact service errors
    #[error("Cat Facts API timeout - please try again")]
    UpstreamTimeout,

    #[error("Fact service error: {0}")]
    Upstream(String),

    // Startup errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 504
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,

            // `/me` degrades other upstream failures before they get here.
            Self::Upstream(_) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the failure came from the fact service running out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::UpstreamTimeout)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Timestamp is taken here, at the point of failure.
        let body = Json(ProfileResponse::error(self.to_string()));

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else {
            Self::Upstream(format!("HTTP request failed: {}", err))
        }
    }
}
