use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use hotentry::HotentryError;

/// Unified application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream feed could not be fetched, parsed, or re-serialized.
    #[error("{0}")]
    Upstream(#[from] HotentryError),

    /// Internal error.
    #[error("{0}")]
    Internal(String),
}

/// API error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            AppError::Upstream(e) => {
                tracing::error!("Upstream feed error: {}", e);
                // A write failure is ours; everything else is the upstream's.
                let status = match e {
                    HotentryError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, "upstream feed error".to_string(), Some(e.to_string()))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                    Some(msg.clone()),
                )
            }
        };

        let body = ErrorResponse {
            error: error_message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upstream_failures_map_to_bad_gateway_with_a_json_body() {
        let parse = AppError::from(HotentryError::Parse("bad xml".to_string()));
        let response = parse.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "upstream feed error");
        assert!(body["details"].as_str().unwrap().contains("bad xml"));

        let status = AppError::from(HotentryError::Status(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(status.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn write_failures_are_internal() {
        let write = AppError::from(HotentryError::Write("io".to_string()));
        assert_eq!(
            write.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let internal = AppError::internal("boom");
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
