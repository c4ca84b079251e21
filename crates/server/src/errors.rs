use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Failure surfaced by a handler.
///
/// `NotFound` renders as a bare 404 with an empty body; handlers pick it
/// explicitly when a lookup misses. Everything else is an unclassified
/// server error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Internal Server Error", "detail": msg})),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[tokio::test]
    async fn not_found_renders_bare_404() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn service_errors_convert_to_internal() {
        let err = ApiError::from(ServiceError::not_found("ice_cream", 1));
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = ApiError::from(ServiceError::Model(ModelError::Db("connection refused".into())));
        assert!(matches!(err, ApiError::Internal(ref m) if m.contains("connection refused")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
