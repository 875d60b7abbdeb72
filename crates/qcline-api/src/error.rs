//! HTTP error mapping
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use qcline_core::QcError;
use qcline_report::RenderError;
use serde_json::json;
use thiserror::Error;

/// Handler error. Caller mistakes become 400, everything else 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Qc(#[from] QcError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Startup failed: {0}")]
    Startup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Qc(err) if err.is_caller_error() => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ApiError::Qc(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            ApiError::Metrics(_) | ApiError::Startup(_) | ApiError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = json!({
            "error": self.to_string(),
            "code": code,
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_bad_request() {
        let response = ApiError::from(QcError::invalid_input("major count -1 must be >= 0"))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_render_error_is_server_error() {
        let err = ApiError::from(RenderError::UnknownTemplate("email_summary".to_string()));
        assert_eq!(err.status_and_code(), (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"));
    }

    #[test]
    fn test_profile_error_is_server_error() {
        let err = ApiError::from(QcError::ProfileError("bad yaml".to_string()));
        assert_eq!(err.status_and_code().0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
