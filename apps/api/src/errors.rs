use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::matching::interpreter::MalformedResponseError;
use crate::models::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Gateway error: {0}")]
    Gateway(#[from] LlmError),

    #[error("Malformed reasoning response: {0}")]
    MalformedResponse(#[from] MalformedResponseError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Gateway(e) => {
                tracing::error!("Reasoning gateway error: {e}");
                (
                    "GATEWAY_ERROR",
                    "The matching engine is currently unavailable".to_string(),
                )
            }
            AppError::MalformedResponse(e) => {
                tracing::error!("Malformed reasoning response: {e}");
                (
                    "MALFORMED_RESPONSE",
                    "The matching engine returned an invalid analysis".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err: AppError =
            ValidationError::new("vacante.hard_skills", "must contain at least one entry").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("vacante.hard_skills"));
    }

    #[test]
    fn test_gateway_maps_to_500() {
        let err = AppError::from(LlmError::EmptyContent);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_gateway_details_not_exposed() {
        let err = AppError::from(LlmError::Api {
            status: 401,
            message: "invalid api key gsk_secret".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("GATEWAY_ERROR"));
        assert!(!body.contains("gsk_secret"));
    }
}
