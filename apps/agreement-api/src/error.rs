//! Error types for the agreement API

use agreement_core::{RenderError, ValidationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Render(RenderError::AssetLoad(e)) => {
                tracing::error!("Letterhead asset failure: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Branding asset unavailable".to_string(),
                )
            }
            ApiError::Render(RenderError::Document(e)) => {
                tracing::error!("Document assembly failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate document".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
