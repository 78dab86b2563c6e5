//! HTTP handlers for the agreement API

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use agreement_core::RenderOptions;

use crate::error::ApiError;
use crate::models::AgreementRequest;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Validate the submitted form and respond with the rendered agreement
/// as a file download.
pub async fn generate_agreement(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AgreementRequest>,
) -> Result<Response, ApiError> {
    let include_branding = req.include_branding;
    let record = req.into_record();
    record.validate()?;

    let rendered = state
        .renderer
        .render(&record, RenderOptions { include_branding })
        .await?;

    tracing::info!(
        pages = rendered.page_count,
        file = %rendered.file_name,
        branded = include_branding,
        "Generated agreement"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", rendered.file_name),
        ),
    ];
    Ok((headers, rendered.bytes).into_response())
}
