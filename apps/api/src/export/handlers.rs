//! Axum route handlers for the Export API.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::pdf::render_note_pdf;
use crate::models::profile::clean_username;

#[derive(Debug, Deserialize)]
pub struct ExportPdfRequest {
    #[serde(default)]
    pub username: String,
    pub note: String,
}

/// Keeps a username safe to embed in a download filename.
fn filename_for(username: &str, timestamp: i64) -> String {
    let safe: String = clean_username(username)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    let safe = if safe.is_empty() { "friend" } else { safe.as_str() };
    format!("cheerify_{safe}_{timestamp}.pdf")
}

/// POST /api/export/pdf
///
/// Renders a finished note as a downloadable PDF.
pub async fn handle_export_pdf(
    Json(request): Json<ExportPdfRequest>,
) -> Result<Response, AppError> {
    if request.note.trim().is_empty() {
        return Err(AppError::Validation("note cannot be empty".to_string()));
    }

    let now = Utc::now();
    let username = clean_username(&request.username).to_string();
    let filename = filename_for(&username, now.timestamp());

    let note = request.note;
    let render_user = username.clone();
    let pdf = tokio::task::spawn_blocking(move || {
        render_note_pdf(&render_user, &note, now.date_naive())
    })
    .await
    .map_err(|e| AppError::Pdf(format!("PDF render task failed: {e}")))??;

    info!("Exported {} byte PDF for @{}", pdf.len(), username);

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| AppError::Pdf(format!("Invalid download filename: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
