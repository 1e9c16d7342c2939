//! Axum route handler for resume parsing.

use axum::{extract::Multipart, Json};
use tracing::error;

use crate::errors::AppError;
use crate::resume::parser::{parse_pdf_resume, ParsedResume};

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload with a `resume` PDF field and returns the
/// extracted text and keywords. Degraded extraction still returns 200 — the
/// client proceeds with the placeholder text.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let mut resume_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() == Some("resume") {
            let is_pdf = field
                .content_type()
                .map(|ct| ct.contains("pdf"))
                .unwrap_or(false);
            if !is_pdf {
                return Err(AppError::Validation(
                    "Only PDF files are supported".to_string(),
                ));
            }
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read resume file: {e}")))?;
            resume_bytes = Some(bytes);
        }
    }

    let bytes =
        resume_bytes.ok_or_else(|| AppError::Validation("No resume file provided".to_string()))?;

    // pdf-extract is CPU-bound; keep it off the async worker threads.
    let parsed = tokio::task::spawn_blocking(move || parse_pdf_resume(&bytes))
        .await
        .map_err(|e| {
            error!("Resume parsing task failed: {e}");
            AppError::Internal(anyhow::anyhow!("resume parsing task panicked"))
        })?;

    Ok(Json(parsed))
}
