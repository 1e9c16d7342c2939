//! Axum route handlers for the Applications API.

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::summary::generate_candidate_summary;
use crate::models::application::{ApplicationRow, CandidateProfile, NewApplication};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitApplicationResponse {
    pub success: bool,
    pub application_id: Uuid,
    pub message: String,
}

/// POST /api/v1/applications
///
/// Validates the submission, generates a candidate summary (best-effort:
/// summary generation cannot fail, only degrade to a template), and stores
/// the application.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    Json(application): Json<NewApplication>,
) -> Result<Json<SubmitApplicationResponse>, AppError> {
    if application.name.trim().is_empty()
        || application.email.trim().is_empty()
        || application.skills.trim().is_empty()
        || application.experience.trim().is_empty()
    {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let candidate = CandidateProfile {
        name: application.name.clone(),
        email: application.email.clone(),
        linkedin_url: application.linkedin_url.clone(),
        skills: application.skills.clone(),
        experience: application.experience.clone(),
        resume_text: application.resume_text.clone().unwrap_or_default(),
        resume_keywords: application.resume_keywords.clone(),
    };

    let summary = generate_candidate_summary(&state.gemini, &candidate).await;

    let row = state.applications.create(&application, &summary).await?;

    Ok(Json(SubmitApplicationResponse {
        success: true,
        application_id: row.id,
        message: "Application submitted successfully".to_string(),
    }))
}

/// GET /api/v1/applications
///
/// Admin list of all applications, newest first.
pub async fn handle_list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let applications = state.applications.list().await?;
    Ok(Json(applications))
}
