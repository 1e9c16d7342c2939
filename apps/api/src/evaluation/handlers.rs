//! Axum route handlers for the Evaluation API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::errors::AppError;
use crate::evaluation::evaluate_candidate;
use crate::models::application::CandidateProfile;
use crate::models::evaluation::CandidateEvaluation;
use crate::models::job::JobDescription;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub application_id: Uuid,
    pub evaluation: CandidateEvaluation,
}

/// POST /api/v1/applications/:id/evaluate
///
/// Loads the application and job, runs the evaluation pipeline, and writes
/// the result back onto the application row. Fetch and persist failures
/// surface as named errors; the pipeline itself cannot fail — it always
/// yields a structurally valid evaluation, so a returned evaluation with a
/// zero score may be a recovered model failure (check the summary text).
pub async fn handle_evaluate_candidate(
    State(state): State<AppState>,
    Path(application_id): Path<Uuid>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let application = state
        .applications
        .get(application_id)
        .await
        .map_err(|e| {
            error!("Error fetching candidate: {e}");
            AppError::Upstream("Failed to fetch candidate data".to_string())
        })?
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;

    let job = state
        .jobs
        .get(request.job_id)
        .await
        .map_err(|e| {
            error!("Error fetching job data: {e}");
            AppError::Upstream("Failed to fetch job data".to_string())
        })?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let candidate = CandidateProfile::from(&application);
    let job_description = JobDescription::from(&job);

    let evaluation = evaluate_candidate(&state.gemini, &candidate, &job_description).await;

    state
        .applications
        .save_evaluation(application_id, &evaluation)
        .await
        .map_err(|e| {
            error!("Error updating application: {e}");
            AppError::Upstream("Failed to update application data".to_string())
        })?;

    Ok(Json(EvaluateResponse {
        application_id,
        evaluation,
    }))
}
