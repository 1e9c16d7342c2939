pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as application_handlers;
use crate::evaluation::handlers as evaluation_handlers;
use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API (read side)
        .route("/api/v1/jobs", get(job_handlers::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        // Applications API
        .route(
            "/api/v1/applications",
            post(application_handlers::handle_submit_application)
                .get(application_handlers::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/evaluate",
            post(evaluation_handlers::handle_evaluate_candidate),
        )
        // Resume API
        .route(
            "/api/v1/resumes/parse",
            post(resume_handlers::handle_parse_resume),
        )
        .with_state(state)
}
