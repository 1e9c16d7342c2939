// Candidate Evaluation Pipeline.
// Implements: prompt construction, the Gemini call, response parsing with
// failure absorption, and the heuristic fallback used when no key is set.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod fallback;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod summary;

use tracing::{error, warn};

use crate::llm_client::GeminiClient;
use crate::models::application::CandidateProfile;
use crate::models::evaluation::CandidateEvaluation;
use crate::models::job::JobDescription;

/// Evaluates a candidate against a job description.
///
/// This function never fails. Every terminal state produces a well-formed
/// `CandidateEvaluation`:
/// - no API key          → heuristic fallback evaluation
/// - model call failed   → zeroed call-failure evaluation
/// - response unparsable → zeroed parse-failure evaluation
/// - otherwise           → the validated model evaluation
///
/// Exactly one model request is issued per invocation; errors are terminal
/// for that evaluation and are never retried.
pub async fn evaluate_candidate(
    gemini: &GeminiClient,
    candidate: &CandidateProfile,
    job: &JobDescription,
) -> CandidateEvaluation {
    if !gemini.is_configured() {
        warn!("Missing Gemini API key. Using heuristic candidate evaluation.");
        return fallback::heuristic_evaluation(candidate, job, &mut rand::thread_rng());
    }

    let prompt = prompts::build_evaluation_prompt(candidate, job);

    match gemini.generate(&prompt).await {
        Ok(text) => parser::parse_evaluation(&text),
        Err(e) => {
            error!("Error evaluating candidate: {e}");
            parser::call_failure_evaluation()
        }
    }
}
