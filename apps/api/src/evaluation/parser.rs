//! Evaluation Response Parser — turns raw Gemini output into a validated
//! `CandidateEvaluation`, absorbing every failure into a zeroed evaluation.
//!
//! The model response is an untrusted external payload: it goes through an
//! explicit deserialize-then-validate step rather than a direct cast, so a
//! JSON-parseable-but-incomplete payload (e.g. missing summary) is caught
//! deterministically instead of silently producing a partial record.

use serde::Deserialize;
use tracing::error;

use crate::models::evaluation::CandidateEvaluation;

/// Summary of the fixed evaluation returned when the response is unusable.
pub const PARSE_FAILURE_SUMMARY: &str =
    "Error evaluating candidate - Could not parse Gemini response.";

/// Summary of the fixed evaluation returned when the model call itself
/// failed. Distinct from the parse failure so operators can tell "we asked
/// and got garbage" from "we couldn't ask".
pub const CALL_FAILURE_SUMMARY: &str = "Error evaluating candidate - Gemini API call failed.";

/// Raw wire shape. `summary` and `match_score` are required; the three
/// sub-scores are tolerated as absent (older responses predate them).
#[derive(Debug, Deserialize)]
struct RawEvaluation {
    summary: String,
    match_score: f64,
    technical_score: Option<f64>,
    experience_score: Option<f64>,
    education_score: Option<f64>,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
}

/// Parses raw model text into a validated evaluation.
///
/// Never fails: on any parse or validation error the raw and cleaned text
/// are logged for diagnosis and the fixed parse-failure evaluation is
/// returned, so callers always receive a structurally valid record.
pub fn parse_evaluation(raw: &str) -> CandidateEvaluation {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<RawEvaluation>(&cleaned) {
        Ok(parsed) => CandidateEvaluation {
            summary: parsed.summary,
            match_score: clamp_score(parsed.match_score),
            technical_score: parsed.technical_score.map(clamp_score),
            experience_score: parsed.experience_score.map(clamp_score),
            education_score: parsed.education_score.map(clamp_score),
            strengths: parsed.strengths,
            weaknesses: parsed.weaknesses,
            recommendations: parsed.recommendations,
        },
        Err(e) => {
            error!(
                "Error parsing Gemini response: {e}. Response text: {raw}. Cleaned text: {cleaned}"
            );
            parse_failure_evaluation()
        }
    }
}

/// The fixed evaluation for unusable model responses.
pub fn parse_failure_evaluation() -> CandidateEvaluation {
    CandidateEvaluation::zeroed(PARSE_FAILURE_SUMMARY)
}

/// The fixed evaluation for failed model calls.
pub fn call_failure_evaluation() -> CandidateEvaluation {
    CandidateEvaluation::zeroed(CALL_FAILURE_SUMMARY)
}

/// Strips Markdown code-fence artifacts from model output.
///
/// The model sometimes wraps JSON in ```json ... ``` fences despite being
/// told not to. Opening tokens with a language tag and bare closing tokens
/// are removed wherever they appear; already-clean payloads pass through
/// unchanged, so the operation is idempotent.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Scores are constrained to [0, 100]; out-of-range model values are clamped
/// rather than rejected.
fn clamp_score(n: f64) -> i32 {
    n.round().clamp(0.0, 100.0) as i32
}
