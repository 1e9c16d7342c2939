use serde::{Deserialize, Serialize};

/// The canonical evaluation shape, shared by the model path and the
/// heuristic fallback.
///
/// Invariant: `match_score` and any present sub-score lie in [0, 100].
/// Sub-scores stay `None` when the model does not supply them; the store
/// persists absent scores as 0 so records are never partially populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEvaluation {
    pub summary: String,
    pub match_score: i32,
    pub technical_score: Option<i32>,
    pub experience_score: Option<i32>,
    pub education_score: Option<i32>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

impl CandidateEvaluation {
    /// A zeroed evaluation carrying only a diagnostic summary. Used for the
    /// parse-failure and call-failure terminal states, which must still be
    /// structurally valid records.
    pub fn zeroed(summary: impl Into<String>) -> Self {
        CandidateEvaluation {
            summary: summary.into(),
            match_score: 0,
            technical_score: Some(0),
            experience_score: Some(0),
            education_score: Some(0),
            strengths: vec![],
            weaknesses: vec![],
            recommendations: vec![],
        }
    }
}
