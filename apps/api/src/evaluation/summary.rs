//! Candidate summary generation — a short professional blurb produced at
//! application submission time. Best-effort: every failure degrades to a
//! templated summary, never to an error.

use rand::Rng;
use tracing::{error, warn};

use crate::evaluation::prompts;
use crate::llm_client::GeminiClient;
use crate::models::application::CandidateProfile;

/// Generates a 2-3 sentence summary of the candidate.
pub async fn generate_candidate_summary(
    gemini: &GeminiClient,
    candidate: &CandidateProfile,
) -> String {
    if !gemini.is_configured() {
        warn!("Missing Gemini API key. Using templated candidate summary.");
        return fallback_summary(candidate, &mut rand::thread_rng());
    }

    let prompt = prompts::build_summary_prompt(candidate);

    match gemini.generate(&prompt).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            error!("Error generating candidate summary: {e}");
            fallback_summary(candidate, &mut rand::thread_rng())
        }
    }
}

/// Picks one of three summary templates built from the candidate's skills
/// and first sentence of experience.
pub fn fallback_summary<R: Rng>(candidate: &CandidateProfile, rng: &mut R) -> String {
    let skills: Vec<&str> = candidate
        .skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let first_skill = skills.first().copied().unwrap_or("their field");
    let first_experience = candidate
        .experience
        .split('.')
        .next()
        .unwrap_or("")
        .trim();

    let summaries = [
        format!(
            "{} is a skilled professional with experience in {}. They have demonstrated strong \
             capabilities in previous roles and would be a valuable addition to the team.",
            candidate.name,
            skills.iter().take(3).copied().collect::<Vec<_>>().join(", ")
        ),
        format!(
            "Experienced in {}, {} brings practical knowledge and a problem-solving approach to \
             their work. Their background shows consistent growth and learning.",
            skills.iter().take(2).copied().collect::<Vec<_>>().join(" and "),
            candidate.name
        ),
        format!(
            "A dedicated professional with expertise in {}, {} has a track record of delivering \
             quality results. Their experience in {} demonstrates commitment to excellence.",
            first_skill, candidate.name, first_experience
        ),
    ];

    let pick = rng.gen_range(0..summaries.len());
    summaries[pick].clone()
}
