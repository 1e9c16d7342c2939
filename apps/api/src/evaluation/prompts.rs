// All Gemini prompt templates for the Evaluation module.

use crate::models::application::CandidateProfile;
use crate::models::job::JobDescription;

/// Evaluation prompt template. Placeholders are replaced before sending.
/// The model is instructed to return a bare JSON object, but responses are
/// still fence-stripped in the parser because it sometimes wraps them anyway.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate this candidate for the "{job_title}" position.

JOB DESCRIPTION:
{job_description}

REQUIREMENTS:
{requirements}

CANDIDATE PROFILE:
Name: {candidate_name}
Skills: {candidate_skills}
Experience: {candidate_experience}
Resume: {resume_text}

Please provide ONLY a JSON response (no additional commentary, no backticks) with the following structure:
{
  "summary": "Overall evaluation of the candidate",
  "match_score": number,
  "technical_score": number,
  "experience_score": number,
  "education_score": number,
  "strengths": ["List of 3-5 candidate strengths relevant to this position"],
  "weaknesses": ["List of 2-3 areas for improvement"],
  "recommendations": ["List of 2-3 specific recommendations for the candidate"]
}"#;

/// Summary prompt template, used at application submission time.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Generate a concise professional summary for this candidate based on their profile and resume.

Candidate Name: {candidate_name}
Skills: {candidate_skills}
Experience: {candidate_experience}
Resume Text: {resume_text}
Keywords: {resume_keywords}

The summary should be 2-3 sentences highlighting their key qualifications, experience level, and standout skills."#;

/// Builds the evaluation prompt. Pure string interpolation: the prompt is
/// sent as unstructured text, so no escaping is applied.
pub fn build_evaluation_prompt(candidate: &CandidateProfile, job: &JobDescription) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{job_title}", &job.title)
        .replace("{job_description}", &job.description)
        .replace("{requirements}", &job.requirements.join("\n"))
        .replace("{candidate_name}", &candidate.name)
        .replace("{candidate_skills}", &candidate.skills)
        .replace("{candidate_experience}", &candidate.experience)
        .replace("{resume_text}", &candidate.resume_text)
}

/// Builds the candidate-summary prompt.
pub fn build_summary_prompt(candidate: &CandidateProfile) -> String {
    SUMMARY_PROMPT_TEMPLATE
        .replace("{candidate_name}", &candidate.name)
        .replace("{candidate_skills}", &candidate.skills)
        .replace("{candidate_experience}", &candidate.experience)
        .replace("{resume_text}", &candidate.resume_text)
        .replace("{resume_keywords}", &candidate.resume_keywords.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_candidate() -> CandidateProfile {
        CandidateProfile {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            linkedin_url: None,
            skills: "Rust, SQL, Distributed Systems".to_string(),
            experience: "Ten years of backend work.".to_string(),
            resume_text: "Built analytical engines.".to_string(),
            resume_keywords: vec!["rust".to_string(), "sql".to_string()],
        }
    }

    fn sample_job() -> JobDescription {
        JobDescription {
            title: "Backend Engineer".to_string(),
            description: "Own our evaluation services.".to_string(),
            requirements: vec![
                "Rust experience".to_string(),
                "SQL knowledge".to_string(),
            ],
        }
    }

    #[test]
    fn test_evaluation_prompt_embeds_all_fields_verbatim() {
        let prompt = build_evaluation_prompt(&sample_candidate(), &sample_job());
        assert!(prompt.contains(r#"the "Backend Engineer" position"#));
        assert!(prompt.contains("Own our evaluation services."));
        assert!(prompt.contains("Rust experience\nSQL knowledge"));
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Skills: Rust, SQL, Distributed Systems"));
        assert!(prompt.contains("Experience: Ten years of backend work."));
        assert!(prompt.contains("Resume: Built analytical engines."));
    }

    #[test]
    fn test_evaluation_prompt_requests_bare_json_with_schema() {
        let prompt = build_evaluation_prompt(&sample_candidate(), &sample_job());
        assert!(prompt.contains("ONLY a JSON response"));
        assert!(prompt.contains("\"match_score\": number"));
        assert!(prompt.contains("\"technical_score\": number"));
        assert!(prompt.contains("\"experience_score\": number"));
        assert!(prompt.contains("\"education_score\": number"));
        // No placeholder should survive interpolation
        assert!(!prompt.contains("{job_title}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_summary_prompt_joins_keywords_with_commas() {
        let prompt = build_summary_prompt(&sample_candidate());
        assert!(prompt.contains("Keywords: rust, sql"));
        assert!(prompt.contains("Candidate Name: Ada Lovelace"));
    }
}
