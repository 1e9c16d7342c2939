//! Heuristic Fallback Evaluator — scores a candidate without the model.
//!
//! Used only when no Gemini API key is configured. Model-call and parse
//! failures take the zeroed failure paths in `parser` instead.
//!
//! The randomness source is injected so tests can seed a deterministic
//! generator; production callers pass `rand::thread_rng()`, which makes this
//! path non-deterministic by design.

use rand::Rng;

use crate::models::application::CandidateProfile;
use crate::models::evaluation::CandidateEvaluation;
use crate::models::job::JobDescription;

/// Computes a match score and templated feedback from keyword overlap.
///
/// Scoring: each requirement counts as matched if any skill token appears as
/// a substring of the requirement, or the requirement's first word appears
/// as a substring of any skill token. The asymmetry is deliberately loose —
/// it lets "Proficient in React" match the skill "react". The final score is
/// `min(100, round(matched/total × 100) + bonus)` with a random bonus in
/// [0, 20), which softens scores when requirement phrasing does not lexically
/// overlap the skills.
pub fn heuristic_evaluation<R: Rng>(
    candidate: &CandidateProfile,
    job: &JobDescription,
    rng: &mut R,
) -> CandidateEvaluation {
    let skills: Vec<String> = candidate
        .skills
        .to_lowercase()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let requirements: Vec<String> = job.requirements.iter().map(|r| r.to_lowercase()).collect();

    let match_count = requirements
        .iter()
        .filter(|req| requirement_matched(req, &skills))
        .count();

    // Guard the empty-requirements case: score is then bonus-only.
    let base = if requirements.is_empty() {
        0
    } else {
        ((match_count as f64 / requirements.len() as f64) * 100.0).round() as i32
    };
    let bonus: i32 = rng.gen_range(0..20);
    let match_score = (base + bonus).min(100);

    let qualifier = if match_score > 80 {
        "strong"
    } else if match_score > 60 {
        "good"
    } else {
        "potential"
    };

    let top_skills: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();

    let summary = format!(
        "{} appears to be a {} candidate for the {} position. \
         Their experience with {} aligns with several of our requirements.",
        candidate.name,
        qualifier,
        job.title,
        top_skills.join(", ")
    );

    let first_sentence = candidate
        .experience
        .split('.')
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    let strengths = vec![
        format!(
            "Experience with {}",
            skills.first().map(String::as_str).unwrap_or("relevant technologies")
        ),
        format!(
            "Knowledge of {}",
            skills.get(1).map(String::as_str).unwrap_or("industry standards")
        ),
        format!("Background in {first_sentence}"),
        "Demonstrated skills in problem-solving".to_string(),
    ];

    // The first requirement no skill covers, if any.
    let unmet_requirement = requirements
        .iter()
        .find(|req| !skills.iter().any(|skill| req.contains(skill.as_str())))
        .cloned();

    let weaknesses = vec![
        unmet_requirement
            .unwrap_or_else(|| "Limited experience with some required technologies".to_string()),
        "Could benefit from more specialized knowledge in this field".to_string(),
    ];

    let recommendations = vec![
        "Consider additional training in specific job requirements".to_string(),
        "Highlight relevant project experience in the interview".to_string(),
        "Prepare examples of problem-solving abilities".to_string(),
    ];

    CandidateEvaluation {
        summary,
        match_score,
        technical_score: None,
        experience_score: None,
        education_score: None,
        strengths,
        weaknesses,
        recommendations,
    }
}

fn requirement_matched(req: &str, skills: &[String]) -> bool {
    let first_word = req.split_whitespace().next().unwrap_or("");
    skills.iter().any(|skill| {
        req.contains(skill.as_str()) || (!first_word.is_empty() && skill.contains(first_word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(skills: &str) -> CandidateProfile {
        CandidateProfile {
            name: "Jordan Reyes".to_string(),
            email: "jordan@example.com".to_string(),
            linkedin_url: None,
            skills: skills.to_string(),
            experience: "Five years building web platforms. Led a small team.".to_string(),
            resume_text: String::new(),
            resume_keywords: vec![],
        }
    }

    fn job(requirements: &[&str]) -> JobDescription {
        JobDescription {
            title: "Full Stack Developer".to_string(),
            description: "Build and run our product".to_string(),
            requirements: requirements.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_partial_overlap_scenario_scores_within_derived_bounds() {
        // 2 of 3 requirements match: base = round(2/3 * 100) = 67,
        // bonus ∈ [0, 20) → score ∈ [67, 86]
        let c = candidate("React, Node.js, SQL");
        let j = job(&["React experience", "SQL knowledge", "Leadership"]);
        for seed in 0..50 {
            let mut r = StdRng::seed_from_u64(seed);
            let eval = heuristic_evaluation(&c, &j, &mut r);
            assert!(
                (67..=86).contains(&eval.match_score),
                "score {} out of bounds",
                eval.match_score
            );
        }
    }

    #[test]
    fn test_no_overlap_scores_bonus_only() {
        let c = candidate("Cobol, Fortran");
        let j = job(&["Kubernetes operations", "Go services"]);
        for seed in 0..50 {
            let mut r = StdRng::seed_from_u64(seed);
            let eval = heuristic_evaluation(&c, &j, &mut r);
            assert!((0..20).contains(&eval.match_score));
        }
    }

    #[test]
    fn test_exact_token_match_clamps_to_100() {
        let c = candidate("react, sql");
        let j = job(&["react", "sql"]);
        for seed in 0..50 {
            let mut r = StdRng::seed_from_u64(seed);
            let eval = heuristic_evaluation(&c, &j, &mut r);
            assert_eq!(eval.match_score, 100);
        }
    }

    #[test]
    fn test_empty_requirements_does_not_divide_by_zero() {
        let c = candidate("React");
        let j = job(&[]);
        for seed in 0..50 {
            let mut r = StdRng::seed_from_u64(seed);
            let eval = heuristic_evaluation(&c, &j, &mut r);
            assert!((0..20).contains(&eval.match_score));
        }
    }

    #[test]
    fn test_feedback_lists_are_never_empty() {
        let eval = heuristic_evaluation(&candidate(""), &job(&[]), &mut rng());
        assert!(!eval.strengths.is_empty());
        assert!(!eval.weaknesses.is_empty());
        assert!(!eval.recommendations.is_empty());
        assert!((0..=100).contains(&eval.match_score));
    }

    #[test]
    fn test_first_word_of_requirement_matches_inside_skill() {
        // "React" is the first word of the requirement and a substring of
        // the skill token "react native".
        let c = candidate("react native");
        let j = job(&["react experience required"]);
        let eval = heuristic_evaluation(&c, &j, &mut rng());
        assert_eq!(eval.match_score, 100);
    }

    #[test]
    fn test_summary_qualifier_strong_when_all_matched() {
        let c = candidate("react, sql");
        let j = job(&["react", "sql"]);
        let eval = heuristic_evaluation(&c, &j, &mut rng());
        assert!(eval.summary.contains("strong candidate"));
        assert!(eval.summary.contains("Full Stack Developer"));
    }

    #[test]
    fn test_summary_qualifier_potential_when_nothing_matched() {
        let c = candidate("cobol");
        let j = job(&["kubernetes", "terraform", "go", "python", "java", "scala"]);
        let eval = heuristic_evaluation(&c, &j, &mut rng());
        assert!(eval.summary.contains("potential candidate"));
    }

    #[test]
    fn test_first_unmet_requirement_becomes_weakness() {
        let c = candidate("React, Node.js, SQL");
        let j = job(&["React experience", "SQL knowledge", "Leadership"]);
        let eval = heuristic_evaluation(&c, &j, &mut rng());
        assert_eq!(eval.weaknesses[0], "leadership");
    }

    #[test]
    fn test_sub_scores_absent_on_heuristic_path() {
        let eval = heuristic_evaluation(&candidate("rust"), &job(&["rust"]), &mut rng());
        assert_eq!(eval.technical_score, None);
        assert_eq!(eval.experience_score, None);
        assert_eq!(eval.education_score, None);
    }

    #[test]
    fn test_seeded_rng_makes_output_reproducible() {
        let c = candidate("React, Node.js");
        let j = job(&["React experience"]);
        let a = heuristic_evaluation(&c, &j, &mut StdRng::seed_from_u64(7));
        let b = heuristic_evaluation(&c, &j, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
