//! Resume parsing — text extraction via pdf-extract plus keyword scanning
//! against a fixed inventory of skill, education, and experience terms.

use serde::Serialize;
use tracing::error;

/// Placeholder returned when text extraction fails. The application is
/// still processed; only the extracted text is degraded.
pub const EXTRACTION_FAILURE_TEXT: &str =
    "An error occurred while processing the resume. Please try a different PDF file.";

const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "ruby",
    "php",
    "go",
    "rust",
    "swift",
    "react",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "rails",
    "fastapi",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "firebase",
    "dynamodb",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ci/cd",
    "jenkins",
    "github actions",
    "react native",
    "flutter",
    "android",
    "ios",
    "kotlin",
    "machine learning",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "time management",
    "critical thinking",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "school",
    "gpa",
    "major",
    "minor",
    "computer science",
    "engineering",
    "information technology",
    "data science",
    "bootcamp",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "job",
    "internship",
    "project",
    "role",
    "position",
    "responsibility",
    "developed",
    "implemented",
    "designed",
    "created",
    "built",
    "managed",
    "led",
    "collaborated",
];

#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub text: String,
    pub keywords: Vec<String>,
}

/// Parses a PDF resume from raw bytes.
///
/// On extraction failure returns the placeholder text and an empty keyword
/// list instead of an error.
pub fn parse_pdf_resume(bytes: &[u8]) -> ParsedResume {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            let keywords = extract_keywords(&text);
            ParsedResume { text, keywords }
        }
        Err(e) => {
            error!("Error extracting resume text: {e}");
            ParsedResume {
                text: EXTRACTION_FAILURE_TEXT.to_string(),
                keywords: vec![],
            }
        }
    }
}

/// Scans the text for known keywords, returning matches deduplicated in
/// inventory order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found = Vec::new();

    for keyword in SKILL_KEYWORDS
        .iter()
        .chain(EDUCATION_KEYWORDS)
        .chain(EXPERIENCE_KEYWORDS)
    {
        if lower.contains(keyword) && !found.iter().any(|k| k == keyword) {
            found.push(keyword.to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_matches_case_insensitively() {
        let keywords = extract_keywords("Senior RUST engineer with PostgreSQL and Docker.");
        assert!(keywords.contains(&"rust".to_string()));
        assert!(keywords.contains(&"postgresql".to_string()));
        assert!(keywords.contains(&"docker".to_string()));
    }

    #[test]
    fn test_extract_keywords_spans_all_inventories() {
        let text = "Bachelor of Computer Science. Led a team and built React apps.";
        let keywords = extract_keywords(text);
        assert!(keywords.contains(&"react".to_string()));
        assert!(keywords.contains(&"bachelor".to_string()));
        assert!(keywords.contains(&"built".to_string()));
        assert!(keywords.contains(&"led".to_string()));
    }

    #[test]
    fn test_extract_keywords_dedupes_preserving_inventory_order() {
        let keywords = extract_keywords("python python PYTHON sql python");
        assert_eq!(
            keywords.iter().filter(|k| *k == "python").count(),
            1
        );
        // "python" precedes "sql" in the skill inventory
        let py = keywords.iter().position(|k| k == "python").unwrap();
        let sql = keywords.iter().position(|k| k == "sql").unwrap();
        assert!(py < sql);
    }

    #[test]
    fn test_extract_keywords_empty_text_yields_empty_list() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_invalid_pdf_degrades_to_placeholder() {
        let parsed = parse_pdf_resume(b"not a pdf at all");
        assert_eq!(parsed.text, EXTRACTION_FAILURE_TEXT);
        assert!(parsed.keywords.is_empty());
    }
}
