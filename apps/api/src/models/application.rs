#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored candidate application, one row per submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub skills: String,
    pub experience: String,
    pub resume_text: Option<String>,
    pub resume_keywords: Vec<String>,
    pub status: String,
    pub summary: Option<String>,
    pub match_score: Option<i32>,
    pub technical_score: Option<i32>,
    pub experience_score: Option<i32>,
    pub education_score: Option<i32>,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an application. Resume fields come from the
/// resume parse endpoint and may be absent if the candidate skipped upload.
#[derive(Debug, Clone, Deserialize)]
pub struct NewApplication {
    pub name: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub skills: String,
    pub experience: String,
    pub resume_text: Option<String>,
    #[serde(default)]
    pub resume_keywords: Vec<String>,
}

/// Immutable candidate view handed to the evaluation pipeline.
/// `skills` keeps the free-text comma-delimited form the candidate entered.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub linkedin_url: Option<String>,
    pub skills: String,
    pub experience: String,
    pub resume_text: String,
    pub resume_keywords: Vec<String>,
}

impl From<&ApplicationRow> for CandidateProfile {
    fn from(row: &ApplicationRow) -> Self {
        CandidateProfile {
            name: row.name.clone(),
            email: row.email.clone(),
            linkedin_url: row.linkedin_url.clone(),
            skills: row.skills.clone(),
            experience: row.experience.clone(),
            resume_text: row.resume_text.clone().unwrap_or_default(),
            resume_keywords: row.resume_keywords.clone(),
        }
    }
}
