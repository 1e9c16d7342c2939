#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored job posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Insertion order is meaningful for display, not for matching.
    pub requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Immutable job view handed to the evaluation pipeline.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
}

impl From<&JobRow> for JobDescription {
    fn from(row: &JobRow) -> Self {
        JobDescription {
            title: row.title.clone(),
            description: row.description.clone(),
            requirements: row.requirements.clone(),
        }
    }
}
