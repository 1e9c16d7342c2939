//! PostgreSQL-backed stores.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, NewApplication};
use crate::models::evaluation::CandidateEvaluation;
use crate::models::job::JobRow;
use crate::store::{ApplicationStore, JobStore};

pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn create(&self, app: &NewApplication, summary: &str) -> sqlx::Result<ApplicationRow> {
        sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications
                (id, name, email, linkedin_url, skills, experience,
                 resume_text, resume_keywords, status, summary,
                 recommendations, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'New', $9, '{}', $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&app.name)
        .bind(&app.email)
        .bind(&app.linkedin_url)
        .bind(&app.skills)
        .bind(&app.experience)
        .bind(&app.resume_text)
        .bind(&app.resume_keywords)
        .bind(summary)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    async fn list(&self) -> sqlx::Result<Vec<ApplicationRow>> {
        sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: Uuid) -> sqlx::Result<Option<ApplicationRow>> {
        sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save_evaluation(&self, id: Uuid, eval: &CandidateEvaluation) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE applications
            SET summary = $2,
                match_score = $3,
                technical_score = $4,
                experience_score = $5,
                education_score = $6,
                recommendations = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&eval.summary)
        .bind(eval.match_score)
        .bind(eval.technical_score.unwrap_or(0))
        .bind(eval.experience_score.unwrap_or(0))
        .bind(eval.education_score.unwrap_or(0))
        .bind(&eval.recommendations)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn get(&self, id: Uuid) -> sqlx::Result<Option<JobRow>> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn list(&self) -> sqlx::Result<Vec<JobRow>> {
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }
}
