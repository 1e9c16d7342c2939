// Persistence gateway. Handlers depend on these traits, never on a concrete
// store, so the record store can be swapped without touching callers.

pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, NewApplication};
use crate::models::evaluation::CandidateEvaluation;
use crate::models::job::JobRow;

/// Record store for candidate applications, keyed by application id.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn create(&self, app: &NewApplication, summary: &str) -> sqlx::Result<ApplicationRow>;

    async fn list(&self) -> sqlx::Result<Vec<ApplicationRow>>;

    async fn get(&self, id: Uuid) -> sqlx::Result<Option<ApplicationRow>>;

    /// Writes an evaluation back onto the application row as a single atomic
    /// update. Absent sub-scores are persisted as 0 so stored records are
    /// never partially populated.
    async fn save_evaluation(&self, id: Uuid, eval: &CandidateEvaluation) -> sqlx::Result<()>;
}

/// Read side for job postings.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get(&self, id: Uuid) -> sqlx::Result<Option<JobRow>>;

    async fn list(&self) -> sqlx::Result<Vec<JobRow>>;
}
