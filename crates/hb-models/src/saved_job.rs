//! Saved-job bookmark rows.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::job::JobListing;

/// A bookmark row as stored in the `saved_jobs` table. Created and deleted
/// as a toggle, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SavedJob {
    /// Store-assigned row id
    pub id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    pub job_id: i64,

    pub candidate_id: String,
}

/// The `saved_jobs(id)` embedding on job listings; presence marks a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SavedJobRef {
    pub id: i64,
}

/// A bookmark joined with its job and company, as returned by
/// `*, job:jobs(*, company:companies(name,logo_url))`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SavedJobListing {
    #[serde(flatten)]
    pub saved: SavedJob,

    pub job: Option<JobListing>,
}

/// Row payload for creating a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SavedJobInsert {
    pub job_id: i64,
    pub candidate_id: String,
}
