//! Job rows and their joined projections.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::Application;
use crate::company::CompanyRef;
use crate::saved_job::SavedJobRef;

/// A job row as stored in the `jobs` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Store-assigned row id
    pub id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Identity-provider id of the recruiter who posted the job
    pub recruiter_id: String,

    /// Job title
    pub title: String,

    /// Job description
    pub description: String,

    /// Location string, e.g. "Manzini"
    pub location: String,

    /// Company the job belongs to
    pub company_id: i64,

    /// Requirements text (markdown)
    pub requirements: String,

    /// Whether the position is still accepting applications.
    /// Column name predates the snake_case convention.
    #[serde(rename = "isOpen")]
    pub is_open: bool,
}

/// A job row joined with its company and the current candidate's bookmark
/// markers, as returned by the listing projection
/// `*, company:companies(name,logo_url), saved:saved_jobs(id)`.
///
/// `saved` is non-empty iff a saved_jobs row exists for the requesting
/// candidate and this job; row-level security scopes the embedding to the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: Job,

    /// Embedded company columns, absent if the join produced no row
    pub company: Option<CompanyRef>,

    /// Bookmark markers for the requesting candidate
    #[serde(default)]
    pub saved: Vec<SavedJobRef>,
}

impl JobListing {
    /// Whether the requesting candidate has bookmarked this job.
    pub fn is_saved(&self) -> bool {
        !self.saved.is_empty()
    }
}

/// A single job joined with its company and every application it received,
/// as returned by `*, company:companies(name,logo_url), applications:applications(*)`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,

    pub company: Option<CompanyRef>,

    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Optional filters for the job listing query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JobFilter {
    /// Exact-match location filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Exact-match company filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,

    /// Case-insensitive title substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Payload for posting a new job.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct NewJob {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Select a location"))]
    pub location: String,

    pub company_id: i64,

    pub recruiter_id: String,

    #[validate(length(min = 1, message = "Requirements must be provided"))]
    pub requirements: String,

    /// New jobs start open
    #[serde(rename = "isOpen", default = "default_is_open")]
    pub is_open: bool,
}

fn default_is_open() -> bool {
    true
}
