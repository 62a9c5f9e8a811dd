//! Application rows, education levels and application statuses.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Education level of a candidate. Wire values match the store's check
/// constraint exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Education {
    Intermediate,
    Graduate,
    #[serde(rename = "Post Graduate")]
    PostGraduate,
}

impl Education {
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Intermediate => "Intermediate",
            Education::Graduate => "Graduate",
            Education::PostGraduate => "Post Graduate",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at
    #[default]
    Applied,
    /// Seen by the recruiter
    Reviewed,
    /// Interview stage
    Interviewing,
    /// Offer accepted
    Hired,
    /// Turned down
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Interviewing => "interviewing",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Check if the application has reached a final decision.
    pub fn is_decided(&self) -> bool {
        matches!(self, ApplicationStatus::Hired | ApplicationStatus::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An application row as stored in the `applications` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Application {
    /// Store-assigned row id
    pub id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Job applied to
    pub job_id: i64,

    /// Identity-provider id of the candidate
    pub candidate_id: String,

    /// Candidate display name
    pub name: String,

    /// Years of experience
    pub experience: u32,

    /// Free-form skills text
    pub skills: String,

    pub education: Education,

    /// Public URL of the uploaded resume object
    pub resume: String,

    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Job columns embedded in the candidate's application list
/// (`jobs(title, company:companies(name))`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AppliedJob {
    pub title: String,
    pub company: Option<CompanyName>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyName {
    pub name: String,
}

/// An application row joined with its job, as returned by the candidate's
/// application list projection `*, job:jobs(title, company:companies(name))`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CandidateApplication {
    #[serde(flatten)]
    pub application: Application,

    pub job: Option<AppliedJob>,
}

/// Payload for submitting an application. The resume file travels separately;
/// the stored row references its public URL.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct NewApplication {
    pub job_id: i64,

    pub candidate_id: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Years of experience
    pub experience: u32,

    #[validate(length(min = 1, message = "Skills are required"))]
    pub skills: String,

    pub education: Education,

    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Row payload for inserting an application, after the resume upload
/// succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationInsert {
    #[serde(flatten)]
    pub application: NewApplication,

    /// Public URL of the uploaded resume object
    pub resume: String,
}
