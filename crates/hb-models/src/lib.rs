//! Shared data models for the HireBoard backend.
//!
//! This crate provides Serde-serializable types for:
//! - Job rows and their joined listing/detail projections
//! - Companies and company creation payloads
//! - Applications, education levels and application statuses
//! - Saved-job bookmark rows

pub mod application;
pub mod company;
pub mod job;
pub mod saved_job;

// Re-export common types
pub use application::{
    AppliedJob, Application, ApplicationInsert, ApplicationStatus, CandidateApplication,
    CompanyName, Education, NewApplication,
};
pub use company::{Company, CompanyInsert, CompanyRef};
pub use job::{Job, JobDetail, JobFilter, JobListing, NewJob};
pub use saved_job::{SavedJob, SavedJobInsert, SavedJobListing, SavedJobRef};
