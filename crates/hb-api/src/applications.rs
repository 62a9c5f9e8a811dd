//! Application resource operations.

use tracing::error;

use hb_models::{Application, ApplicationInsert, ApplicationStatus, CandidateApplication, NewApplication};
use hb_postgrest::{Filter, SelectQuery, StoreClient};
use hb_storage::{FileUpload, StorageClient};

/// Candidate projection: applications joined to job title and company name.
const CANDIDATE_PROJECTION: &str = "*, job:jobs(title, company:companies(name))";

/// Operations on the `applications` table and the resume bucket.
pub struct ApplicationsApi {
    store: StoreClient,
    storage: StorageClient,
}

impl ApplicationsApi {
    pub fn new(store: StoreClient, storage: StorageClient) -> Self {
        Self { store, storage }
    }

    /// Upload the resume under a randomized key, then insert the application
    /// row referencing its public URL. A failed upload short-circuits: the
    /// insert is never attempted.
    pub async fn submit(
        &self,
        token: &str,
        application: NewApplication,
        resume: FileUpload,
    ) -> Option<Vec<Application>> {
        let resume_url = match self
            .storage
            .upload_resume(token, &application.candidate_id, resume)
            .await
        {
            Ok(url) => url,
            Err(e) => {
                error!("Error uploading resume: {}", e);
                return None;
            }
        };

        let row = ApplicationInsert {
            application,
            resume: resume_url,
        };

        match self
            .store
            .insert(token, "applications", std::slice::from_ref(&row))
            .await
        {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error submitting application: {}", e);
                None
            }
        }
    }

    /// Move every application for a job to a new status. Matching zero rows
    /// counts as a failure, not an empty success.
    pub async fn set_status(
        &self,
        token: &str,
        job_id: i64,
        status: ApplicationStatus,
    ) -> Option<Vec<Application>> {
        let patch = serde_json::json!({ "status": status });

        match self
            .store
            .update::<Application, _>(token, "applications", &patch, &[Filter::eq("job_id", job_id)])
            .await
        {
            Ok(rows) if rows.is_empty() => {
                error!(
                    "Error updating application status: no applications for job {}",
                    job_id
                );
                None
            }
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error updating application status: {}", e);
                None
            }
        }
    }

    /// List a candidate's applications with the jobs they belong to.
    pub async fn for_candidate(
        &self,
        token: &str,
        candidate_id: &str,
    ) -> Option<Vec<CandidateApplication>> {
        let query = SelectQuery::new(CANDIDATE_PROJECTION).eq("candidate_id", candidate_id);

        match self.store.select(token, "applications", &query).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error fetching applications: {}", e);
                None
            }
        }
    }
}
