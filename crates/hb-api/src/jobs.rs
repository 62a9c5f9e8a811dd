//! Job and saved-job resource operations.

use tracing::error;

use hb_models::{
    Job, JobDetail, JobFilter, JobListing, NewJob, SavedJob, SavedJobInsert, SavedJobListing,
};
use hb_postgrest::{Filter, SelectQuery, StoreClient};

/// Listing projection: jobs joined with company name/logo and the caller's
/// bookmark markers (row-level security scopes `saved` to the caller).
const LISTING_PROJECTION: &str = "*, company:companies(name,logo_url), saved:saved_jobs(id)";

/// Detail projection: one job with its company and every application.
const DETAIL_PROJECTION: &str = "*, company:companies(name,logo_url), applications:applications(*)";

/// Recruiter projection: jobs with their company, no bookmark markers.
const RECRUITER_PROJECTION: &str = "*, company:companies(name,logo_url)";

/// Bookmark projection: saved rows joined to job and company.
const SAVED_PROJECTION: &str = "*, job:jobs(*, company:companies(name,logo_url))";

/// Operations on the `jobs` and `saved_jobs` tables.
pub struct JobsApi {
    store: StoreClient,
}

impl JobsApi {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    /// List jobs, optionally filtered by location, company and title
    /// substring.
    pub async fn list(&self, token: &str, filter: &JobFilter) -> Option<Vec<JobListing>> {
        let mut query = SelectQuery::new(LISTING_PROJECTION);
        if let Some(location) = &filter.location {
            query = query.eq("location", location);
        }
        if let Some(company_id) = filter.company_id {
            query = query.eq("company_id", company_id);
        }
        if let Some(search) = &filter.search {
            query = query.ilike("title", format!("%{}%", search));
        }

        match self.store.select(token, "jobs", &query).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error fetching jobs: {}", e);
                None
            }
        }
    }

    /// Toggle a bookmark: delete it when `already_saved`, create it
    /// otherwise. Deleting a bookmark that is already gone succeeds with an
    /// empty row set.
    pub async fn save(
        &self,
        token: &str,
        already_saved: bool,
        save: &SavedJobInsert,
    ) -> Option<Vec<SavedJob>> {
        if already_saved {
            match self
                .store
                .delete(token, "saved_jobs", &[Filter::eq("job_id", save.job_id)])
                .await
            {
                Ok(rows) => Some(rows),
                Err(e) => {
                    error!("Error deleting saved job: {}", e);
                    None
                }
            }
        } else {
            match self
                .store
                .insert(token, "saved_jobs", std::slice::from_ref(save))
                .await
            {
                Ok(rows) => Some(rows),
                Err(e) => {
                    error!("Error inserting saved job: {}", e);
                    None
                }
            }
        }
    }

    /// Fetch a single job with its company and applications.
    pub async fn get(&self, token: &str, job_id: i64) -> Option<JobDetail> {
        let query = SelectQuery::new(DETAIL_PROJECTION).eq("id", job_id);

        match self.store.select_single(token, "jobs", &query).await {
            Ok(job) => Some(job),
            Err(e) => {
                error!("Error fetching single job: {}", e);
                None
            }
        }
    }

    /// Open or close a job for new applications.
    pub async fn set_hiring_status(
        &self,
        token: &str,
        job_id: i64,
        is_open: bool,
    ) -> Option<Vec<Job>> {
        let patch = serde_json::json!({ "isOpen": is_open });

        match self
            .store
            .update(token, "jobs", &patch, &[Filter::eq("id", job_id)])
            .await
        {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error updating job: {}", e);
                None
            }
        }
    }

    /// Post a new job.
    pub async fn create(&self, token: &str, job: &NewJob) -> Option<Vec<Job>> {
        match self
            .store
            .insert(token, "jobs", std::slice::from_ref(job))
            .await
        {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error creating job: {}", e);
                None
            }
        }
    }

    /// List the caller's bookmarked jobs.
    pub async fn saved(&self, token: &str) -> Option<Vec<SavedJobListing>> {
        let query = SelectQuery::new(SAVED_PROJECTION);

        match self.store.select(token, "saved_jobs", &query).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error fetching saved jobs: {}", e);
                None
            }
        }
    }

    /// List all jobs posted by a recruiter.
    pub async fn by_recruiter(&self, token: &str, recruiter_id: &str) -> Option<Vec<JobListing>> {
        let query = SelectQuery::new(RECRUITER_PROJECTION).eq("recruiter_id", recruiter_id);

        match self.store.select(token, "jobs", &query).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error fetching my jobs: {}", e);
                None
            }
        }
    }

    /// Delete a job posting.
    pub async fn delete(&self, token: &str, job_id: i64) -> Option<Vec<Job>> {
        match self
            .store
            .delete(token, "jobs", &[Filter::eq("id", job_id)])
            .await
        {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error deleting job: {}", e);
                None
            }
        }
    }
}
