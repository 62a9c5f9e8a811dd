//! Company resource operations.

use tracing::error;

use hb_models::{Company, CompanyInsert};
use hb_postgrest::{SelectQuery, StoreClient};
use hb_storage::{FileUpload, StorageClient};

/// Operations on the `companies` table and the logo bucket.
pub struct CompaniesApi {
    store: StoreClient,
    storage: StorageClient,
}

impl CompaniesApi {
    pub fn new(store: StoreClient, storage: StorageClient) -> Self {
        Self { store, storage }
    }

    /// List all companies.
    pub async fn list(&self, token: &str) -> Option<Vec<Company>> {
        match self.store.select(token, "companies", &SelectQuery::all()).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error fetching company data: {}", e);
                None
            }
        }
    }

    /// Upload the logo under a randomized key, then insert the row
    /// referencing its public URL.
    ///
    /// The two steps are not transactional: when the insert fails the
    /// uploaded object stays behind with nothing pointing at it.
    pub async fn create(&self, token: &str, name: &str, logo: FileUpload) -> Option<Vec<Company>> {
        let logo_url = match self.storage.upload_logo(token, name, logo).await {
            Ok(url) => url,
            Err(e) => {
                error!("Error uploading company logo: {}", e);
                return None;
            }
        };

        let row = CompanyInsert {
            name: name.to_string(),
            logo_url,
        };

        match self
            .store
            .insert(token, "companies", std::slice::from_ref(&row))
            .await
        {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("Error creating company: {}", e);
                None
            }
        }
    }
}
