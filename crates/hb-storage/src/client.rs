//! Object store client implementation.
//!
//! Uploads go to `POST {base}/storage/v1/object/{bucket}/{key}` with bearer
//! auth; reads happen through the deterministic public URL
//! `{base}/storage/v1/object/public/{bucket}/{key}`. There is no delete or
//! compensation path here; a stored object referenced by a failed row
//! insert stays behind.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{StorageError, StorageResult};

/// Configuration for the storage client.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the hosted platform, shared with the relational store
    pub base_url: String,
    /// Project API key
    pub api_key: String,
    /// Request timeout (uploads can be slow on bad links)
    pub timeout: Duration,
}

impl StorageConfig {
    /// Create config from environment variables. Falls back to the store's
    /// variables since both services live under one platform URL.
    pub fn from_env() -> StorageResult<Self> {
        let base_url = std::env::var("STORAGE_BASE_URL")
            .or_else(|_| std::env::var("STORE_BASE_URL"))
            .or_else(|_| std::env::var("SUPABASE_URL"))
            .map_err(|_| StorageError::config_error("STORAGE_BASE_URL not set"))?;

        if base_url.is_empty() {
            return Err(StorageError::config_error("STORAGE_BASE_URL cannot be empty"));
        }

        let api_key = std::env::var("STORAGE_API_KEY")
            .or_else(|_| std::env::var("STORE_API_KEY"))
            .or_else(|_| std::env::var("SUPABASE_ANON_KEY"))
            .map_err(|_| StorageError::config_error("STORAGE_API_KEY not set"))?;

        let timeout_secs: u64 = std::env::var("STORAGE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Object store client.
#[derive(Clone)]
pub struct StorageClient {
    http: Client,
    config: StorageConfig,
}

impl StorageClient {
    /// Create a new storage client from configuration.
    pub fn new(config: StorageConfig) -> StorageResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("hb-storage/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StorageError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> StorageResult<Self> {
        Self::new(StorageConfig::from_env()?)
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url,
            bucket,
            urlencoding::encode(key)
        )
    }

    /// Public retrieval URL for a stored object.
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.base_url,
            bucket,
            urlencoding::encode(key)
        )
    }

    /// Upload bytes under `bucket/key`.
    pub async fn upload_bytes(
        &self,
        token: &str,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()> {
        debug!("Uploading {} bytes to {}/{}", data.len(), bucket, key);

        let url = self.object_url(bucket, key);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Err(StorageError::upload_failed(format!(
                    "{} failed ({}): {}",
                    url, status, body
                )))
            }
        }
    }
}
