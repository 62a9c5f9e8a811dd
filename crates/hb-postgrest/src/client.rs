//! PostgREST REST API client.
//!
//! Thin client over the store's `/rest/v1` endpoint with:
//! - HTTP client tuning (pooling, timeouts)
//! - Per-request bearer credentials supplied by the caller
//! - Observability (tracing spans, metrics)
//!
//! Tokens are never cached here; every call carries the credential it was
//! given. Retrying and backoff are intentionally absent; callers decide how
//! failures surface.

use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info_span, Instrument};

use crate::error::{StoreError, StoreResult};
use crate::metrics::record_request;
use crate::query::{Filter, SelectQuery};

/// Object-mode content type: the store returns a single JSON object and
/// fails unless exactly one row matches.
const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

/// Ask write operations to return the affected rows.
const PREFER_REPRESENTATION: &str = "return=representation";

// =============================================================================
// Configuration
// =============================================================================

/// Store client configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted platform, e.g. `https://abc.supabase.co`
    pub base_url: String,
    /// Project API key, sent as the `apikey` header on every request
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let base_url = std::env::var("STORE_BASE_URL")
            .or_else(|_| std::env::var("SUPABASE_URL"))
            .map_err(|_| {
                StoreError::config("STORE_BASE_URL or SUPABASE_URL must be set to reach the store")
            })?;

        if base_url.is_empty() {
            return Err(StoreError::config(
                "STORE_BASE_URL or SUPABASE_URL cannot be empty",
            ));
        }

        let api_key = std::env::var("STORE_API_KEY")
            .or_else(|_| std::env::var("SUPABASE_ANON_KEY"))
            .map_err(|_| {
                StoreError::config("STORE_API_KEY or SUPABASE_ANON_KEY must be set to reach the store")
            })?;

        let timeout_secs: u64 = std::env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let connect_timeout_secs: u64 = std::env::var("STORE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

// =============================================================================
// Client
// =============================================================================

/// PostgREST client for the relational store.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    config: StoreConfig,
    rest_url: String,
}

impl StoreClient {
    /// Create a new store client.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("hb-postgrest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(StoreError::Network)?;

        let rest_url = format!("{}/rest/v1", config.base_url.trim_end_matches('/'));

        Ok(Self {
            http,
            config,
            rest_url,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Attach the headers every store request carries.
    fn authed(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
    }

    // =========================================================================
    // CRUD Operations
    // =========================================================================

    /// Run a filtered select and deserialize the rows.
    pub async fn select<T: DeserializeOwned>(
        &self,
        token: &str,
        table: &str,
        query: &SelectQuery,
    ) -> StoreResult<Vec<T>> {
        let url = self.table_url(table);

        self.execute_request("select", table, async {
            let response = self
                .authed(self.http.get(&url), token)
                .query(&query.to_params())
                .send()
                .await?;
            Self::read_rows(response, &url).await
        })
        .await
    }

    /// Run a filtered select in object mode; exactly one row must match.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        token: &str,
        table: &str,
        query: &SelectQuery,
    ) -> StoreResult<T> {
        let url = self.table_url(table);

        self.execute_request("select_single", table, async {
            let response = self
                .authed(self.http.get(&url), token)
                .query(&query.to_params())
                .header(reqwest::header::ACCEPT, SINGLE_OBJECT_ACCEPT)
                .send()
                .await?;

            let status = response.status();
            match status {
                StatusCode::OK => {
                    let row: T = response.json().await?;
                    Ok(row)
                }
                StatusCode::NOT_ACCEPTABLE => Err(StoreError::not_found(format!(
                    "{}: expected exactly one row",
                    table
                ))),
                _ => Err(Self::error_response(status, &url, response).await),
            }
        })
        .await
    }

    /// Insert rows and return the stored representation.
    pub async fn insert<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        table: &str,
        rows: &B,
    ) -> StoreResult<Vec<T>> {
        let url = self.table_url(table);

        self.execute_request("insert", table, async {
            let response = self
                .authed(self.http.post(&url), token)
                .header("Prefer", PREFER_REPRESENTATION)
                .json(rows)
                .send()
                .await?;
            Self::read_rows(response, &url).await
        })
        .await
    }

    /// Patch all rows matching the filters and return them. Matching zero
    /// rows is not an error; the result is simply empty.
    pub async fn update<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        table: &str,
        patch: &B,
        filters: &[Filter],
    ) -> StoreResult<Vec<T>> {
        let url = self.table_url(table);
        let params: Vec<_> = filters.iter().map(Filter::to_param).collect();

        self.execute_request("update", table, async {
            let response = self
                .authed(self.http.patch(&url), token)
                .query(&params)
                .header("Prefer", PREFER_REPRESENTATION)
                .json(patch)
                .send()
                .await?;
            Self::read_rows(response, &url).await
        })
        .await
    }

    /// Delete all rows matching the filters and return them. Deleting rows
    /// that are already gone yields an empty result, not an error.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        token: &str,
        table: &str,
        filters: &[Filter],
    ) -> StoreResult<Vec<T>> {
        let url = self.table_url(table);
        let params: Vec<_> = filters.iter().map(Filter::to_param).collect();

        self.execute_request("delete", table, async {
            let response = self
                .authed(self.http.delete(&url), token)
                .query(&params)
                .header("Prefer", PREFER_REPRESENTATION)
                .send()
                .await?;
            Self::read_rows(response, &url).await
        })
        .await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    async fn read_rows<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &str,
    ) -> StoreResult<Vec<T>> {
        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let rows: Vec<T> = response.json().await?;
                Ok(rows)
            }
            _ => Err(Self::error_response(status, url, response).await),
        }
    }

    async fn error_response(
        status: StatusCode,
        url: &str,
        response: reqwest::Response,
    ) -> StoreError {
        let body = response.text().await.unwrap_or_default();
        StoreError::from_http_status(status.as_u16(), format!("{} failed: {}", url, body))
    }

    /// Execute a request with tracing and metrics.
    async fn execute_request<T, F>(&self, operation: &str, table: &str, fut: F) -> StoreResult<T>
    where
        F: std::future::Future<Output = StoreResult<T>>,
    {
        let span = info_span!("store_request", operation = %operation, table = %table);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(500),
        };
        record_request(operation, status, latency_ms);

        result
    }
}
