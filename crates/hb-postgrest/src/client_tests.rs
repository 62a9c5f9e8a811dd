//! Tests for store client functionality.

use std::time::Duration;

use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{StoreClient, StoreConfig};
use crate::error::StoreError;
use crate::query::{Filter, SelectQuery};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_client(base_url: &str) -> StoreClient {
    StoreClient::new(StoreConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
    })
    .unwrap()
}

fn job_row(id: i64, location: &str) -> serde_json::Value {
    json!({
        "id": id,
        "created_at": "2024-05-01T12:00:00Z",
        "recruiter_id": "user_2x",
        "title": "Systems Engineer",
        "description": "desc",
        "location": location,
        "company_id": 7,
        "requirements": "reqs",
        "isOpen": true,
    })
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[test]
fn test_error_from_http_status_401() {
    let err = StoreError::from_http_status(401, "no token");
    assert!(matches!(err, StoreError::AuthError(_)));
}

#[test]
fn test_error_from_http_status_403() {
    let err = StoreError::from_http_status(403, "rls says no");
    assert!(matches!(err, StoreError::PermissionDenied(_)));
}

#[test]
fn test_error_from_http_status_404_and_406() {
    assert!(matches!(
        StoreError::from_http_status(404, "not found"),
        StoreError::NotFound(_)
    ));
    assert!(matches!(
        StoreError::from_http_status(406, "not one row"),
        StoreError::NotFound(_)
    ));
}

#[test]
fn test_error_from_http_status_409() {
    let err = StoreError::from_http_status(409, "duplicate key");
    assert!(matches!(err, StoreError::Conflict(_)));
}

#[test]
fn test_error_from_http_status_429() {
    let err = StoreError::from_http_status(429, "rate limited");
    assert!(matches!(err, StoreError::RateLimited(_)));
}

#[test]
fn test_error_from_http_status_400() {
    let err = StoreError::from_http_status(400, "bad request");
    assert!(matches!(err, StoreError::RequestFailed(_)));
}

#[test]
fn test_error_from_http_status_500() {
    let err = StoreError::from_http_status(500, "internal error");
    assert!(matches!(err, StoreError::ServerError(500, _)));
}

#[test]
fn test_error_http_status_getter() {
    assert_eq!(StoreError::RateLimited(1000).http_status(), Some(429));
    assert_eq!(
        StoreError::ServerError(502, "bad gateway".into()).http_status(),
        Some(502)
    );
    assert_eq!(StoreError::NotFound("row".into()).http_status(), Some(404));
    assert_eq!(StoreError::Config("missing".into()).http_status(), None);
}

// =============================================================================
// Request Tests
// =============================================================================

#[tokio::test]
async fn test_select_sends_projection_filters_and_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param(
            "select",
            "*, company:companies(name,logo_url), saved:saved_jobs(id)",
        ))
        .and(query_param("location", "eq.Manzini"))
        .and(header("apikey", "test-key"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([job_row(1, "Manzini")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SelectQuery::new("*, company:companies(name,logo_url), saved:saved_jobs(id)")
        .eq("location", "Manzini");

    let rows: Vec<hb_models::JobListing> = client.select("jwt-abc", "jobs", &query).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].job.location, "Manzini");
}

#[tokio::test]
async fn test_select_single_uses_object_mode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("id", "eq.1"))
        .and(header("accept", "application/vnd.pgrst.object+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_row(1, "Manzini")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SelectQuery::all().eq("id", 1);

    let row: hb_models::Job = client
        .select_single("jwt-abc", "jobs", &query)
        .await
        .unwrap();
    assert_eq!(row.id, 1);
}

#[tokio::test]
async fn test_select_single_maps_missing_row_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(406).set_body_string("JSON object requested"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result: Result<hb_models::Job, _> = client
        .select_single("jwt-abc", "jobs", &SelectQuery::all().eq("id", 999))
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_insert_requests_representation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/saved_jobs"))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 10,
            "created_at": "2024-05-01T12:00:00Z",
            "job_id": 1,
            "candidate_id": "user_9",
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let rows: Vec<hb_models::SavedJob> = client
        .insert(
            "jwt-abc",
            "saved_jobs",
            &json!([{ "job_id": 1, "candidate_id": "user_9" }]),
        )
        .await
        .unwrap();
    assert_eq!(rows[0].id, 10);
}

#[tokio::test]
async fn test_insert_maps_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/companies"))
        .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result: Result<Vec<hb_models::Company>, _> = client
        .insert("jwt-abc", "companies", &json!([{ "name": "Acme" }]))
        .await;
    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[tokio::test]
async fn test_update_with_zero_matches_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/applications"))
        .and(query_param("job_id", "eq.42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let rows: Vec<serde_json::Value> = client
        .update(
            "jwt-abc",
            "applications",
            &json!({ "status": "reviewed" }),
            &[Filter::eq("job_id", 42)],
        )
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_delete_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/saved_jobs"))
        .and(query_param("job_id", "eq.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let rows: Vec<serde_json::Value> = client
        .delete("jwt-abc", "saved_jobs", &[Filter::eq("job_id", 1)])
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result: Result<Vec<serde_json::Value>, _> =
        client.select("jwt-abc", "jobs", &SelectQuery::all()).await;
    assert!(matches!(result, Err(StoreError::ServerError(500, _))));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
#[serial]
fn test_config_requires_base_url() {
    std::env::remove_var("STORE_BASE_URL");
    std::env::remove_var("SUPABASE_URL");
    std::env::set_var("STORE_API_KEY", "k");
    let result = StoreConfig::from_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_config_accepts_platform_env_names() {
    std::env::remove_var("STORE_BASE_URL");
    std::env::remove_var("STORE_API_KEY");
    std::env::set_var("SUPABASE_URL", "https://abc.supabase.co");
    std::env::set_var("SUPABASE_ANON_KEY", "anon");
    let config = StoreConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://abc.supabase.co");
    assert_eq!(config.api_key, "anon");
}

#[test]
#[serial]
fn test_config_default_timeouts() {
    std::env::set_var("STORE_BASE_URL", "https://store.example");
    std::env::set_var("STORE_API_KEY", "k");
    std::env::remove_var("STORE_TIMEOUT_SECS");
    std::env::remove_var("STORE_CONNECT_TIMEOUT_SECS");
    let config = StoreConfig::from_env().unwrap();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_config_handles_invalid_env_values() {
    std::env::set_var("STORE_BASE_URL", "https://store.example/");
    std::env::set_var("STORE_API_KEY", "k");
    std::env::set_var("STORE_TIMEOUT_SECS", "not-a-number");
    let config = StoreConfig::from_env().unwrap();
    assert_eq!(config.timeout, Duration::from_secs(30));
    // trailing slash is trimmed so url joins stay clean
    assert_eq!(config.base_url, "https://store.example");
}
