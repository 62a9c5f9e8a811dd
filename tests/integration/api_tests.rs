//! Backend integration tests.
//!
//! These run against a real hosted project and are ignored by default; set
//! STORE_BASE_URL / STORE_API_KEY (and a service token in STORE_TEST_TOKEN)
//! to exercise them.

/// Test store connectivity with a plain company listing.
#[tokio::test]
#[ignore = "requires store credentials"]
async fn test_store_connection() {
    dotenvy::dotenv().ok();

    let store = hb_postgrest::StoreClient::from_env().expect("Failed to create store client");
    let token = std::env::var("STORE_TEST_TOKEN").expect("STORE_TEST_TOKEN must be set");

    let companies = hb_api::CompaniesApi::new(
        store,
        hb_storage::StorageClient::from_env().expect("Failed to create storage client"),
    );

    let rows = companies.list(&token).await;
    assert!(rows.is_some(), "company listing should succeed");
}

/// Round-trip a job posting: create, toggle, delete.
#[tokio::test]
#[ignore = "requires store credentials"]
async fn test_job_lifecycle() {
    use hb_models::NewJob;

    dotenvy::dotenv().ok();

    let store = hb_postgrest::StoreClient::from_env().expect("Failed to create store client");
    let token = std::env::var("STORE_TEST_TOKEN").expect("STORE_TEST_TOKEN must be set");
    let jobs = hb_api::JobsApi::new(store);

    let job = NewJob {
        title: "Integration Test Job".to_string(),
        description: "created by test_job_lifecycle".to_string(),
        location: "Manzini".to_string(),
        company_id: std::env::var("STORE_TEST_COMPANY_ID")
            .expect("STORE_TEST_COMPANY_ID must be set")
            .parse()
            .expect("STORE_TEST_COMPANY_ID must be an id"),
        recruiter_id: "test_recruiter_integration".to_string(),
        requirements: "none".to_string(),
        is_open: true,
    };

    let created = jobs.create(&token, &job).await.expect("Failed to create job");
    let job_id = created[0].id;
    println!("Created job: {}", job_id);

    let closed = jobs
        .set_hiring_status(&token, job_id, false)
        .await
        .expect("Failed to close job");
    assert!(!closed[0].is_open);

    let deleted = jobs.delete(&token, job_id).await.expect("Failed to delete job");
    assert_eq!(deleted[0].id, job_id);
}
